use crate::consts::{self, PALETTE};
use rand::{seq::IndexedRandom, Rng};
use ratatui::style::Color;

/// Pick a color from the palette uniformly at random
pub(crate) fn pick<R: Rng>(rng: &mut R) -> Color {
    PALETTE
        .choose(rng)
        .copied()
        .unwrap_or(consts::DEFAULT_BACKGROUND)
}

/// Pick a palette color other than `current`.  If `current` is the only color
/// in the palette, it is returned.
pub(crate) fn pick_other<R: Rng>(rng: &mut R, current: Color) -> Color {
    let others = PALETTE
        .iter()
        .copied()
        .filter(|&c| c != current)
        .collect::<Vec<_>>();
    others.choose(rng).copied().unwrap_or(current)
}
