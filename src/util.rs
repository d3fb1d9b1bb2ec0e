use crate::consts;
use enum_map::Enum;
use rand::Rng;
use ratatui::layout::{Flex, Layout, Rect, Size};

pub(crate) trait EnumExt: Enum {
    /// Return a variant chosen uniformly at random
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_usize(rng.random_range(0..Self::LENGTH))
    }
}

impl<T: Enum> EnumExt for T {}

/// Return a rectangle of (at most) the given size in the center of `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}
