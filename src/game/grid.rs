use crate::consts;
use rand::Rng;
use ratatui::layout::{Position, Positions, Rect, Size};

/// The lattice of cells that the game is played on
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Grid {
    pub(crate) const fn new(width: u16, height: u16) -> Grid {
        Grid { width, height }
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Iterate over every cell in row-major order
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Position {
        Position::new(
            rng.random_range(0..self.width),
            rng.random_range(0..self.height),
        )
    }

    /// Pick a random cell for which `occupied` returns `false`.
    ///
    /// Cells are sampled uniformly up to
    /// [`PLACEMENT_ATTEMPTS`][consts::PLACEMENT_ATTEMPTS] times; if all
    /// samples are occupied, the first free cell in row-major order is
    /// returned instead.  Returns `None` if every cell is occupied.
    pub(crate) fn free_cell<R, F>(self, rng: &mut R, occupied: F) -> Option<Position>
    where
        R: Rng,
        F: Fn(Position) -> bool,
    {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        std::iter::repeat_with(|| self.random_cell(rng))
            .take(consts::PLACEMENT_ATTEMPTS)
            .find(|&p| !occupied(p))
            .or_else(|| self.positions().find(|&p| !occupied(p)))
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::from(consts::GRID_SIZE)
    }
}

impl From<Size> for Grid {
    fn from(size: Size) -> Grid {
        Grid::new(size.width, size.height)
    }
}
