use super::grid::Grid;
use super::obstacles::Obstacles;
use super::palette;
use crate::consts;
use rand::Rng;
use ratatui::{layout::Position, style::Color};
use std::collections::VecDeque;

/// The apple that the snake is chasing
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Item {
    pub(crate) position: Position,
    pub(crate) color: Color,
}

impl Item {
    /// Create a red item at a random cell of `grid`
    pub(crate) fn new<R: Rng>(rng: &mut R, grid: Grid) -> Item {
        Item {
            position: grid.random_cell(rng),
            color: consts::DEFAULT_ITEM_COLOR,
        }
    }

    /// Move the item to a random cell that is neither part of `snake` nor an
    /// obstacle.  Either constraint may be omitted.
    ///
    /// If there is nowhere to go, the item stays put.
    pub(crate) fn place_random<R: Rng>(
        &mut self,
        rng: &mut R,
        grid: Grid,
        snake: Option<&VecDeque<Position>>,
        obstacles: Option<&Obstacles>,
    ) {
        let occupied = |p: Position| {
            snake.is_some_and(|cells| cells.contains(&p))
                || obstacles.is_some_and(|obs| obs.contains(p))
        };
        if let Some(p) = grid.free_cell(rng, occupied) {
            self.position = p;
        } else {
            tracing::warn!(
                position = ?self.position,
                "no free cell left for the item; leaving it in place"
            );
        }
    }

    pub(crate) fn recolor<R: Rng>(&mut self, rng: &mut R) {
        self.color = palette::pick(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn snake() -> VecDeque<Position> {
        VecDeque::from([
            Position::new(20, 15),
            Position::new(19, 15),
            Position::new(18, 15),
        ])
    }

    #[test]
    fn place_avoids_snake_and_obstacles() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::default();
        let snake = snake();
        let obstacles = Obstacles::from_iter([Position::new(0, 0), Position::new(5, 9)]);
        let mut item = Item::new(&mut rng, grid);
        for _ in 0..200 {
            item.place_random(&mut rng, grid, Some(&snake), Some(&obstacles));
            assert!(!snake.contains(&item.position), "{item:?} on snake");
            assert!(!obstacles.contains(item.position), "{item:?} on obstacle");
        }
    }

    #[test]
    fn place_with_only_snake() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(2, 2);
        let snake = VecDeque::from([
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(1, 1),
        ]);
        let mut item = Item::new(&mut rng, grid);
        item.place_random(&mut rng, grid, Some(&snake), None);
        assert_eq!(item.position, Position::new(0, 1));
    }

    #[test]
    fn place_with_only_obstacles() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(2, 1);
        let obstacles = Obstacles::from_iter([Position::new(0, 0)]);
        let mut item = Item::new(&mut rng, grid);
        item.place_random(&mut rng, grid, None, Some(&obstacles));
        assert_eq!(item.position, Position::new(1, 0));
    }

    #[test]
    fn place_unconstrained_stays_in_grid() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(5, 4);
        let mut item = Item::new(&mut rng, grid);
        for _ in 0..100 {
            item.place_random(&mut rng, grid, None, None);
            assert!(item.position.x < 5 && item.position.y < 4, "{item:?}");
        }
    }

    #[test]
    fn place_on_full_grid_keeps_position() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(2, 1);
        let snake = VecDeque::from([Position::new(0, 0)]);
        let obstacles = Obstacles::from_iter([Position::new(1, 0)]);
        let mut item = Item {
            position: Position::new(1, 0),
            color: consts::RED,
        };
        item.place_random(&mut rng, grid, Some(&snake), Some(&obstacles));
        assert_eq!(item.position, Position::new(1, 0));
    }

    #[test]
    fn recolor_uses_palette() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut item = Item::new(&mut rng, Grid::default());
        for _ in 0..20 {
            item.recolor(&mut rng);
            assert!(consts::PALETTE.contains(&item.color), "{item:?}");
        }
    }
}
