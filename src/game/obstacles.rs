use super::grid::Grid;
use rand::Rng;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The rocks the snake must avoid.  No two obstacles share a cell.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Obstacles(Vec<Position>);

impl Obstacles {
    /// Scatter `count` obstacles at random across `grid`, avoiding the
    /// snake's cells, the item, and each other.  If the grid runs out of room,
    /// fewer than `count` obstacles are placed.
    pub(crate) fn generate<R: Rng>(
        rng: &mut R,
        grid: Grid,
        count: usize,
        snake: &VecDeque<Position>,
        item: Position,
    ) -> Obstacles {
        let mut cells = Vec::with_capacity(count);
        for _ in 0..count {
            let free = grid.free_cell(rng, |p| {
                p == item || snake.contains(&p) || cells.contains(&p)
            });
            let Some(p) = free else {
                tracing::warn!(
                    placed = cells.len(),
                    wanted = count,
                    "no room left on the grid for obstacles"
                );
                break;
            };
            cells.push(p);
        }
        Obstacles(cells)
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.0.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<Position> for Obstacles {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Obstacles {
        let mut cells = Vec::new();
        for p in iter {
            if !cells.contains(&p) {
                cells.push(p);
            }
        }
        Obstacles(cells)
    }
}

impl<'a> IntoIterator for &'a Obstacles {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
