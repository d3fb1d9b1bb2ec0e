use super::direction::Direction;
use super::grid::Grid;
use super::obstacles::Obstacles;
use crate::consts;
use crate::util::EnumExt;
use rand::Rng;
use ratatui::{layout::Position, style::Color};
use std::collections::VecDeque;
use std::fmt;

/// The player's snake
///
/// All positions are grid cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, head first
    pub(super) cells: VecDeque<Position>,

    /// The value of `cells` before the most recent move, used for drawing the
    /// snake partway between two ticks
    pub(super) previous: VecDeque<Position>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,

    pub(super) score: u32,

    pub(super) head_color: Color,

    pub(super) body_color: Color,
}

impl Snake {
    /// Create a new snake with its head at `head`, facing in `direction`, and
    /// with its body trailing behind it.  The snake will be
    /// [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] cells long
    /// unless the edge of `grid` gets in the way.
    pub(crate) fn new(head: Position, direction: Direction, grid: Grid) -> Snake {
        let backwards = direction.reverse();
        let cells = std::iter::successors(Some(head), |&p| backwards.advance(p, grid))
            .take(consts::INITIAL_SNAKE_LENGTH)
            .collect::<VecDeque<_>>();
        Snake {
            previous: cells.clone(),
            cells,
            direction,
            score: 0,
            head_color: consts::DEFAULT_HEAD_COLOR,
            body_color: consts::DEFAULT_BODY_COLOR,
        }
    }

    /// Put the snake back in the center of `grid`, facing in a random
    /// direction, with its score and colors reset
    pub(crate) fn reset<R: Rng>(&mut self, rng: &mut R, grid: Grid) {
        *self = Snake::new(grid.center(), Direction::random(rng), grid);
    }

    pub(crate) fn head(&self) -> Position {
        self.cells[0]
    }

    pub(crate) fn cells(&self) -> &VecDeque<Position> {
        &self.cells
    }

    pub(crate) fn previous(&self) -> &VecDeque<Position> {
        &self.previous
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn head_color(&self) -> Color {
        self.head_color
    }

    pub(crate) fn body_color(&self) -> Color {
        self.body_color
    }

    pub(crate) fn set_colors(&mut self, head: Color, body: Color) {
        self.head_color = head;
        self.body_color = body;
    }

    /// Change the snake's direction to `direction`, unless that would make it
    /// turn back on itself.  The new direction takes effect on the next call
    /// to [`Snake::advance()`].
    pub(crate) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.direction = direction;
        }
    }

    /// Move the snake forwards one cell in the current direction.
    ///
    /// If the new head lands on `item`, the snake grows by one cell and
    /// scores a point.  On collision the snake is left where it was.
    pub(crate) fn advance(
        &mut self,
        grid: Grid,
        item: Option<Position>,
        obstacles: &Obstacles,
    ) -> Advance {
        self.previous.clone_from(&self.cells);
        let Some(new_head) = self.direction.advance(self.head(), grid) else {
            return Advance::Collided(Collision::Wall);
        };
        if self.cells.iter().skip(1).any(|&p| p == new_head) {
            return Advance::Collided(Collision::Body);
        }
        if obstacles.contains(new_head) {
            return Advance::Collided(Collision::Obstacle);
        }
        self.cells.push_front(new_head);
        if item == Some(new_head) {
            self.score += 1;
            Advance::Grew
        } else {
            let _ = self.cells.pop_back();
            Advance::Moved
        }
    }
}

/// The result of [`Snake::advance()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Advance {
    Moved,
    /// The snake ate the item
    Grew,
    Collided(Collision),
}

/// What the snake ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    Wall,
    Body,
    Obstacle,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Collision::Wall => "You hit the wall",
            Collision::Body => "You bit yourself",
            Collision::Obstacle => "You hit a rock",
        };
        f.pad(s)
    }
}
