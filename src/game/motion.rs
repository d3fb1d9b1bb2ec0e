//! Smooth drawing of the snake between ticks
use ratatui::layout::Position;
use std::collections::VecDeque;
use std::time::Duration;

/// A location on the grid in fractional cell units
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Point {
    pub(crate) fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Linearly interpolate from `self` (at `t == 0`) to `end` (at `t == 1`)
    pub(crate) fn lerp(self, end: Point, t: f64) -> Point {
        Point {
            x: (end.x - self.x).mul_add(t, self.x),
            y: (end.y - self.y).mul_add(t, self.y),
        }
    }
}

impl From<Position> for Point {
    fn from(pos: Position) -> Point {
        Point {
            x: f64::from(pos.x),
            y: f64::from(pos.y),
        }
    }
}

/// Return how far through the current tick we are, as a fraction in
/// `[0, 1]`, given the time since the tick began and the number of ticks per
/// second
pub(crate) fn progress(since_tick: Duration, speed: f64) -> f64 {
    let p = since_tick.as_secs_f64() * speed;
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Compute where to draw each of the snake's cells, `progress` of the way
/// from their positions before the last tick to their current positions.
/// Cells that didn't exist before the last tick are drawn where they are.
pub(crate) fn interpolate(
    previous: &VecDeque<Position>,
    current: &VecDeque<Position>,
    progress: f64,
) -> Vec<Point> {
    current
        .iter()
        .enumerate()
        .map(|(i, &pos)| {
            let end = Point::from(pos);
            match previous.get(i) {
                Some(&before) => Point::from(before).lerp(end, progress),
                None => end,
            }
        })
        .collect()
}
