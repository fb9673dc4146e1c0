use std::collections::VecDeque;

use crate::config::Bounds;
use crate::input::Direction;

/// Board position in distance units; coordinates are multiples of the cell size.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when a `cell_size` square at this position fits inside `bounds`.
    #[must_use]
    pub fn is_within_bounds(self, bounds: Bounds, cell_size: i32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x <= bounds.width - cell_size
            && self.y <= bounds.height - cell_size
    }

    /// Returns true when both coordinates are multiples of `cell_size`.
    #[must_use]
    pub fn is_on_grid(self, cell_size: i32) -> bool {
        self.x % cell_size == 0 && self.y % cell_size == 0
    }

    /// Returns the neighbouring position one cell away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }

    /// Per-axis proximity test: closer than `cell_size` on both axes.
    ///
    /// Looser than equality when either position is off the grid.
    #[must_use]
    pub fn is_within_cell_of(self, other: Self, cell_size: i32) -> bool {
        (self.x - other.x).abs() < cell_size && (self.y - other.y).abs() < cell_size
    }
}

/// Segment chain, head at the front.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty list; a snake always has a head.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
        })
    }

    /// Prepends a new head segment.
    pub fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Drops the tail segment, never shrinking below one segment.
    pub fn pop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        // from_segments and pop_tail both keep at least one segment.
        self.body[0]
    }

    /// Returns true if the head exactly matches any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Bounds;
    use crate::input::Direction;

    use super::{Position, Snake};

    const BOUNDS: Bounds = Bounds {
        width: 600,
        height: 400,
    };

    fn chain(segments: Vec<Position>) -> Snake {
        Snake::from_segments(segments).expect("snake needs a head")
    }

    #[test]
    fn step_moves_one_cell_in_each_direction() {
        let origin = Position { x: 100, y: 50 };

        assert_eq!(origin.step(Direction::Up, 10), Position { x: 100, y: 40 });
        assert_eq!(origin.step(Direction::Down, 10), Position { x: 100, y: 60 });
        assert_eq!(origin.step(Direction::Left, 10), Position { x: 90, y: 50 });
        assert_eq!(origin.step(Direction::Right, 10), Position { x: 110, y: 50 });
    }

    #[test]
    fn bounds_check_covers_last_cell_but_not_beyond() {
        assert!(Position { x: 0, y: 0 }.is_within_bounds(BOUNDS, 10));
        assert!(Position { x: 590, y: 390 }.is_within_bounds(BOUNDS, 10));
        assert!(!Position { x: -10, y: 0 }.is_within_bounds(BOUNDS, 10));
        assert!(!Position { x: 600, y: 0 }.is_within_bounds(BOUNDS, 10));
        assert!(!Position { x: 0, y: -10 }.is_within_bounds(BOUNDS, 10));
        assert!(!Position { x: 0, y: 400 }.is_within_bounds(BOUNDS, 10));
    }

    #[test]
    fn proximity_window_is_open_on_both_axes() {
        let food = Position { x: 100, y: 100 };

        assert!(Position { x: 100, y: 100 }.is_within_cell_of(food, 10));
        assert!(Position { x: 91, y: 109 }.is_within_cell_of(food, 10));
        assert!(!Position { x: 90, y: 100 }.is_within_cell_of(food, 10));
        assert!(!Position { x: 100, y: 110 }.is_within_cell_of(food, 10));
    }

    #[test]
    fn empty_segment_list_is_rejected() {
        assert!(Snake::from_segments(Vec::new()).is_none());
    }

    #[test]
    fn pop_tail_keeps_at_least_the_head() {
        let mut snake = chain(vec![Position { x: 10, y: 10 }]);

        snake.pop_tail();

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position { x: 10, y: 10 });
    }

    #[test]
    fn head_overlap_ignores_the_head_itself() {
        let snake = chain(vec![
            Position { x: 20, y: 10 },
            Position { x: 10, y: 10 },
        ]);
        assert!(!snake.head_overlaps_body());

        let looped = chain(vec![
            Position { x: 10, y: 10 },
            Position { x: 20, y: 10 },
            Position { x: 10, y: 10 },
        ]);
        assert!(looped.head_overlaps_body());
    }
}
