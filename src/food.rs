use rand::Rng;

use crate::config::Bounds;
use crate::snake::Position;

/// The single food item on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    eaten: bool,
}

impl Food {
    /// Places fresh food at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self {
            position,
            eaten: false,
        }
    }

    /// Spawns food at a uniformly random grid position.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, cell_size: i32) -> Self {
        Self::at(spawn_position(rng, bounds, cell_size))
    }

    /// Flags the food as consumed; it stays in place until respawned.
    pub fn mark_eaten(&mut self) {
        self.eaten = true;
    }

    #[must_use]
    pub fn is_eaten(self) -> bool {
        self.eaten
    }

    /// Moves eaten food to a new random position. No-op for uneaten food.
    pub fn respawn_if_eaten<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: Bounds,
        cell_size: i32,
    ) {
        if self.eaten {
            *self = Self::spawn(rng, bounds, cell_size);
        }
    }
}

/// Draws each axis independently from `1..cells` and snaps it to the grid.
///
/// Occupancy is not checked, so food may land under the snake. Column and
/// row 0 are never chosen.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, cell_size: i32) -> Position {
    Position {
        x: random_cell(rng, bounds.columns(cell_size)) * cell_size,
        y: random_cell(rng, bounds.rows(cell_size)) * cell_size,
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, cells: i32) -> i32 {
    // A single-cell axis has nothing past column 0 to choose from.
    if cells <= 1 {
        return 0;
    }

    rng.gen_range(1..cells)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::Bounds;
    use crate::snake::Position;

    use super::{spawn_position, Food};

    const BOUNDS: Bounds = Bounds {
        width: 600,
        height: 400,
    };

    #[test]
    fn spawned_food_is_on_grid_and_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            let position = spawn_position(&mut rng, BOUNDS, 10);

            assert!(position.is_on_grid(10), "{position:?} is off the grid");
            assert!(position.is_within_bounds(BOUNDS, 10), "{position:?} is out of bounds");
            assert!(position.x >= 10 && position.y >= 10);
        }
    }

    #[test]
    fn respawn_only_moves_eaten_food() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut food = Food::at(Position { x: 20, y: 20 });

        food.respawn_if_eaten(&mut rng, BOUNDS, 10);
        assert_eq!(food.position, Position { x: 20, y: 20 });

        food.mark_eaten();
        assert!(food.is_eaten());

        food.respawn_if_eaten(&mut rng, BOUNDS, 10);
        assert!(!food.is_eaten());
        assert!(food.position.is_within_bounds(BOUNDS, 10));
    }

    #[test]
    fn single_cell_axis_spawns_at_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let narrow = Bounds {
            width: 10,
            height: 400,
        };

        let position = spawn_position(&mut rng, narrow, 10);

        assert_eq!(position.x, 0);
        assert!(position.is_within_bounds(narrow, 10));
    }
}
