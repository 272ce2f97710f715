use crate::games::SessionRng;

use super::grid::GridBounds;
use super::snake::Snake;
use super::types::Cell;

const MAX_RANDOM_ATTEMPTS: usize = 100;

pub struct FoodPlacer;

impl FoodPlacer {
    /// Picks a free cell uniformly at random, or `None` when the snake
    /// covers the whole grid.
    ///
    /// Rejection sampling is tried first; once the attempts run out, the
    /// free cells are enumerated and one of them is drawn directly.
    pub fn spawn(snake: &Snake, bounds: &GridBounds, rng: &mut SessionRng) -> Option<Cell> {
        if bounds.cell_count() == 0 || snake.len() >= bounds.cell_count() {
            return None;
        }

        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let cell = Cell::new(
                rng.random_range(0..bounds.cols),
                rng.random_range(0..bounds.rows),
            );
            if !snake.occupies(cell) {
                return Some(cell);
            }
        }

        let free: Vec<Cell> = bounds.cells().filter(|cell| !snake.occupies(*cell)).collect();
        if free.is_empty() {
            return None;
        }
        Some(free[rng.random_range(0..free.len())])
    }
}
