use std::collections::HashSet;

use super::session::Frame;
use super::types::{Cell, Direction};

/// Greedy food seeker used in place of a human at the controls.
pub struct Autopilot;

impl Autopilot {
    /// Picks the safe, non-reversing direction closest to the food. Falls
    /// back to any safe direction, then to the current heading.
    pub fn choose(frame: &Frame) -> Option<Direction> {
        let head = frame.head()?;
        let occupied: HashSet<Cell> = frame.snake.iter().copied().collect();

        let safe: Vec<(Direction, Cell)> = Self::candidate_directions(frame.direction)
            .filter_map(|direction| {
                let next = head.offset(direction);
                let is_safe = frame.bounds.contains(next) && !occupied.contains(&next);
                is_safe.then_some((direction, next))
            })
            .collect();

        let towards_food = frame.food.and_then(|food| {
            safe.iter()
                .min_by_key(|(_, next)| next.manhattan_distance(food))
                .map(|(direction, _)| *direction)
        });

        towards_food
            .or_else(|| safe.first().map(|(direction, _)| *direction))
            .or(Some(frame.direction))
    }

    /// Current heading first, so ties keep the snake going straight.
    fn candidate_directions(current: Direction) -> impl Iterator<Item = Direction> {
        std::iter::once(current).chain(
            Direction::ALL
                .into_iter()
                .filter(move |d| *d != current && !d.is_opposite(&current)),
        )
    }
}
