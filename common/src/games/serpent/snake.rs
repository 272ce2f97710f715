use std::collections::{HashSet, VecDeque};

use super::types::{Cell, Direction};

/// Ordered body, head first. `body_set` mirrors `body` for O(1) occupancy.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    body_set: HashSet<Cell>,
}

impl Snake {
    /// Lays out `length` segments in a straight line behind `head`, so that
    /// the snake is already moving towards `heading`.
    pub fn new(head: Cell, heading: Direction, length: usize) -> Self {
        let behind = heading.opposite();
        let mut segment = head;
        let mut cells = Vec::with_capacity(length.max(1));
        for _ in 0..length.max(1) {
            cells.push(segment);
            segment = segment.offset(behind);
        }
        Self::from_cells(cells)
    }

    /// Returns `None` for an empty body or one that covers a cell twice.
    pub fn from_segments(segments: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let cells: Vec<Cell> = segments.into_iter().collect();
        if cells.is_empty() {
            return None;
        }
        let snake = Self::from_cells(cells);
        (snake.body_set.len() == snake.body.len()).then_some(snake)
    }

    fn from_cells(cells: Vec<Cell>) -> Self {
        let body_set = cells.iter().copied().collect();
        Self {
            body: cells.into(),
            body_set,
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Cell {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    /// Candidate head for a move; the body is left untouched.
    pub fn advance(&self, direction: Direction) -> Cell {
        self.head().offset(direction)
    }

    /// Moves the head to `new_head`, dropping the tail unless `grew`.
    /// The caller guarantees `new_head` is not part of the remaining body.
    pub fn commit(&mut self, new_head: Cell, grew: bool) {
        if !grew && let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body_set.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starting_snake() -> Snake {
        Snake::new(Cell::new(10, 10), Direction::Right, 3)
    }

    #[test]
    fn test_new_lays_body_behind_head() {
        let snake = starting_snake();
        let cells: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(cells, vec![Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]);
        assert_eq!(snake.head(), Cell::new(10, 10));
        assert_eq!(snake.tail(), Cell::new(8, 10));
    }

    #[test]
    fn test_advance_does_not_mutate() {
        let snake = starting_snake();
        assert_eq!(snake.advance(Direction::Up), Cell::new(10, 9));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(10, 10));
    }

    #[test]
    fn test_commit_without_growth_keeps_length() {
        let mut snake = starting_snake();
        let next = snake.advance(Direction::Right);
        snake.commit(next, false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(11, 10));
        assert!(!snake.occupies(Cell::new(8, 10)));
        assert!(snake.occupies(Cell::new(11, 10)));
    }

    #[test]
    fn test_commit_with_growth_keeps_tail() {
        let mut snake = starting_snake();
        let next = snake.advance(Direction::Down);
        snake.commit(next, true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(10, 11));
        assert_eq!(snake.tail(), Cell::new(8, 10));
        assert!(snake.occupies(Cell::new(8, 10)));
    }

    #[test]
    fn test_commit_into_vacated_tail_keeps_index_consistent() {
        let mut snake = Snake::from_segments([
            Cell::new(1, 1),
            Cell::new(1, 2),
            Cell::new(2, 2),
            Cell::new(2, 1),
        ])
        .unwrap();
        snake.commit(Cell::new(2, 1), false);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(2, 1));
        assert!(snake.occupies(Cell::new(2, 1)));
    }

    #[test]
    fn test_from_segments_rejects_empty() {
        assert!(Snake::from_segments(Vec::new()).is_none());
    }

    #[test]
    fn test_from_segments_rejects_overlapping_body() {
        assert!(
            Snake::from_segments([Cell::new(3, 3), Cell::new(2, 3), Cell::new(3, 3)]).is_none()
        );
        assert!(Snake::from_segments([Cell::new(3, 3), Cell::new(2, 3)]).is_some());
    }
}
