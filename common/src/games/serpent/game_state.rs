use std::time::Duration;

use crate::games::SessionRng;
use crate::log;

use super::food::FoodPlacer;
use super::grid::GridBounds;
use super::progression::Progression;
use super::settings::{INITIAL_SNAKE_LENGTH, SerpentSettings};
use super::snake::Snake;
use super::types::{Cell, DeathReason, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerpentEvent {
    Moved { head: Cell },
    FoodEaten { at: Cell, score: u32 },
    LevelUp { level: u32, tick_interval: Duration },
    FoodSpawned { at: Cell },
    GameOver { reason: DeathReason, head: Cell },
}

/// Everything one tick did, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub events: Vec<SerpentEvent>,
}

impl TickOutcome {
    pub fn ate_food(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, SerpentEvent::FoodEaten { .. }))
    }

    /// New cadence the driving timer has to be re-armed with.
    pub fn cadence_change(&self) -> Option<Duration> {
        self.events.iter().find_map(|event| match event {
            SerpentEvent::LevelUp { tick_interval, .. } => Some(*tick_interval),
            _ => None,
        })
    }

    pub fn game_end(&self) -> Option<DeathReason> {
        self.events.iter().find_map(|event| match event {
            SerpentEvent::GameOver { reason, .. } => Some(*reason),
            _ => None,
        })
    }
}

#[derive(Clone, Debug)]
pub struct SerpentGameState {
    pub snake: Snake,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub food: Option<Cell>,
    pub score: u32,
    pub level: u32,
    pub tick_interval: Duration,
    pub bounds: GridBounds,
    pub game_end_reason: Option<DeathReason>,
    pub ticks: u64,
    progression: Progression,
}

impl SerpentGameState {
    pub fn new(settings: &SerpentSettings, rng: &mut SessionRng) -> Self {
        let bounds = settings.bounds();
        let snake = Snake::new(bounds.center(), Direction::Right, INITIAL_SNAKE_LENGTH);
        let food = FoodPlacer::spawn(&snake, &bounds, rng);
        Self::from_parts(settings, snake, Direction::Right, food)
    }

    pub fn from_parts(
        settings: &SerpentSettings,
        snake: Snake,
        direction: Direction,
        food: Option<Cell>,
    ) -> Self {
        let progression = settings.progression();
        Self {
            snake,
            direction,
            pending_direction: None,
            food,
            score: 0,
            level: 1,
            tick_interval: progression.tick_interval_for_level(1),
            bounds: settings.bounds(),
            game_end_reason: None,
            ticks: 0,
            progression,
        }
    }

    pub fn is_over(&self) -> bool {
        self.game_end_reason.is_some()
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    /// Buffers a turn for the next tick. Reversals of the current heading
    /// are refused; the latest accepted request wins.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_over() || direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Advances the game by one tick. A finished game does not move.
    pub fn step(&mut self, rng: &mut SessionRng) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.is_over() {
            return outcome;
        }
        self.ticks += 1;

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let next_head = self.snake.advance(self.direction);

        if !self.bounds.contains(next_head) {
            self.finish(DeathReason::WallCollision, next_head, &mut outcome);
            return outcome;
        }

        // The tail still counts here even though it would move away this tick.
        if self.snake.occupies(next_head) {
            self.finish(DeathReason::SelfCollision, next_head, &mut outcome);
            return outcome;
        }

        let ate = self.food == Some(next_head);
        self.snake.commit(next_head, ate);
        outcome.events.push(SerpentEvent::Moved { head: next_head });

        if ate {
            self.eat(next_head, rng, &mut outcome);
        }

        outcome
    }

    fn eat(&mut self, at: Cell, rng: &mut SessionRng, outcome: &mut TickOutcome) {
        self.score = self.score.saturating_add(self.progression.food_reward);
        outcome.events.push(SerpentEvent::FoodEaten {
            at,
            score: self.score,
        });
        log!("ate food at ({}, {}). Score: {}", at.col, at.row, self.score);

        let level = self.progression.level_for_score(self.score);
        if level > self.level {
            self.level = level;
            self.tick_interval = self.progression.tick_interval_for_level(level);
            outcome.events.push(SerpentEvent::LevelUp {
                level,
                tick_interval: self.tick_interval,
            });
        }

        self.food = FoodPlacer::spawn(&self.snake, &self.bounds, rng);
        match self.food {
            Some(food) => outcome.events.push(SerpentEvent::FoodSpawned { at: food }),
            None => self.finish(DeathReason::BoardFilled, at, outcome),
        }
    }

    fn finish(&mut self, reason: DeathReason, head: Cell, outcome: &mut TickOutcome) {
        self.game_end_reason = Some(reason);
        outcome.events.push(SerpentEvent::GameOver { reason, head });
    }
}
