use std::time::Duration;

use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;

use super::game_state::{SerpentEvent, SerpentGameState};
use super::grid::GridBounds;
use super::settings::SerpentSettings;
use super::types::{Cell, DeathReason, Direction, GameStatus};

/// What the tick source has to do after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CadenceChange {
    /// Start ticking (new game or resume).
    Arm(Duration),
    /// Replace the running cadence after a level-up.
    Rearm(Duration),
    Halt,
}

impl CadenceChange {
    pub fn period(&self) -> Option<Duration> {
        match self {
            CadenceChange::Arm(period) | CadenceChange::Rearm(period) => Some(*period),
            CadenceChange::Halt => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub final_score: u32,
    pub level: u32,
    pub reason: DeathReason,
    pub high_score: u32,
    pub is_new_high_score: bool,
    pub ticks: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub status: GameStatus,
    pub cadence: Option<CadenceChange>,
    pub events: Vec<SerpentEvent>,
    pub summary: Option<GameOverSummary>,
}

impl Transition {
    fn status_only(status: GameStatus, cadence: CadenceChange) -> Self {
        Self {
            status,
            cadence: Some(cadence),
            events: Vec::new(),
            summary: None,
        }
    }
}

/// Snapshot handed to whatever draws the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub status: GameStatus,
    pub game_number: u32,
    pub tick: u64,
    pub bounds: GridBounds,
    pub snake: Vec<Cell>,
    pub direction: Direction,
    pub food: Option<Cell>,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    pub tick_interval: Duration,
}

impl Frame {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }
}

/// One player's game: entities, lifecycle status and the best score seen.
pub struct SerpentSession {
    settings: SerpentSettings,
    state: SerpentGameState,
    status: GameStatus,
    high_score: u32,
    games_started: u32,
    rng: SessionRng,
}

impl SerpentSession {
    /// Fails when `settings` do not validate.
    pub fn new(settings: SerpentSettings, mut rng: SessionRng, high_score: u32) -> Result<Self, String> {
        settings.validate()?;
        let state = SerpentGameState::new(&settings, &mut rng);
        Ok(Self {
            settings,
            state,
            status: GameStatus::Idle,
            high_score,
            games_started: 0,
            rng,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn state(&self) -> &SerpentGameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SerpentGameState {
        &mut self.state
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn settings(&self) -> &SerpentSettings {
        &self.settings
    }

    pub fn start(&mut self) -> Option<Transition> {
        if !matches!(self.status, GameStatus::Idle | GameStatus::Over) {
            return None;
        }

        self.state = SerpentGameState::new(&self.settings, &mut self.rng);
        self.status = GameStatus::Playing;
        self.games_started += 1;
        log!(
            "game #{} started on {}x{} (seed {})",
            self.games_started,
            self.state.bounds.cols,
            self.state.bounds.rows,
            self.rng.seed()
        );

        Some(Transition::status_only(
            self.status,
            CadenceChange::Arm(self.state.tick_interval),
        ))
    }

    pub fn toggle_pause(&mut self) -> Option<Transition> {
        let cadence = match self.status {
            GameStatus::Playing => {
                self.status = GameStatus::Paused;
                CadenceChange::Halt
            }
            GameStatus::Paused => {
                self.status = GameStatus::Playing;
                CadenceChange::Arm(self.state.tick_interval)
            }
            GameStatus::Idle | GameStatus::Over => return None,
        };
        Some(Transition::status_only(self.status, cadence))
    }

    /// Turn request from the input side; `false` when it was ignored.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        self.status == GameStatus::Playing && self.state.set_direction(direction)
    }

    pub fn tick(&mut self) -> Option<Transition> {
        if self.status != GameStatus::Playing {
            return None;
        }

        let outcome = self.state.step(&mut self.rng);

        if let Some(reason) = outcome.game_end() {
            self.status = GameStatus::Over;
            let summary = self.close_game(reason);
            return Some(Transition {
                status: self.status,
                cadence: Some(CadenceChange::Halt),
                events: outcome.events,
                summary: Some(summary),
            });
        }

        let cadence = outcome.cadence_change().map(CadenceChange::Rearm);
        if let Some(CadenceChange::Rearm(period)) = cadence {
            log!(
                "level {} reached, tick interval now {}ms",
                self.state.level,
                period.as_millis()
            );
        }

        Some(Transition {
            status: self.status,
            cadence,
            events: outcome.events,
            summary: None,
        })
    }

    fn close_game(&mut self, reason: DeathReason) -> GameOverSummary {
        let final_score = self.state.score;
        let is_new_high_score = final_score > self.high_score;
        if is_new_high_score {
            self.high_score = final_score;
        }
        log!(
            "game #{} over: snake {} with score {} at level {}{}",
            self.games_started,
            reason,
            final_score,
            self.state.level,
            if is_new_high_score { " (new high score)" } else { "" }
        );

        GameOverSummary {
            final_score,
            level: self.state.level,
            reason,
            high_score: self.high_score,
            is_new_high_score,
            ticks: self.state.ticks,
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            status: self.status,
            game_number: self.games_started,
            tick: self.state.ticks,
            bounds: self.state.bounds,
            snake: self.state.snake.segments().copied().collect(),
            direction: self.state.direction,
            food: self.state.food,
            score: self.state.score,
            level: self.state.level,
            high_score: self.high_score,
            tick_interval: self.state.tick_interval,
        }
    }
}
