mod autopilot;
mod food;
mod game_state;
mod grid;
mod progression;
mod runner;
mod scheduler;
mod session;
mod settings;
mod snake;
mod types;

pub use autopilot::Autopilot;
pub use food::FoodPlacer;
pub use game_state::{SerpentEvent, SerpentGameState, TickOutcome};
pub use grid::GridBounds;
pub use progression::Progression;
pub use runner::{SessionCommand, SessionObserver, SessionRunner};
pub use scheduler::TickScheduler;
pub use session::{CadenceChange, Frame, GameOverSummary, SerpentSession, Transition};
pub use settings::{INITIAL_SNAKE_LENGTH, SerpentSettings};
pub use snake::Snake;
pub use types::{Cell, DeathReason, Direction, GameStatus};
