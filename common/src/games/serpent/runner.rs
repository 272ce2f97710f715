use std::future::Future;

use tokio::sync::mpsc;

use crate::log;

use super::scheduler::TickScheduler;
use super::session::{Frame, GameOverSummary, SerpentSession, Transition};
use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Start,
    TogglePause,
    Turn(Direction),
    Quit,
}

/// Receives what the session produces: frames for drawing and the final
/// result of every finished game.
pub trait SessionObserver: Send + Sync + 'static {
    fn publish_frame(&self, frame: Frame) -> impl Future<Output = ()> + Send;

    fn game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}

enum Wakeup {
    Tick,
    Command(Option<SessionCommand>),
}

/// Drives a `SerpentSession` from one task: ticks come from the scheduler,
/// inputs from the command channel, both handled strictly in turn.
pub struct SessionRunner<O: SessionObserver> {
    session: SerpentSession,
    scheduler: TickScheduler,
    observer: O,
}

impl<O: SessionObserver> SessionRunner<O> {
    pub fn new(session: SerpentSession, observer: O) -> Self {
        Self {
            session,
            scheduler: TickScheduler::new(),
            observer,
        }
    }

    /// Runs until `Quit` arrives or every command sender is gone, then
    /// hands the session back.
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<SessionCommand>) -> SerpentSession {
        self.observer.publish_frame(self.session.frame()).await;

        loop {
            let wakeup = tokio::select! {
                _ = self.scheduler.next_tick() => Wakeup::Tick,
                command = commands.recv() => Wakeup::Command(command),
            };

            let transition = match wakeup {
                Wakeup::Tick => self.session.tick(),
                Wakeup::Command(None) | Wakeup::Command(Some(SessionCommand::Quit)) => break,
                Wakeup::Command(Some(SessionCommand::Start)) => self.session.start(),
                Wakeup::Command(Some(SessionCommand::TogglePause)) => self.session.toggle_pause(),
                Wakeup::Command(Some(SessionCommand::Turn(direction))) => {
                    self.session.request_direction(direction);
                    None
                }
            };

            if let Some(transition) = transition {
                self.apply(transition).await;
            }
        }

        self.scheduler.halt();
        log!("session closed after {} game(s)", self.session.games_started());
        self.session
    }

    async fn apply(&mut self, transition: Transition) {
        if let Some(cadence) = transition.cadence {
            match cadence.period() {
                Some(period) => self.scheduler.arm(period),
                None => self.scheduler.halt(),
            }
        }

        self.observer.publish_frame(self.session.frame()).await;

        if let Some(summary) = transition.summary {
            self.observer.game_over(summary).await;
        }
    }
}
