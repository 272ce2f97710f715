use std::sync::Arc;

use common::games::serpent::{
    Autopilot, Frame, GameOverSummary, GameStatus, SessionCommand, SessionObserver,
};
use common::log;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use tokio::sync::{Mutex, mpsc};

struct ObserverState {
    event_log: AllocRingBuffer<String>,
    summaries: Vec<GameOverSummary>,
    last_status: Option<GameStatus>,
    last_level: u32,
}

/// Stands in for both the player and the screen: steers with the autopilot,
/// keeps a short log of notable events and restarts until enough games ran.
#[derive(Clone)]
pub struct ConsoleObserver {
    commands: mpsc::UnboundedSender<SessionCommand>,
    games_to_play: u32,
    max_ticks_per_game: u64,
    state: Arc<Mutex<ObserverState>>,
}

impl ConsoleObserver {
    pub fn new(
        commands: mpsc::UnboundedSender<SessionCommand>,
        games_to_play: u32,
        max_ticks_per_game: u64,
        event_log_size: usize,
    ) -> Self {
        Self {
            commands,
            games_to_play,
            max_ticks_per_game,
            state: Arc::new(Mutex::new(ObserverState {
                event_log: AllocRingBuffer::new(event_log_size.max(1)),
                summaries: Vec::new(),
                last_status: None,
                last_level: 1,
            })),
        }
    }

    fn send(&self, command: SessionCommand) {
        if self.commands.send(command).is_err() {
            log!("session already closed, dropping {:?}", command);
        }
    }

    pub async fn summaries(&self) -> Vec<GameOverSummary> {
        self.state.lock().await.summaries.clone()
    }

    pub async fn recent_events(&self) -> Vec<String> {
        self.state.lock().await.event_log.iter().cloned().collect()
    }
}

impl SessionObserver for ConsoleObserver {
    async fn publish_frame(&self, frame: Frame) {
        let mut state = self.state.lock().await;

        if state.last_status != Some(frame.status) {
            state.last_status = Some(frame.status);
            state.last_level = frame.level;
            state
                .event_log
                .enqueue(format!("game #{} {:?} at tick {}", frame.game_number, frame.status, frame.tick));
        }

        if frame.level > state.last_level {
            state.last_level = frame.level;
            state.event_log.enqueue(format!(
                "game #{} level {} at tick {} ({}ms per tick)",
                frame.game_number,
                frame.level,
                frame.tick,
                frame.tick_interval.as_millis()
            ));
        }
        drop(state);

        if frame.status != GameStatus::Playing {
            return;
        }

        if frame.tick >= self.max_ticks_per_game {
            log!("game #{} abandoned after {} ticks", frame.game_number, frame.tick);
            self.send(SessionCommand::Quit);
            return;
        }

        if let Some(direction) = Autopilot::choose(&frame)
            && direction != frame.direction
        {
            self.send(SessionCommand::Turn(direction));
        }
    }

    async fn game_over(&self, summary: GameOverSummary) {
        let mut state = self.state.lock().await;
        let game_number = state.summaries.len() + 1;
        state.event_log.enqueue(format!(
            "game #{} over: {} with {} points{}",
            game_number,
            summary.reason,
            summary.final_score,
            if summary.is_new_high_score { ", new high score" } else { "" }
        ));
        state.summaries.push(summary);
        let played = state.summaries.len() as u32;
        drop(state);

        if played < self.games_to_play {
            self.send(SessionCommand::Start);
        } else {
            self.send(SessionCommand::Quit);
        }
    }
}
