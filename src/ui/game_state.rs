//! Game state management for the Mancala GUI

use crate::config::AppConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::game::Game;
use crate::Pit;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// GUI-side game state: the controller plus the background search
pub struct GameState {
    pub game: Game,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    move_delay: Duration,
}

impl GameState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            game: Game::new(config),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            move_delay: Duration::from_millis(config.ai.move_delay_ms),
        }
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.message = None;
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to sow from the given pit for the human
    pub fn try_sow(&mut self, pit: Pit) -> Result<(), String> {
        if self.is_ai_thinking() {
            return Err("Computer is thinking".to_string());
        }
        self.game.play_human(pit).map_err(|e| e.to_string())?;
        self.message = None;
        self.move_timer.start();
        Ok(())
    }

    /// Start the computer's search on a worker thread.
    ///
    /// The result is sent no earlier than the configured move delay so the
    /// human can follow the board.
    pub fn start_ai_thinking(&mut self) {
        if !self.game.is_computer_turn() || self.is_ai_thinking() {
            return;
        }

        let board = *self.game.board();
        let side = self.game.computer_side();
        let depth = self.game.depth();
        let delay = self.move_delay;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let start = Instant::now();
            let mut engine = AIEngine::with_depth(depth);
            let result = engine.get_move_with_stats(&board, side);
            if let Some(rest) = delay.checked_sub(start.elapsed()) {
                thread::sleep(rest);
            }
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking and apply its move
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    tracing::error!("search thread exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result);
            self.move_timer.set_ai_time(elapsed);

            let side = self.game.computer_side();
            match move_result.best_move {
                Some(pit) => {
                    if let Err(err) = self.game.play(side, pit) {
                        tracing::error!(error = %err, "computer move rejected");
                        self.message = Some(err.to_string());
                    }
                    self.move_timer.start();
                }
                None => self.message = Some("Computer could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo back to the human's last turn
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        if self.game.undo() > 0 {
            self.message = None;
            self.move_timer.start();
        }
    }
}
