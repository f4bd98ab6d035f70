//! Turn sequencing for a human versus computer match
//!
//! [`Game`] owns the canonical board. It validates the human's pit choice,
//! runs the search for the computer, checks for the end of the game after
//! every move and keeps the move history for undo.

use crate::board::{Board, Pit, Position, Side};
use crate::config::{AppConfig, FirstPlayer};
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::rules::{self, check_move, is_terminal, legal_moves};

/// Who controls a side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human,
    Computer,
}

/// Final verdict, named by player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Computer,
    Human,
    Tie,
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Winner,
    /// Winning store, or the shared store count on a tie
    pub score: u8,
}

impl GameOutcome {
    /// End-of-game announcement
    pub fn announcement(&self) -> String {
        match self.winner {
            Winner::Computer => format!("Game Over! Computer wins with {} seeds!", self.score),
            Winner::Human => format!("Game Over! Human wins with {} seeds!", self.score),
            Winner::Tie => "Game Over! It's a tie!".to_string(),
        }
    }
}

/// One applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub pit: Pit,
    pub landing: Position,
}

/// Human versus computer game controller
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    human_side: Side,
    first_side: Side,
    current: Side,
    outcome: Option<GameOutcome>,
    history: Vec<MoveRecord>,
    depth: u8,
}

impl Game {
    /// Start a new game from configuration
    pub fn new(config: &AppConfig) -> Self {
        let human_side = config.game.human_side;
        let first_side = match config.game.first_player {
            FirstPlayer::Human => human_side,
            FirstPlayer::Computer => human_side.opponent(),
        };

        tracing::info!(
            human = %human_side,
            first = %first_side,
            depth = config.ai.depth,
            "new game"
        );

        Self {
            board: Board::new(),
            human_side,
            first_side,
            current: first_side,
            outcome: None,
            history: Vec::new(),
            depth: config.ai.depth,
        }
    }

    /// Restart with the same sides and depth
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current = self.first_side;
        self.outcome = None;
        self.history.clear();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_side(&self) -> Side {
        self.current
    }

    #[inline]
    pub fn human_side(&self) -> Side {
        self.human_side
    }

    #[inline]
    pub fn computer_side(&self) -> Side {
        self.human_side.opponent()
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Who controls `side`
    #[inline]
    pub fn player(&self, side: Side) -> Player {
        if side == self.human_side {
            Player::Human
        } else {
            Player::Computer
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.current == self.human_side
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.current != self.human_side
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Landing position of the last move
    pub fn last_landing(&self) -> Option<Position> {
        self.history.last().map(|m| m.landing)
    }

    /// Moves available to the side to play (empty once the game is over)
    pub fn legal_moves(&self) -> Vec<Pit> {
        if self.is_over() {
            return Vec::new();
        }
        legal_moves(&self.board, self.current)
    }

    /// Apply the human's chosen pit.
    pub fn play_human(&mut self, pit: Pit) -> Result<Position, GameError> {
        self.play(self.human_side, pit)
    }

    /// Search for the computer's move and apply it.
    pub fn play_computer(&mut self) -> Result<MoveResult, GameError> {
        let side = self.computer_side();
        self.ensure_turn(side)?;

        let result = AIEngine::with_depth(self.depth).get_move_with_stats(&self.board, side);
        let pit = result.best_move.ok_or(GameError::GameOver)?;
        self.play(side, pit)?;
        Ok(result)
    }

    /// Apply a move for `side`, validating turn order and the pit.
    pub fn play(&mut self, side: Side, pit: Pit) -> Result<Position, GameError> {
        self.ensure_turn(side)?;
        if let Err(err) = check_move(&self.board, side, pit) {
            tracing::warn!(side = %side, pit = %pit, error = %err, "rejected move");
            return Err(err.into());
        }
        Ok(self.advance(side, pit))
    }

    /// Take back moves until the human is to play again.
    ///
    /// Removes the human's last move and every computer move after it.
    /// Returns how many moves were removed; 0 if the human has not moved yet.
    pub fn undo(&mut self) -> usize {
        let Some(last_human) = self
            .history
            .iter()
            .rposition(|record| self.player(record.side) == Player::Human)
        else {
            return 0;
        };
        let removed = self.history.len() - last_human;

        self.history.truncate(last_human);
        let moves = std::mem::take(&mut self.history);
        self.board = Board::new();
        self.current = self.first_side;
        self.outcome = None;
        for record in moves {
            self.advance(record.side, record.pit);
        }

        tracing::info!(removed, "undo");
        removed
    }

    fn ensure_turn(&self, side: Side) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if side != self.current {
            return Err(GameError::NotYourTurn { side });
        }
        Ok(())
    }

    /// Sow an already validated move, then check for the end of the game
    fn advance(&mut self, side: Side, pit: Pit) -> Position {
        let landing = rules::sowing::play(&mut self.board, side, pit);
        self.history.push(MoveRecord { side, pit, landing });

        tracing::info!(
            player = ?self.player(side),
            pit = %pit,
            landing = %landing,
            south_store = self.board.store(Side::South),
            north_store = self.board.store(Side::North),
            "move"
        );

        if is_terminal(&mut self.board) {
            let outcome = self.outcome_from_board();
            tracing::info!(winner = ?outcome.winner, score = outcome.score, "game over");
            self.outcome = Some(outcome);
        } else {
            self.current = side.opponent();
        }
        landing
    }

    fn outcome_from_board(&self) -> GameOutcome {
        let result = rules::winner(&self.board);
        let winner = match result.winner {
            None => Winner::Tie,
            Some(side) if side == self.human_side => Winner::Human,
            Some(_) => Winner::Computer,
        };
        GameOutcome {
            winner,
            score: result.score,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
