use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, MoveError};

use super::{Board, LegalColumns, Participant, Piece, Rules};
use super::board::{DEFAULT_COLS, DEFAULT_ROWS};
use super::rules::DEFAULT_CONNECT_N;

/// Grid size, run length and seating. The first listed participant always
/// moves first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub connect_n: usize,
    pub participants: Vec<Participant>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            connect_n: DEFAULT_CONNECT_N,
            participants: vec![
                Participant::human("You", Piece::Yellow),
                Participant::computer("Computer", Piece::Red),
            ],
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::new(self.rows, self.cols)?;
        Rules::new(self.connect_n, self.rows, self.cols)?;

        let [first, second] = self.participants.as_slice() else {
            return Err(ConfigError::Validation(format!(
                "game.participants must list exactly 2 participants, got {}",
                self.participants.len()
            )));
        };
        if first.name.trim().is_empty() || second.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "participant names must not be empty".into(),
            ));
        }
        if first.name == second.name {
            return Err(ConfigError::Validation(format!(
                "participant names must be distinct (both are '{}')",
                first.name
            )));
        }
        if first.piece == second.piece {
            return Err(ConfigError::Validation(format!(
                "participants must use different pieces (both are {})",
                first.piece.name()
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Piece),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub piece: Piece,
    pub row: usize,
    pub column: usize,
    pub status: GameStatus,
}

/// One game: the board, whose turn it is, and how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    rules: Rules,
    participants: [Participant; 2],
    current: Piece,
    status: GameStatus,
    moves_played: usize,
}

impl GameState {
    /// Create an empty game with the first listed participant to move.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.rows, config.cols)?;
        let rules = Rules::new(config.connect_n, config.rows, config.cols)?;
        let [first, second] = [config.participants[0].clone(), config.participants[1].clone()];

        Ok(GameState {
            board,
            rules,
            current: first.piece,
            participants: [first, second],
            status: GameStatus::InProgress,
            moves_played: 0,
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn participants(&self) -> &[Participant; 2] {
        &self.participants
    }

    /// The participant who opens every game.
    pub fn starting_participant(&self) -> &Participant {
        &self.participants[0]
    }

    /// Look up a participant by the piece they play.
    pub fn participant(&self, piece: Piece) -> &Participant {
        if self.participants[0].piece == piece {
            &self.participants[0]
        } else {
            &self.participants[1]
        }
    }

    /// Whose turn it is. `None` once the game is over.
    pub fn current_participant(&self) -> Option<&Participant> {
        if self.is_terminal() {
            None
        } else {
            Some(self.participant(self.current))
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<&Participant> {
        match self.status {
            GameStatus::Won(piece) => Some(self.participant(piece)),
            _ => None,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Get list of legal columns (not full). Empty once the game is over.
    pub fn legal_columns(&self) -> LegalColumns {
        if self.is_terminal() {
            return LegalColumns::new();
        }
        self.rules.legal_columns(&self.board)
    }

    /// Drop the current participant's piece into `column`. On error the
    /// board is untouched.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self.rules.resolve_move(&self.board, column)?;
        let piece = self.current;
        self.board.place(row, column, piece);
        self.moves_played += 1;

        self.status = if self.rules.check_win(&self.board, row, column, piece) {
            GameStatus::Won(piece)
        } else if self.rules.is_draw(&self.board) {
            GameStatus::Draw
        } else {
            self.current = piece.other();
            GameStatus::InProgress
        };

        Ok(MoveReport {
            piece,
            row,
            column,
            status: self.status,
        })
    }
}
