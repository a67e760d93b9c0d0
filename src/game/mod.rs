//! Core Connect Four game logic: board storage, move rules, the per-game
//! state machine, and the session that ties games to a running score.

mod board;
mod player;
mod rules;
mod score;
mod session;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};
pub use player::{Participant, ParticipantKind, Piece};
pub use rules::{LegalColumns, Rules, DEFAULT_CONNECT_N};
pub use score::ScoreTracker;
pub use session::{Session, TurnTicket};
pub use state::{GameConfig, GameState, GameStatus, MoveReport};
