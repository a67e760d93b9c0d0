use serde::{Deserialize, Serialize};

use super::board::Cell;

/// The marker a participant drops into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Yellow,
    Red,
}

impl Piece {
    /// Get the other piece
    pub fn other(self) -> Piece {
        match self {
            Piece::Yellow => Piece::Red,
            Piece::Red => Piece::Yellow,
        }
    }

    /// Convert piece to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::Yellow => Cell::Yellow,
            Piece::Red => Cell::Red,
        }
    }

    /// Get piece name for display
    pub fn name(self) -> &'static str {
        match self {
            Piece::Yellow => "Yellow",
            Piece::Red => "Red",
        }
    }
}

/// Who supplies a participant's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantKind {
    /// Moves come from the player at the keyboard.
    Human,
    /// Moves come from a [`MoveSelector`](crate::ai::MoveSelector).
    Computer,
}

/// A named seat at the table. Fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub piece: Piece,
    pub kind: ParticipantKind,
}

impl Participant {
    pub fn new(name: impl Into<String>, piece: Piece, kind: ParticipantKind) -> Self {
        Participant {
            name: name.into(),
            piece,
            kind,
        }
    }

    pub fn human(name: impl Into<String>, piece: Piece) -> Self {
        Self::new(name, piece, ParticipantKind::Human)
    }

    pub fn computer(name: impl Into<String>, piece: Piece) -> Self {
        Self::new(name, piece, ParticipantKind::Computer)
    }

    pub fn is_computer(&self) -> bool {
        self.kind == ParticipantKind::Computer
    }
}
