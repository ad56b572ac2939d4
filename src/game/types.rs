//! Core domain types for the chess client.

use derive_more::{Display, Error};
use shakmaty::Square;
use std::fmt;
use std::str::FromStr;

/// Side of the game, from the client's point of view.
///
/// The human always plays White against the remote bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player (White).
    User,
    /// The remote bot (Black).
    Bot,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::User => Side::Bot,
            Side::Bot => Side::User,
        }
    }
}

/// Piece kinds, for board rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Pawn.
    Pawn,
    /// Knight.
    Knight,
    /// Bishop.
    Bishop,
    /// Rook.
    Rook,
    /// Queen.
    Queen,
    /// King.
    King,
}

/// A piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    /// Which side owns the piece.
    pub side: Side,
    /// What kind of piece it is.
    pub kind: PieceKind,
}

/// Current status of the game, derived from the position after every
/// accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// The human has no opponent replies left.
    UserWon,
    /// The bot left the human without a legal move.
    BotWon,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Errors constructing or parsing a [`SquarePair`].
#[derive(Debug, Clone, Display, Error)]
pub enum SquarePairError {
    /// The wire string was not 4 or 5 characters long.
    #[display("move string must be 4 or 5 characters, got {len}")]
    Length {
        /// Observed length.
        len: usize,
    },
    /// One of the coordinates was outside a1..h8.
    #[display("invalid square coordinates in {text:?}")]
    Coordinates {
        /// The offending wire string.
        text: String,
    },
    /// Origin and destination are the same square.
    #[display("origin and destination are both {square}")]
    Identical {
        /// The repeated square.
        square: String,
    },
}

/// An ordered (origin, destination) pair of board squares.
///
/// This is the unit the presentation surface emits on a drop and the unit
/// the adjudicator consumes. Its wire form is the 4-character
/// concatenation of both coordinates, e.g. `"e2e4"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquarePair {
    origin: Square,
    destination: Square,
}

impl SquarePair {
    /// Creates a pair, rejecting identical origin and destination.
    pub fn new(origin: Square, destination: Square) -> Result<Self, SquarePairError> {
        if origin == destination {
            return Err(SquarePairError::Identical {
                square: origin.to_string(),
            });
        }
        Ok(Self {
            origin,
            destination,
        })
    }

    /// The square the piece was picked up from.
    pub fn origin(self) -> Square {
        self.origin
    }

    /// The square the piece was dropped on.
    pub fn destination(self) -> Square {
        self.destination
    }
}

impl fmt::Display for SquarePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)
    }
}

impl FromStr for SquarePair {
    type Err = SquarePairError;

    /// Parses the wire form. A trailing promotion letter (`"e7e8q"`) is
    /// tolerated; the promotion itself is re-derived by the rules engine.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 && bytes.len() != 5 {
            return Err(SquarePairError::Length { len: bytes.len() });
        }
        let origin = Square::from_ascii(&bytes[0..2]);
        let destination = Square::from_ascii(&bytes[2..4]);
        match (origin, destination) {
            (Ok(origin), Ok(destination)) => Self::new(origin, destination),
            _ => Err(SquarePairError::Coordinates {
                text: s.to_string(),
            }),
        }
    }
}
