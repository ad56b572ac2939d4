//! Local rules-engine boundary.
//!
//! Wraps `shakmaty` behind the small surface the reconciler needs: apply a
//! square pair, count legal moves, report the side to move, serialize to
//! board notation. Positions are snapshots; applying a move yields a new
//! one and never mutates the original.

use super::types::{GameStatus, Piece, PieceKind, Side, SquarePair};
use derive_more::{Display, Error};
use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Position as _, Rank, Role, Square};

/// The local rules engine refused a move or a serialized position.
#[derive(Debug, Clone, Display, Error)]
#[display("local rules engine: {message}")]
pub struct RulesError {
    /// What the engine objected to.
    pub message: String,
}

impl RulesError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An immutable snapshot of the board, sufficient to resume play.
#[derive(Debug, Clone, Default)]
pub struct Position {
    inner: Chess,
}

impl Position {
    /// The standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a position from its board-notation (FEN) string.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let parsed: Fen = fen
            .parse()
            .map_err(|e| RulesError::new(format!("invalid notation {fen:?}: {e}")))?;
        let inner = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| RulesError::new(format!("unplayable position {fen:?}: {e}")))?;
        Ok(Self { inner })
    }

    /// Applies a square pair, returning the successor position.
    ///
    /// A pawn dropped on the back rank is resolved as a queen promotion,
    /// so the 4-character wire form can express every drag the board
    /// surface produces.
    pub fn apply(&self, mv: SquarePair) -> Result<Self, RulesError> {
        let uci = UciMove::Normal {
            from: mv.origin(),
            to: mv.destination(),
            promotion: self.promotion_for(mv),
        };
        let resolved = uci
            .to_move(&self.inner)
            .map_err(|e| RulesError::new(format!("illegal move {mv}: {e}")))?;
        let inner = self
            .inner
            .clone()
            .play(&resolved)
            .map_err(|e| RulesError::new(format!("illegal move {mv}: {e}")))?;
        Ok(Self { inner })
    }

    fn promotion_for(&self, mv: SquarePair) -> Option<Role> {
        let is_pawn = self.inner.board().role_at(mv.origin()) == Some(Role::Pawn);
        let back_rank = match self.inner.turn() {
            Color::White => Rank::Eighth,
            Color::Black => Rank::First,
        };
        (is_pawn && mv.destination().rank() == back_rank).then_some(Role::Queen)
    }

    /// Whose turn it is in this position.
    pub fn side_to_move(&self) -> Side {
        match self.inner.turn() {
            Color::White => Side::User,
            Color::Black => Side::Bot,
        }
    }

    /// Number of legal moves available to the side to move.
    pub fn legal_move_count(&self) -> usize {
        self.inner.legal_moves().len()
    }

    /// Derives the game status from this position.
    ///
    /// Zero legal moves means the side that just moved wins; checkmate and
    /// stalemate are not distinguished.
    pub fn terminal_status(&self) -> GameStatus {
        if self.legal_move_count() > 0 {
            return GameStatus::InProgress;
        }
        match self.side_to_move() {
            Side::User => GameStatus::BotWon,
            Side::Bot => GameStatus::UserWon,
        }
    }

    /// Serializes the position to its board-notation (FEN) string.
    pub fn to_fen(&self) -> String {
        Fen::from_position(self.inner.clone(), EnPassantMode::Legal).to_string()
    }

    /// Looks up the piece standing on a square, for rendering.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.inner.board().piece_at(square).map(|piece| Piece {
            side: match piece.color {
                Color::White => Side::User,
                Color::Black => Side::Bot,
            },
            kind: match piece.role {
                Role::Pawn => PieceKind::Pawn,
                Role::Knight => PieceKind::Knight,
                Role::Bishop => PieceKind::Bishop,
                Role::Rook => PieceKind::Rook,
                Role::Queen => PieceKind::Queen,
                Role::King => PieceKind::King,
            },
        })
    }
}
