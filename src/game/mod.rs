//! Client-side game state: move domain, rules boundary, session aggregate.

mod position;
mod session;
mod types;

pub use position::{Position, RulesError};
pub use session::Session;
pub use types::{GameStatus, Piece, PieceKind, Side, SquarePair, SquarePairError};
