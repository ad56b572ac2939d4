//! The session aggregate: position, ply histories, derived status.

use super::position::{Position, RulesError};
use super::types::{GameStatus, SquarePair};

/// The client-visible game state.
///
/// A session is only ever replaced wholesale: [`Session::advanced`] builds
/// the complete successor or fails without touching anything, so readers
/// never observe a half-applied move.
#[derive(Debug, Clone, Default)]
pub struct Session {
    position: Position,
    user_moves: Vec<SquarePair>,
    bot_moves: Vec<Option<SquarePair>>,
    status: GameStatus,
}

impl Session {
    /// A fresh session at the starting position.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Every move the human has played this game, in order.
    pub fn user_moves(&self) -> &[SquarePair] {
        &self.user_moves
    }

    /// Every bot reply, in order; `None` marks a turn the bot sat out.
    pub fn bot_moves(&self) -> &[Option<SquarePair>] {
        &self.bot_moves
    }

    /// The derived game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Builds the successor session for one full turn.
    ///
    /// Applies the human move, then the bot reply if present, recomputes
    /// the status from the resulting position and appends to both
    /// histories. Any rules rejection leaves `self` untouched.
    pub fn advanced(
        &self,
        user_move: SquarePair,
        bot_move: Option<SquarePair>,
    ) -> Result<Self, RulesError> {
        let after_user = self.position.apply(user_move)?;
        let position = match bot_move {
            Some(reply) => after_user.apply(reply)?,
            None => after_user,
        };
        let status = position.terminal_status();

        let mut user_moves = self.user_moves.clone();
        let mut bot_moves = self.bot_moves.clone();
        user_moves.push(user_move);
        bot_moves.push(bot_move);

        Ok(Self {
            position,
            user_moves,
            bot_moves,
            status,
        })
    }
}
