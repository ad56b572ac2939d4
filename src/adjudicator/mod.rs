//! Remote adjudication service boundary.
//!
//! The adjudicator owns server-side game state, enforces legality and
//! selects the bot's reply. The client talks to it through this trait so
//! tests can script verdicts without a network.

mod http;

pub use http::HttpAdjudicator;

use crate::game::SquarePair;
use async_trait::async_trait;
use derive_more::{Display, Error};

/// Errors from a submission or reset call.
#[derive(Debug, Clone, Display, Error)]
pub enum AdjudicatorError {
    /// The adjudicator examined the move and refused it.
    #[display("move rejected: {reason}")]
    Rejected {
        /// The adjudicator's stated reason.
        reason: String,
    },
    /// The request never produced a verdict: connection failure,
    /// unexpected status, or a malformed payload.
    #[display("adjudication service unreachable: {message}")]
    Transport {
        /// What went wrong.
        message: String,
    },
}

impl From<reqwest::Error> for AdjudicatorError {
    fn from(err: reqwest::Error) -> Self {
        AdjudicatorError::Transport {
            message: err.to_string(),
        }
    }
}

/// The remote authority that validates moves and supplies replies.
#[async_trait]
pub trait Adjudicator: Send + Sync {
    /// Submits the human move. `Ok` carries the bot's countermove, or
    /// `None` when the bot has no reply to make.
    async fn submit(&self, mv: SquarePair) -> Result<Option<SquarePair>, AdjudicatorError>;

    /// Clears server-side session state for a fresh game.
    async fn reset(&self) -> Result<(), AdjudicatorError>;
}
