//! HTTP client for the adjudication service.

use super::{Adjudicator, AdjudicatorError};
use crate::game::SquarePair;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Serialize)]
struct MoveRequest {
    #[serde(rename = "move")]
    mv: String,
}

#[derive(Debug, Deserialize)]
struct MoveResponse {
    bot_move: Option<String>,
    error: Option<String>,
}

/// Adjudicator speaking the service's request/response contract:
/// `POST /move` with `{ "move": "e2e4" }` and `POST /reset`.
#[derive(Debug, Clone)]
pub struct HttpAdjudicator {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAdjudicator {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Adjudicator for HttpAdjudicator {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn submit(&self, mv: SquarePair) -> Result<Option<SquarePair>, AdjudicatorError> {
        debug!(%mv, "Submitting move to adjudicator");

        let response = self
            .client
            .post(format!("{}/move", self.base_url))
            .json(&MoveRequest { mv: mv.to_string() })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Adjudicator returned a failure status");
            return Err(AdjudicatorError::Transport {
                message: format!("unexpected status {status}"),
            });
        }

        let body: MoveResponse = response.json().await?;
        if let Some(reason) = body.error {
            warn!(reason = %reason, "Adjudicator rejected the move");
            return Err(AdjudicatorError::Rejected { reason });
        }

        let bot_move = match body.bot_move {
            Some(text) => {
                let parsed = text
                    .parse::<SquarePair>()
                    .map_err(|e| AdjudicatorError::Transport {
                        message: format!("malformed countermove {text:?}: {e}"),
                    })?;
                Some(parsed)
            }
            None => None,
        };

        info!(bot_move = ?bot_move, "Move accepted by adjudicator");
        Ok(bot_move)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn reset(&self) -> Result<(), AdjudicatorError> {
        info!("Clearing server-side game state");

        let response = self
            .client
            .post(format!("{}/reset", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdjudicatorError::Transport {
                message: format!("unexpected status {status}"),
            });
        }
        Ok(())
    }
}
