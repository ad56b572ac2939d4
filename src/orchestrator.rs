//! Drives the reconciler against the remote adjudicator.
//!
//! One task owns the [`Reconciler`]; submissions run as spawned tasks and
//! their verdicts come back through an internal channel, so settlements
//! are serialized and the UI is never blocked on the network.

use crate::adjudicator::{Adjudicator, AdjudicatorError};
use crate::game::{Session, SquarePair};
use crate::reconciler::{Reconciler, Settlement, SubmitTicket};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Commands emitted by the presentation surface.
#[derive(Debug, Clone, Copy)]
pub enum PlayerCommand {
    /// A piece was dropped from origin onto destination.
    Drop(SquarePair),
    /// Start the game over.
    Reset,
}

/// Messages sent from the orchestrator to the UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A new session snapshot was published.
    SessionChanged(Session),
    /// A submission is on its way to the adjudicator.
    AwaitingBot,
    /// The adjudicator rejected the submitted move.
    MoveRejected(String),
    /// The adjudication service could not be reached.
    AdjudicatorUnreachable(String),
    /// The local rules engine refused an adjudicated move; the displayed
    /// position can no longer be trusted.
    RulesDiverged(String),
}

#[derive(Debug)]
struct SubmitVerdict {
    ticket: SubmitTicket,
    outcome: Result<Option<SquarePair>, AdjudicatorError>,
}

/// Owns the reconciler and mediates between player commands, spawned
/// submissions and published game events.
pub struct Orchestrator {
    reconciler: Reconciler,
    adjudicator: Arc<dyn Adjudicator>,
    cmd_rx: mpsc::UnboundedReceiver<PlayerCommand>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    verdict_tx: mpsc::UnboundedSender<SubmitVerdict>,
    verdict_rx: mpsc::UnboundedReceiver<SubmitVerdict>,
}

impl Orchestrator {
    /// Creates an orchestrator wired to the given command and event
    /// channels.
    pub fn new(
        adjudicator: Arc<dyn Adjudicator>,
        cmd_rx: mpsc::UnboundedReceiver<PlayerCommand>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        let (verdict_tx, verdict_rx) = mpsc::unbounded_channel();
        Self {
            reconciler: Reconciler::new(),
            adjudicator,
            cmd_rx,
            event_tx,
            verdict_tx,
            verdict_rx,
        }
    }

    /// Runs the reconciliation loop until the UI hangs up.
    ///
    /// Starts with a reset so the server and the fresh local session agree
    /// before the first move.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> Result<()> {
        info!("Starting turn reconciliation");
        self.start_fresh_game().await?;

        loop {
            tokio::select! {
                cmd = self.cmd_rx.recv() => match cmd {
                    Some(PlayerCommand::Drop(mv)) => self.dispatch_submit(mv)?,
                    Some(PlayerCommand::Reset) => self.start_fresh_game().await?,
                    None => {
                        info!("Command channel closed, stopping");
                        return Ok(());
                    }
                },
                Some(verdict) = self.verdict_rx.recv() => self.apply_verdict(verdict)?,
            }
        }
    }

    /// Admits a drop event and spawns the submission.
    fn dispatch_submit(&mut self, mv: SquarePair) -> Result<()> {
        let Some(ticket) = self.reconciler.begin_submit(mv) else {
            return Ok(());
        };
        self.event_tx.send(GameEvent::AwaitingBot)?;

        let adjudicator = Arc::clone(&self.adjudicator);
        let verdict_tx = self.verdict_tx.clone();
        tokio::spawn(async move {
            let outcome = adjudicator.submit(ticket.mv()).await;
            let _ = verdict_tx.send(SubmitVerdict { ticket, outcome });
        });
        Ok(())
    }

    /// Settles a returned verdict and publishes the outcome.
    fn apply_verdict(&mut self, verdict: SubmitVerdict) -> Result<()> {
        match self.reconciler.settle(verdict.ticket, verdict.outcome) {
            Settlement::Applied(session) => {
                self.event_tx.send(GameEvent::SessionChanged(session))?;
            }
            Settlement::Rejected(reason) => {
                self.event_tx.send(GameEvent::MoveRejected(reason))?;
            }
            Settlement::Unreachable(message) => {
                self.event_tx.send(GameEvent::AdjudicatorUnreachable(message))?;
            }
            Settlement::Diverged(detail) => {
                warn!(detail = %detail, "Local and remote rules disagree");
                self.event_tx.send(GameEvent::RulesDiverged(detail))?;
            }
            Settlement::Stale => {
                debug!("Discarded verdict for a superseded submission");
            }
        }
        Ok(())
    }

    /// Clears server-side state, then reinitializes the local session.
    ///
    /// If the clearing call fails the local session is left untouched so
    /// the two sides cannot silently disagree about the game in play.
    async fn start_fresh_game(&mut self) -> Result<()> {
        if let Err(e) = self.adjudicator.reset().await {
            warn!(error = %e, "Server-side reset failed");
            self.event_tx
                .send(GameEvent::AdjudicatorUnreachable(e.to_string()))?;
            return Ok(());
        }
        let session = self.reconciler.reset().clone();
        self.event_tx.send(GameEvent::SessionChanged(session))?;
        Ok(())
    }
}
