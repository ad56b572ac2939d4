//! Turn-reconciliation state machine.
//!
//! Owns the [`Session`] and keeps it consistent with one authoritative
//! sequence of plies: at most one submission is outstanding at a time, and
//! every outstanding submission carries the generation of the session it
//! was issued against so replies that outlive a reset are discarded.
//!
//! The machine is synchronous and does no I/O; the orchestrator feeds it
//! admissions and verdicts.

use crate::adjudicator::AdjudicatorError;
use crate::game::{Session, SquarePair};
use tracing::{debug, info};

/// Proof that a submission was admitted, tying the eventual verdict back
/// to the session generation it was issued against.
#[derive(Debug, Clone, Copy)]
pub struct SubmitTicket {
    generation: u64,
    mv: SquarePair,
}

impl SubmitTicket {
    /// The move this ticket was issued for.
    pub fn mv(self) -> SquarePair {
        self.mv
    }
}

/// Outcome of settling a submission.
#[derive(Debug, Clone)]
pub enum Settlement {
    /// The turn was applied; carries the new session snapshot.
    Applied(Session),
    /// The adjudicator refused the move; session untouched.
    Rejected(String),
    /// No verdict arrived (transport fault); session untouched.
    Unreachable(String),
    /// The adjudicator accepted a move the local rules engine refuses.
    /// The two rule books have diverged; session untouched but suspect.
    Diverged(String),
    /// The verdict belongs to a session that no longer exists; dropped.
    Stale,
}

/// Mediator between player input, the local rules engine and the remote
/// adjudicator's verdicts.
#[derive(Debug, Default)]
pub struct Reconciler {
    session: Session,
    generation: u64,
    in_flight: Option<u64>,
}

impl Reconciler {
    /// A reconciler holding a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True while a submission is outstanding.
    pub fn is_awaiting_verdict(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Admits a move for submission.
    ///
    /// Returns `None` while another submission is outstanding; the caller
    /// drops the input event (no queueing). No local legality check is
    /// made here: the adjudicator is the authority.
    pub fn begin_submit(&mut self, mv: SquarePair) -> Option<SubmitTicket> {
        if self.in_flight.is_some() {
            debug!(%mv, "Submission already outstanding, move dropped");
            return None;
        }
        self.in_flight = Some(self.generation);
        debug!(%mv, generation = self.generation, "Submission admitted");
        Some(SubmitTicket {
            generation: self.generation,
            mv,
        })
    }

    /// Settles an admitted submission with the adjudicator's verdict.
    ///
    /// Exactly one session replacement happens per applied settlement,
    /// none otherwise. A ticket whose generation no longer matches the
    /// outstanding submission settles [`Settlement::Stale`].
    pub fn settle(
        &mut self,
        ticket: SubmitTicket,
        verdict: Result<Option<SquarePair>, AdjudicatorError>,
    ) -> Settlement {
        if self.in_flight != Some(ticket.generation) {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                "Verdict outlived its session, discarded"
            );
            return Settlement::Stale;
        }
        self.in_flight = None;

        match verdict {
            Err(AdjudicatorError::Rejected { reason }) => {
                info!(mv = %ticket.mv, reason = %reason, "Move rejected by adjudicator");
                Settlement::Rejected(reason)
            }
            Err(AdjudicatorError::Transport { message }) => {
                info!(mv = %ticket.mv, message = %message, "Submission failed in transport");
                Settlement::Unreachable(message)
            }
            Ok(bot_move) => match self.session.advanced(ticket.mv, bot_move) {
                Ok(next) => {
                    info!(
                        mv = %ticket.mv,
                        bot_move = ?bot_move,
                        status = ?next.status(),
                        "Turn applied"
                    );
                    self.session = next.clone();
                    Settlement::Applied(next)
                }
                Err(e) => Settlement::Diverged(e.to_string()),
            },
        }
    }

    /// Reinitializes the session and invalidates any outstanding
    /// submission. The server-side clearing call happens before this.
    pub fn reset(&mut self) -> &Session {
        info!(generation = self.generation, "Resetting session");
        self.generation = self.generation.wrapping_add(1);
        self.in_flight = None;
        self.session = Session::new();
        &self.session
    }
}
