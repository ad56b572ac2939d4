//! Terminal chess client for a remote move-adjudication service.
//!
//! The human drags pieces on a terminal board; every move is submitted to
//! a remote adjudicator that validates it and answers with the bot's
//! countermove. The heart of the crate is the turn-reconciliation state
//! machine that keeps the displayed position, the two ply histories and
//! the status line consistent with one authoritative move sequence.
//!
//! # Architecture
//!
//! - **[`reconciler`]**: pure state machine - admission, settlement,
//!   generation-tagged reset.
//! - **[`orchestrator`]**: async driver wiring player commands, spawned
//!   submissions and published game events.
//! - **[`game`]**: move domain, session aggregate and the boundary to the
//!   local rules engine.
//! - **[`adjudicator`]**: the remote service contract and its HTTP client.
//! - **[`tui`]**: ratatui presentation surface.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod adjudicator;
pub mod cli;
pub mod game;
pub mod orchestrator;
pub mod reconciler;
pub mod tui;

pub use adjudicator::{Adjudicator, AdjudicatorError, HttpAdjudicator};
pub use game::{
    GameStatus, Piece, PieceKind, Position, RulesError, Session, Side, SquarePair, SquarePairError,
};
pub use orchestrator::{GameEvent, Orchestrator, PlayerCommand};
pub use reconciler::{Reconciler, Settlement, SubmitTicket};
