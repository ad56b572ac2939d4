//! State-machine tests for the turn reconciler.

use chessbot_tui::adjudicator::AdjudicatorError;
use chessbot_tui::game::{GameStatus, SquarePair};
use chessbot_tui::reconciler::{Reconciler, Settlement};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn pair(s: &str) -> SquarePair {
    s.parse().expect("valid move string")
}

fn rejected(reason: &str) -> AdjudicatorError {
    AdjudicatorError::Rejected {
        reason: reason.to_string(),
    }
}

fn unreachable(message: &str) -> AdjudicatorError {
    AdjudicatorError::Transport {
        message: message.to_string(),
    }
}

#[test]
fn test_submit_and_settle_applies_turn() {
    let mut reconciler = Reconciler::new();
    let ticket = reconciler.begin_submit(pair("e2e4")).expect("admitted");
    assert!(reconciler.is_awaiting_verdict());

    let session = match reconciler.settle(ticket, Ok(Some(pair("e7e5")))) {
        Settlement::Applied(session) => session,
        other => panic!("expected an applied settlement, got {other:?}"),
    };

    assert_eq!(session.user_moves(), &[pair("e2e4")]);
    assert_eq!(session.bot_moves(), &[Some(pair("e7e5"))]);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(!reconciler.is_awaiting_verdict());
    assert_eq!(
        reconciler.session().position().to_fen(),
        session.position().to_fen()
    );
}

#[test]
fn test_second_submit_dropped_while_outstanding() {
    let mut reconciler = Reconciler::new();
    let ticket = reconciler.begin_submit(pair("e2e4")).expect("admitted");

    // A second drop before the verdict arrives is ignored entirely.
    assert!(reconciler.begin_submit(pair("d2d4")).is_none());

    let settlement = reconciler.settle(ticket, Ok(Some(pair("e7e5"))));
    assert!(matches!(settlement, Settlement::Applied(_)));
    assert_eq!(reconciler.session().user_moves().len(), 1);
}

#[test]
fn test_rejection_leaves_session_unchanged() {
    let mut reconciler = Reconciler::new();
    let ticket = reconciler.begin_submit(pair("e2e5")).expect("admitted");

    let settlement = reconciler.settle(ticket, Err(rejected("illegal move")));
    assert!(matches!(settlement, Settlement::Rejected(reason) if reason == "illegal move"));

    assert!(reconciler.session().user_moves().is_empty());
    assert!(reconciler.session().bot_moves().is_empty());
    assert_eq!(reconciler.session().position().to_fen(), START_FEN);

    // The in-flight slot is free again.
    assert!(!reconciler.is_awaiting_verdict());
    assert!(reconciler.begin_submit(pair("e2e4")).is_some());
}

#[test]
fn test_transport_fault_leaves_session_unchanged() {
    let mut reconciler = Reconciler::new();
    let ticket = reconciler.begin_submit(pair("e2e4")).expect("admitted");

    let settlement = reconciler.settle(ticket, Err(unreachable("connection refused")));
    assert!(matches!(settlement, Settlement::Unreachable(_)));
    assert!(reconciler.session().user_moves().is_empty());
    assert!(!reconciler.is_awaiting_verdict());
}

#[test]
fn test_divergent_verdict_surfaced_not_applied() {
    let mut reconciler = Reconciler::new();
    let ticket = reconciler.begin_submit(pair("e2e4")).expect("admitted");

    // The adjudicator accepted, but its countermove is illegal locally.
    let settlement = reconciler.settle(ticket, Ok(Some(pair("e2e4"))));
    assert!(matches!(settlement, Settlement::Diverged(_)));

    // Nothing was applied, not even the human half of the turn.
    assert!(reconciler.session().user_moves().is_empty());
    assert_eq!(reconciler.session().position().to_fen(), START_FEN);
}

#[test]
fn test_reset_clears_everything() {
    let mut reconciler = Reconciler::new();
    let ticket = reconciler.begin_submit(pair("e2e4")).expect("admitted");
    reconciler.settle(ticket, Ok(Some(pair("e7e5"))));

    let session = reconciler.reset().clone();
    assert_eq!(session.position().to_fen(), START_FEN);
    assert!(session.user_moves().is_empty());
    assert!(session.bot_moves().is_empty());
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_stale_verdict_after_reset_discarded() {
    let mut reconciler = Reconciler::new();
    let ticket = reconciler.begin_submit(pair("e2e4")).expect("admitted");

    reconciler.reset();

    // The old submission resolves after the reset; its verdict must not
    // touch the fresh session.
    let settlement = reconciler.settle(ticket, Ok(Some(pair("e7e5"))));
    assert!(matches!(settlement, Settlement::Stale));
    assert!(reconciler.session().user_moves().is_empty());
    assert_eq!(reconciler.session().position().to_fen(), START_FEN);
    assert!(!reconciler.is_awaiting_verdict());

    // A new submission against the fresh session settles normally.
    let ticket = reconciler.begin_submit(pair("e2e4")).expect("admitted");
    let settlement = reconciler.settle(ticket, Ok(Some(pair("e7e5"))));
    assert!(matches!(settlement, Settlement::Applied(_)));
    assert_eq!(reconciler.session().user_moves().len(), 1);
}

#[test]
fn test_double_settle_is_stale() {
    let mut reconciler = Reconciler::new();
    let ticket = reconciler.begin_submit(pair("e2e4")).expect("admitted");

    reconciler.settle(ticket, Ok(Some(pair("e7e5"))));
    let settlement = reconciler.settle(ticket, Ok(Some(pair("e7e5"))));

    assert!(matches!(settlement, Settlement::Stale));
    assert_eq!(reconciler.session().user_moves().len(), 1);
}

#[test]
fn test_checkmate_through_settlement() {
    let mut reconciler = Reconciler::new();

    let ticket = reconciler.begin_submit(pair("f2f3")).expect("admitted");
    reconciler.settle(ticket, Ok(Some(pair("e7e5"))));
    let ticket = reconciler.begin_submit(pair("g2g4")).expect("admitted");
    let session = match reconciler.settle(ticket, Ok(Some(pair("d8h4")))) {
        Settlement::Applied(session) => session,
        other => panic!("expected an applied settlement, got {other:?}"),
    };
    assert_eq!(session.status(), GameStatus::BotWon);
}

#[test]
fn test_win_when_bot_has_no_reply() {
    let mut reconciler = Reconciler::new();
    let turns = [
        ("e2e4", Some("e7e5")),
        ("d1h5", Some("b8c6")),
        ("f1c4", Some("g8f6")),
        ("h5f7", None),
    ];

    for (user, bot) in turns {
        let ticket = reconciler.begin_submit(pair(user)).expect("admitted");
        let verdict = Ok(bot.map(pair));
        assert!(matches!(
            reconciler.settle(ticket, verdict),
            Settlement::Applied(_)
        ));
    }

    let session = reconciler.session();
    assert_eq!(session.status(), GameStatus::UserWon);
    assert_eq!(session.user_moves().len(), 4);
    assert_eq!(session.bot_moves().len(), 4);
    assert_eq!(session.bot_moves().last(), Some(&None));
}
