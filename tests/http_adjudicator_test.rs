//! Wire-contract tests for the HTTP adjudicator client, against an
//! in-process stub service.

use axum::{Json, Router, routing::post};
use chessbot_tui::adjudicator::{Adjudicator, AdjudicatorError, HttpAdjudicator};
use chessbot_tui::game::SquarePair;
use serde_json::{Value, json};

fn pair(s: &str) -> SquarePair {
    s.parse().expect("valid move string")
}

async fn move_handler(Json(body): Json<Value>) -> Json<Value> {
    match body.get("move").and_then(Value::as_str) {
        Some("e2e4") => Json(json!({ "bot_move": "e7e5" })),
        Some("d2d4") => Json(json!({})),
        Some("a2a3") => Json(json!({ "bot_move": "not-a-move" })),
        Some("b2b4") => Json(json!({ "bot_move": "e7e8q" })),
        _ => Json(json!({ "error": "illegal move" })),
    }
}

/// Serves the stub adjudicator on an ephemeral port, returning its URL.
async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/move", post(move_handler))
        .route("/reset", post(|| async { Json(json!({})) }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub serve");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_submit_returns_countermove() {
    let adjudicator = HttpAdjudicator::new(spawn_stub().await);
    let bot_move = adjudicator.submit(pair("e2e4")).await.expect("accepted");
    assert_eq!(bot_move, Some(pair("e7e5")));
}

#[tokio::test]
async fn test_submit_without_countermove() {
    let adjudicator = HttpAdjudicator::new(spawn_stub().await);
    let bot_move = adjudicator.submit(pair("d2d4")).await.expect("accepted");
    assert_eq!(bot_move, None);
}

#[tokio::test]
async fn test_submit_error_field_is_rejection() {
    let adjudicator = HttpAdjudicator::new(spawn_stub().await);
    let err = adjudicator
        .submit(pair("e2e5"))
        .await
        .expect_err("rejected");
    assert!(matches!(
        err,
        AdjudicatorError::Rejected { reason } if reason == "illegal move"
    ));
}

#[tokio::test]
async fn test_malformed_countermove_is_transport_fault() {
    let adjudicator = HttpAdjudicator::new(spawn_stub().await);
    let err = adjudicator
        .submit(pair("a2a3"))
        .await
        .expect_err("malformed payload");
    assert!(matches!(err, AdjudicatorError::Transport { .. }));
}

#[tokio::test]
async fn test_countermove_with_promotion_suffix() {
    let adjudicator = HttpAdjudicator::new(spawn_stub().await);
    let bot_move = adjudicator.submit(pair("b2b4")).await.expect("accepted");
    assert_eq!(bot_move, Some(pair("e7e8")));
}

#[tokio::test]
async fn test_reset_succeeds() {
    let adjudicator = HttpAdjudicator::new(spawn_stub().await);
    adjudicator.reset().await.expect("reset accepted");
}

#[tokio::test]
async fn test_unreachable_service_is_transport_fault() {
    // Nothing listens on this port.
    let adjudicator = HttpAdjudicator::new("http://127.0.0.1:9");
    let err = adjudicator
        .submit(pair("e2e4"))
        .await
        .expect_err("no service");
    assert!(matches!(err, AdjudicatorError::Transport { .. }));

    let err = adjudicator.reset().await.expect_err("no service");
    assert!(matches!(err, AdjudicatorError::Transport { .. }));
}
