//! Application view state.

use crate::game::{GameStatus, Session, SquarePair};
use crate::orchestrator::GameEvent;
use crossterm::event::KeyCode;
use shakmaty::Square;
use tracing::debug;

use super::input;

/// View state for the terminal client: the last published session plus
/// cursor, selection and status line.
pub struct App {
    session: Session,
    status_message: String,
    awaiting_bot: bool,
    cursor: Square,
    selected: Option<Square>,
}

impl App {
    /// Creates the view state, showing the starting position until the
    /// orchestrator publishes its first session.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            status_message: "Connecting to the adjudication service...".to_string(),
            awaiting_bot: false,
            cursor: Square::E2,
            selected: None,
        }
    }

    /// The session currently on display.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The status line text.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True while a submission awaits its verdict.
    pub fn awaiting_bot(&self) -> bool {
        self.awaiting_bot
    }

    /// The square under the cursor.
    pub fn cursor(&self) -> Square {
        self.cursor
    }

    /// The selected origin square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::SessionChanged(session) => {
                self.awaiting_bot = false;
                self.status_message = match session.status() {
                    GameStatus::InProgress => "Your move.".to_string(),
                    GameStatus::UserWon => {
                        "You win - game over. Press 'r' for a new game.".to_string()
                    }
                    GameStatus::BotWon => {
                        "Bot wins - game over. Press 'r' for a new game.".to_string()
                    }
                };
                self.session = session;
            }
            GameEvent::AwaitingBot => {
                self.awaiting_bot = true;
                self.status_message = "Bot is thinking...".to_string();
            }
            GameEvent::MoveRejected(reason) => {
                self.awaiting_bot = false;
                self.status_message = format!("Move rejected: {reason}. Try again.");
            }
            GameEvent::AdjudicatorUnreachable(message) => {
                self.awaiting_bot = false;
                self.status_message = format!("Server error: {message}");
            }
            GameEvent::RulesDiverged(detail) => {
                self.awaiting_bot = false;
                self.status_message =
                    format!("POSITION OUT OF SYNC with the server ({detail}). Press 'r' to reset.");
            }
        }
    }

    /// Moves the board cursor for an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Confirms the square under the cursor.
    ///
    /// The first confirmation picks the piece up, the second drops it and
    /// yields the pair to submit. Confirming the origin again puts the
    /// piece back down.
    pub fn confirm_square(&mut self) -> Option<SquarePair> {
        match self.selected {
            None => {
                self.selected = Some(self.cursor);
                None
            }
            Some(origin) if origin == self.cursor => {
                self.selected = None;
                None
            }
            Some(origin) => {
                self.selected = None;
                SquarePair::new(origin, self.cursor).ok()
            }
        }
    }

    /// Drops any pending selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Notes that a reset was requested, ahead of the fresh session.
    pub fn note_reset(&mut self) {
        debug!("Reset requested");
        self.selected = None;
        self.status_message = "Starting a new game...".to_string();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
