use crate::client::RequestError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Internal application events delivered to the UI loop
#[derive(Debug)]
pub enum AppEvent {
    /// A spawned ask request finished, successfully or not
    AskCompleted {
        id: Uuid,
        outcome: Result<String, RequestError>,
    },
}

/// TUI-specific events (keyboard, paste, etc.)
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Key press event
    Key(crossterm::event::KeyEvent),

    /// Paste event
    Paste(String),

    /// Draw/redraw request
    Draw,
}

impl TuiEvent {
    /// Map a terminal event; events the chat does not use become a redraw
    pub fn from_crossterm(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(key) => TuiEvent::Key(key),
            crossterm::event::Event::Paste(text) => TuiEvent::Paste(text),
            _ => TuiEvent::Draw,
        }
    }
}

/// Who a message came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn is_bot(&self) -> bool {
        matches!(self, Sender::Bot)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Assistant",
        }
    }
}

/// A single chat message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }
}

/// One outbound question, produced by a submission and consumed by a request task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    pub id: Uuid,
    pub query: String,
}

impl AskRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            query: query.into(),
        }
    }
}
