use crate::client::RequestError;
use crate::events::AskRequest;
use crate::prompts::{CONNECTION_PROBLEM, WELCOME_MESSAGE};
use crate::ui::conversation::{
    get_help_text, parse_slash_command, ComposerResult, ConversationComposer,
    ConversationHistory, PendingRequests, SlashCommand,
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};
use tracing::{error, info};
use uuid::Uuid;

const SCROLL_PAGE: usize = 10;

/// Actions that can be requested by the conversation manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationAction {
    None,
    /// Send this request; its outcome comes back through `complete`
    Ask(AskRequest),
    Exit,
}

/// Owns all visible chat state: history, input, error slot and pending requests
pub struct ConversationManager {
    history: ConversationHistory,
    composer: ConversationComposer,
    pending: PendingRequests,
    error_message: String,
}

impl ConversationManager {
    pub fn new(show_timestamps: bool) -> Self {
        Self {
            history: ConversationHistory::new(show_timestamps),
            composer: ConversationComposer::default(),
            pending: PendingRequests::new(),
            error_message: String::new(),
        }
    }

    /// Start a new conversation with the greeting
    pub fn start_conversation(&mut self) {
        self.composer.set_focus(true);
        self.history.add_bot_message(WELCOME_MESSAGE);
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> ConversationAction {
        if key.kind != KeyEventKind::Press {
            return ConversationAction::None;
        }

        match key.code {
            KeyCode::Esc => return ConversationAction::Exit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return ConversationAction::Exit;
            }
            KeyCode::PageUp => {
                self.history.scroll_up(SCROLL_PAGE);
                return ConversationAction::None;
            }
            KeyCode::PageDown => {
                self.history.scroll_down(SCROLL_PAGE);
                return ConversationAction::None;
            }
            KeyCode::Up if self.composer.is_empty() => {
                self.history.scroll_up(1);
                return ConversationAction::None;
            }
            KeyCode::Down if self.composer.is_empty() => {
                self.history.scroll_down(1);
                return ConversationAction::None;
            }
            _ => {}
        }

        match self.composer.handle_key(key) {
            ComposerResult::Submit => self.submit(),
            ComposerResult::None => ConversationAction::None,
        }
    }

    /// Pasted text goes into the composer
    pub fn handle_paste(&mut self, text: &str) {
        self.composer.insert_str(text);
    }

    /// Submit gesture. Empty input does nothing; otherwise the user message is
    /// shown and the input cleared before the request is handed back.
    pub fn submit(&mut self) -> ConversationAction {
        let query = self.composer.value().trim().to_string();
        if query.is_empty() {
            return ConversationAction::None;
        }

        if let Some(command) = parse_slash_command(&query) {
            self.composer.clear();
            return match command {
                SlashCommand::Help => {
                    self.history.add_bot_message(get_help_text());
                    ConversationAction::None
                }
                SlashCommand::Bye => ConversationAction::Exit,
            };
        }

        self.error_message.clear();
        self.history.add_user_message(query.clone());
        self.composer.clear();

        let request = AskRequest::new(query);
        self.pending.start(request.id);
        info!(request_id = %request.id, query_len = request.query.len(), "submitting question");
        ConversationAction::Ask(request)
    }

    /// Consume the outcome of a request
    pub fn complete(&mut self, id: Uuid, outcome: Result<String, RequestError>) {
        if !self.pending.finish(id) {
            info!(request_id = %id, "completion for a request that was not pending");
        }

        match outcome {
            Ok(text) => {
                info!(request_id = %id, "answer received");
                self.history.add_bot_message(text);
            }
            Err(err) => {
                error!(request_id = %id, kind = err.kind(), "ask request failed: {:?}", err);
                self.error_message = err.diagnostic();
                self.history.add_bot_message(CONNECTION_PROBLEM);
            }
        }
    }

    /// Advance animations
    pub fn tick(&mut self) {
        self.pending.tick();
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn composer(&self) -> &ConversationComposer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut ConversationComposer {
        &mut self.composer
    }

    pub fn pending(&self) -> &PendingRequests {
        &self.pending
    }

    /// Contents of the inline error slot; empty when there is no error
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

impl Widget for &ConversationManager {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // History takes most space, then the indicator, composer and error slot
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // History
                Constraint::Length(1), // Pending indicator
                Constraint::Length(3), // Composer
                Constraint::Length(1), // Error slot
            ])
            .split(area);

        self.history.render(chunks[0], buf);
        self.pending.render(chunks[1], buf);
        self.composer.render(chunks[2], buf);

        if !self.error_message.is_empty() {
            let line = Line::from(vec![Span::styled(
                self.error_message.as_str(),
                Style::default().fg(Color::Red),
            )]);
            buf.set_line(chunks[3].x, chunks[3].y, &line, chunks[3].width);
        }
    }
}
