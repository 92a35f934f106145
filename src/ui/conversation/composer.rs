use crate::prompts::INPUT_PLACEHOLDER;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// Result returned when the user interacts with the composer
#[derive(Debug, PartialEq, Eq)]
pub enum ComposerResult {
    /// Submit gesture; the caller reads and clears the value
    Submit,
    None,
}

/// State for the single-line input. `cursor_position` counts chars, not bytes.
#[derive(Debug, Clone, Default)]
pub struct TextAreaState {
    pub content: String,
    pub cursor_position: usize,
}

impl TextAreaState {
    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

/// Input field for user questions
#[derive(Clone)]
pub struct ConversationComposer {
    state: TextAreaState,
    placeholder: String,
    has_focus: bool,
}

impl Default for ConversationComposer {
    fn default() -> Self {
        Self::new(INPUT_PLACEHOLDER.to_string())
    }
}

impl ConversationComposer {
    pub fn new(placeholder: String) -> Self {
        Self {
            state: TextAreaState::default(),
            placeholder,
            has_focus: true,
        }
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) -> ComposerResult {
        if key.kind != KeyEventKind::Press {
            return ComposerResult::None;
        }

        match key.code {
            KeyCode::Enter => return ComposerResult::Submit,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.state.cursor_position = self.state.cursor_position.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.state.cursor_position < self.state.char_len() {
                    self.state.cursor_position += 1;
                }
            }
            KeyCode::Home => self.state.cursor_position = 0,
            KeyCode::End => self.state.cursor_position = self.state.char_len(),
            _ => {}
        }

        ComposerResult::None
    }

    /// Insert pasted text at the cursor; newlines become spaces on a single-line input
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(if c == '\n' || c == '\r' { ' ' } else { c });
        }
    }

    fn insert_char(&mut self, c: char) {
        let idx = self.state.byte_index(self.state.cursor_position);
        self.state.content.insert(idx, c);
        self.state.cursor_position += 1;
    }

    fn backspace(&mut self) {
        if self.state.cursor_position > 0 {
            self.state.cursor_position -= 1;
            let idx = self.state.byte_index(self.state.cursor_position);
            self.state.content.remove(idx);
        }
    }

    fn delete(&mut self) {
        if self.state.cursor_position < self.state.char_len() {
            let idx = self.state.byte_index(self.state.cursor_position);
            self.state.content.remove(idx);
        }
    }

    /// Set focus state
    pub fn set_focus(&mut self, has_focus: bool) {
        self.has_focus = has_focus;
    }

    /// Get current content
    pub fn value(&self) -> &str {
        &self.state.content
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.state.content = value.into();
        self.state.cursor_position = self.state.char_len();
    }

    pub fn is_empty(&self) -> bool {
        self.state.content.is_empty()
    }

    /// Clear content
    pub fn clear(&mut self) {
        self.state.content.clear();
        self.state.cursor_position = 0;
    }
}

impl Widget for &ConversationComposer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("⚖️ Ask a question")
            .style(if self.has_focus {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            });

        let inner_area = block.inner(area);
        block.render(area, buf);

        let line = if self.state.content.is_empty() {
            Line::from(vec![Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            )])
        } else {
            let mut content = self.state.content.clone();
            if self.has_focus {
                content.insert(self.state.byte_index(self.state.cursor_position), '▌');
            }
            Line::from(vec![Span::raw(content)])
        };
        buf.set_line(inner_area.x, inner_area.y, &line, inner_area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(composer: &mut ConversationComposer, code: KeyCode) -> ComposerResult {
        composer.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(composer: &mut ConversationComposer, text: &str) {
        for c in text.chars() {
            press(composer, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_editing() {
        let mut composer = ConversationComposer::default();
        type_str(&mut composer, "thft");
        press(&mut composer, KeyCode::Left);
        press(&mut composer, KeyCode::Left);
        type_str(&mut composer, "e");
        assert_eq!(composer.value(), "theft");

        press(&mut composer, KeyCode::End);
        press(&mut composer, KeyCode::Backspace);
        press(&mut composer, KeyCode::Home);
        press(&mut composer, KeyCode::Delete);
        assert_eq!(composer.value(), "hef");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut composer = ConversationComposer::default();
        type_str(&mut composer, "₹500");
        press(&mut composer, KeyCode::Home);
        press(&mut composer, KeyCode::Right);
        press(&mut composer, KeyCode::Backspace);
        assert_eq!(composer.value(), "500");
    }

    #[test]
    fn test_enter_submits_without_clearing() {
        let mut composer = ConversationComposer::default();
        type_str(&mut composer, "hello");
        assert_eq!(press(&mut composer, KeyCode::Enter), ComposerResult::Submit);
        assert_eq!(composer.value(), "hello");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut composer = ConversationComposer::default();
        composer.insert_str("line one\nline two");
        assert_eq!(composer.value(), "line one line two");
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut composer = ConversationComposer::default();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(composer.handle_key(key), ComposerResult::None);
        assert!(composer.is_empty());
    }
}
