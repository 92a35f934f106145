//! Conversation history display component

use crate::events::{Message, Sender};
use crate::render::{markup, render_message, MessageBlock};
use std::cell::Cell;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// Append-only list of rendered messages
#[derive(Clone, Default)]
pub struct ConversationHistory {
    blocks: Vec<MessageBlock>,
    /// Lines scrolled up from the bottom; 0 follows the newest message
    scroll_offset: usize,
    show_timestamps: bool,
    /// Inner width and height from the last draw
    viewport: Cell<Option<(u16, u16)>>,
}

impl ConversationHistory {
    pub fn new(show_timestamps: bool) -> Self {
        Self {
            blocks: Vec::new(),
            scroll_offset: 0,
            show_timestamps,
            viewport: Cell::new(None),
        }
    }

    /// Render a message, append its block and scroll to it
    pub fn display(&mut self, text: impl Into<String>, sender: Sender) -> &MessageBlock {
        self.push(render_message(Message::new(text, sender)))
    }

    fn push(&mut self, block: MessageBlock) -> &MessageBlock {
        self.blocks.push(block);
        self.scroll_to_bottom();
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn add_user_message(&mut self, text: impl Into<String>) -> &MessageBlock {
        self.display(text, Sender::User)
    }

    pub fn add_bot_message(&mut self, text: impl Into<String>) -> &MessageBlock {
        self.display(text, Sender::Bot)
    }

    pub fn blocks(&self) -> &[MessageBlock] {
        &self.blocks
    }

    pub fn last(&self) -> Option<&MessageBlock> {
        self.blocks.last()
    }

    pub fn message_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Scroll towards older messages, stopping once the first line is at the top
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(self.max_offset());
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Largest useful offset for the last drawn viewport; unbounded before the first draw
    fn max_offset(&self) -> usize {
        match self.viewport.get() {
            Some((width, height)) => self.lines(width).len().saturating_sub(height as usize),
            None => usize::MAX,
        }
    }

    /// All lines at the given width, with a blank line between messages
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut all_lines = Vec::new();
        for block in &self.blocks {
            all_lines.extend(markup::block_lines(block, width, self.show_timestamps));
            all_lines.push(Line::from(vec![Span::raw("")]));
        }
        all_lines
    }
}

impl Widget for &ConversationHistory {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("💬 Legal Assistant");

        let inner_area = block.inner(area);
        block.render(area, buf);
        self.viewport.set(Some((inner_area.width, inner_area.height)));

        if self.blocks.is_empty() {
            let line = Line::from(vec![Span::styled(
                "No messages yet.",
                Style::default().fg(Color::DarkGray),
            )]);
            buf.set_line(inner_area.x, inner_area.y, &line, inner_area.width);
            return;
        }

        let all_lines = self.lines(inner_area.width);

        // Window of `height` lines ending `scroll_offset` lines above the bottom
        let height = inner_area.height as usize;
        let total = all_lines.len();
        let max_offset = total.saturating_sub(height);
        let offset = self.scroll_offset.min(max_offset);
        let end = total - offset;
        let start = end.saturating_sub(height);

        for (i, line) in all_lines[start..end].iter().enumerate() {
            buf.set_line(inner_area.x, inner_area.y + i as u16, line, inner_area.width);
        }
    }
}
