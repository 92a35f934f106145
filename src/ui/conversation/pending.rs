use crate::prompts::THINKING_LABEL;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};
use std::collections::HashSet;
use uuid::Uuid;

/// Tracks requests that are still in flight
#[derive(Clone, Default)]
pub struct PendingRequests {
    in_flight: HashSet<Uuid>,
    /// Animation frame, advanced on every tick
    frame: usize,
}

impl PendingRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, id: Uuid) {
        self.in_flight.insert(id);
    }

    /// Returns false if the id was not pending
    pub fn finish(&mut self, id: Uuid) -> bool {
        self.in_flight.remove(&id)
    }

    pub fn count(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_waiting(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Indicator text, or `None` when nothing is pending
    pub fn label(&self) -> Option<String> {
        if !self.is_waiting() {
            return None;
        }
        let dots = match self.frame % 4 {
            0 => ".",
            1 => "..",
            2 => "...",
            _ => "   ",
        };
        let mut label = format!("{}{}", THINKING_LABEL, dots);
        if self.count() > 1 {
            label.push_str(&format!(" ({} questions)", self.count()));
        }
        Some(label)
    }
}

impl Widget for &PendingRequests {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(label) = self.label() else {
            return;
        };
        let indicator = Line::from(vec![
            Span::styled("🤖 ", Style::default().fg(Color::Green)),
            Span::styled(label, Style::default().fg(Color::Yellow)),
        ]);
        buf.set_line(area.x, area.y, &indicator, area.width);
    }
}
