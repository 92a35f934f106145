//! Terminal markup for rendered blocks

use crate::events::Sender;
use crate::render::block::{BlockBody, MessageBlock};
use crate::render::format::{FormattedResponse, Section, SectionStyle};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const INDENT: &str = "  ";
const CALLOUT_BAR: &str = "│ ";

/// Style used for a section variant
pub fn section_style(style: SectionStyle) -> Style {
    match style {
        SectionStyle::Callout => Style::default().fg(Color::LightBlue),
        SectionStyle::Footnote => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        SectionStyle::Body => Style::default(),
    }
}

/// Style used for literal message text
pub fn literal_style(sender: Sender) -> Style {
    match sender {
        Sender::User => Style::default().fg(Color::Blue),
        Sender::Bot => Style::default().fg(Color::Green),
    }
}

/// Lines for one block, wrapped to `width` columns
pub fn block_lines(block: &MessageBlock, width: u16, show_timestamps: bool) -> Vec<Line<'static>> {
    let mut lines = vec![header_line(block, show_timestamps)];
    let content_width = (width as usize).saturating_sub(INDENT.len());

    match &block.body {
        BlockBody::Literal(text) => {
            let style = literal_style(block.sender());
            for row in wrap_text(text, content_width) {
                lines.push(Line::from(vec![Span::raw(INDENT), Span::styled(row, style)]));
            }
        }
        BlockBody::SubResponses(groups) => {
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    lines.push(Line::from(""));
                }
                lines.extend(response_lines(group, content_width));
            }
        }
    }

    lines
}

fn header_line(block: &MessageBlock, show_timestamps: bool) -> Line<'static> {
    let icon = match block.sender() {
        Sender::User => "👤",
        Sender::Bot => "🤖",
    };
    let header = if show_timestamps {
        let timestamp = block.message.timestamp.format("%H:%M:%S");
        format!("{} {} {} {}", icon, block.sender().display_name(), timestamp, "─".repeat(20))
    } else {
        format!("{} {} {}", icon, block.sender().display_name(), "─".repeat(20))
    };

    Line::from(vec![Span::styled(header, Style::default().fg(Color::DarkGray))])
}

/// Lines for one sub-response group
pub fn response_lines(group: &FormattedResponse, width: usize) -> Vec<Line<'static>> {
    let frame = Style::default().fg(Color::Gray);
    let mut lines = vec![Line::from(vec![
        Span::raw(INDENT),
        Span::styled(format!("┌{}", "─".repeat(width.saturating_sub(1).min(40))), frame),
    ])];

    for (i, section) in group.sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(vec![Span::raw(INDENT), Span::styled("│", frame)]));
        }
        lines.extend(section_lines(section, width.saturating_sub(2)));
    }

    lines.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(format!("└{}", "─".repeat(width.saturating_sub(1).min(40))), frame),
    ]));
    lines
}

fn section_lines(section: &Section, width: usize) -> Vec<Line<'static>> {
    let frame = Style::default().fg(Color::Gray);
    let style = section_style(section.style);
    let mut lines = Vec::new();

    match section.style {
        SectionStyle::Callout => {
            let bar = Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD);
            for row in wrap_text(&section.text, width.saturating_sub(CALLOUT_BAR.chars().count())) {
                lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled("│ ", frame),
                    Span::styled(CALLOUT_BAR, bar),
                    Span::styled(row, style),
                ]));
            }
        }
        SectionStyle::Footnote => {
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled("│ ", frame),
                Span::styled("╌".repeat(width.min(30)), Style::default().fg(Color::DarkGray)),
            ]));
            for row in wrap_text(&section.text, width) {
                lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled("│ ", frame),
                    Span::styled(row, style),
                ]));
            }
        }
        SectionStyle::Body => {
            for row in wrap_text(&section.text, width) {
                lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled("│ ", frame),
                    Span::styled(row, style),
                ]));
            }
        }
    }

    lines
}

/// Word-wrap text to `width` columns. Explicit newlines always break.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if word_len > width {
                // Words longer than a row are cut at char boundaries
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current_line));
                }
                let chars: Vec<char> = word.chars().collect();
                let mut chunks = chars.chunks(width).peekable();
                while let Some(chunk) = chunks.next() {
                    if chunks.peek().is_some() {
                        lines.push(chunk.iter().collect());
                    } else {
                        current_line = chunk.iter().collect();
                        current_len = chunk.len();
                    }
                }
            } else if current_len == 0 {
                current_line.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= width {
                current_line.push(' ');
                current_line.push_str(word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line.push_str(word);
                current_len = word_len;
            }
        }

        lines.push(current_line);
    }

    lines
}
