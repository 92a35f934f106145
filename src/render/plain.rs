//! Stdout rendering for one-shot answers

use crate::render::block::{BlockBody, MessageBlock};
use crate::render::format::{FormattedResponse, SectionStyle};
use crossterm::style::{style, Stylize};

/// Render a block as text for a plain terminal. With `color`, sections are styled like the TUI.
pub fn render_plain(block: &MessageBlock, color: bool) -> String {
    let mut out = String::new();
    match &block.body {
        BlockBody::Literal(text) => {
            out.push_str(text);
            out.push('\n');
        }
        BlockBody::SubResponses(groups) => {
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                push_group(&mut out, group, color);
            }
        }
    }
    out
}

fn push_group(out: &mut String, group: &FormattedResponse, color: bool) {
    for (i, section) in group.sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for line in section.text.split('\n') {
            let rendered = match (section.style, color) {
                (SectionStyle::Callout, true) => {
                    format!("{} {}", style("│").blue().bold(), style(line).cyan())
                }
                (SectionStyle::Callout, false) => format!("│ {}", line),
                (SectionStyle::Footnote, true) => style(line).dark_grey().italic().to_string(),
                (SectionStyle::Footnote, false) | (SectionStyle::Body, _) => line.to_string(),
            };
            out.push_str(&rendered);
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Message;
    use crate::render::block::{render_message, RESPONSE_DELIMITER};

    #[test]
    fn test_plain_literal() {
        let block = render_message(Message::bot("Hello!"));
        assert_eq!(render_plain(&block, false), "Hello!\n");
    }

    #[test]
    fn test_plain_groups_without_color() {
        let text = format!(
            "Intro.\n\nthe consequences may include a fine.\n\n{}\n\n⚖️ Note.",
            RESPONSE_DELIMITER.as_str()
        );
        let block = render_message(Message::bot(text));
        assert_eq!(
            render_plain(&block, false),
            "Intro.\n\n│ the consequences may include a fine.\n\n⚖️ Note.\n"
        );
    }

    #[test]
    fn test_plain_groups_with_color_keep_text() {
        let text = format!(
            "Intro.\n\nthe consequences may include a fine.\n\n{}\n\n⚖️ Note.",
            RESPONSE_DELIMITER.as_str()
        );
        let block = render_message(Message::bot(text));
        let out = render_plain(&block, true);

        assert!(out.contains("Intro.\n"));
        assert!(out.contains("the consequences may include a fine."));
        assert!(out.contains("⚖️ Note."));
        assert!(out.contains('\x1b'));
        assert_eq!(out.lines().filter(|l| !l.is_empty()).count(), 3);
    }
}
