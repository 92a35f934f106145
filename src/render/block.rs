//! Conversation renderer: turns a message into the block kept in the display list.

use crate::events::{Message, Sender};
use crate::render::format::{format_response, FormattedResponse};
use once_cell::sync::Lazy;

/// Separates independent answers inside one bot reply: fifty dashes.
pub static RESPONSE_DELIMITER: Lazy<String> = Lazy::new(|| "-".repeat(50));

/// What a block shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockBody {
    /// The message text, unformatted
    Literal(String),
    /// One formatted group per non-blank sub-response
    SubResponses(Vec<FormattedResponse>),
}

/// A rendered message
#[derive(Debug, Clone, PartialEq)]
pub struct MessageBlock {
    pub message: Message,
    pub body: BlockBody,
}

impl MessageBlock {
    pub fn sender(&self) -> Sender {
        self.message.sender
    }

    /// Number of sub-response groups; literal blocks count as none
    pub fn sub_response_count(&self) -> usize {
        match &self.body {
            BlockBody::Literal(_) => 0,
            BlockBody::SubResponses(groups) => groups.len(),
        }
    }
}

/// Split bot text on the dash delimiter, keeping each non-blank piece trimmed
pub fn split_sub_responses(text: &str) -> Vec<&str> {
    text.split(RESPONSE_DELIMITER.as_str())
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Build the block for a message. Only bot text containing the delimiter is segmented.
pub fn render_message(message: Message) -> MessageBlock {
    let body = if message.sender.is_bot() && message.text.contains(RESPONSE_DELIMITER.as_str()) {
        BlockBody::SubResponses(
            split_sub_responses(&message.text)
                .into_iter()
                .map(format_response)
                .collect(),
        )
    } else {
        BlockBody::Literal(message.text.clone())
    };

    MessageBlock { message, body }
}
