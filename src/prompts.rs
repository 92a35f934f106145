//! Fixed user-facing texts.

/// Shown once when the chat opens.
pub const WELCOME_MESSAGE: &str = "Hi! I'm a legal assistant. Ask me about laws and regulations.";

/// Bot text used when a successful reply carries no `response` field.
pub const FALLBACK_RESPONSE: &str = "Sorry, no response found.";

/// Bot text appended to the conversation whenever a request fails.
pub const CONNECTION_PROBLEM: &str = "Sorry, there was a problem connecting to the legal chatbot.";

/// Every diagnostic in the error slot starts with this.
pub const DIAGNOSTIC_PREFIX: &str = "An error occurred. ";

pub const NO_RESPONSE_DETAIL: &str = "No response received from the server. Check your connection.";

pub const INPUT_PLACEHOLDER: &str = "Ask about laws and regulations...";

pub const THINKING_LABEL: &str = "Assistant is thinking";
