use std::str::FromStr;

use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Commands that can be invoked by starting a message with a leading slash.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, AsRefStr, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum SlashCommand {
    /// Show help
    Help,
    /// Exit the application
    Bye,
}

impl SlashCommand {
    /// User-visible description shown in help.
    pub fn description(self) -> &'static str {
        match self {
            SlashCommand::Help => "show available commands",
            SlashCommand::Bye => "exit the application",
        }
    }

    /// Command string without the leading '/'.
    pub fn command(self) -> &'static str {
        self.into()
    }
}

/// Parse a slash command from user input. Only a bare command matches; anything
/// else, including a command followed by more words, is sent as a query.
pub fn parse_slash_command(input: &str) -> Option<SlashCommand> {
    let rest = input.trim().strip_prefix('/')?;
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return None;
    }
    let head = rest.to_lowercase();

    SlashCommand::from_str(&head).ok().or_else(|| match head.as_str() {
        "h" | "?" => Some(SlashCommand::Help),
        "q" | "quit" | "exit" => Some(SlashCommand::Bye),
        _ => None,
    })
}

/// Get help text for all available commands
pub fn get_help_text() -> String {
    let mut help = String::from("Available commands:\n");
    for command in SlashCommand::iter() {
        help.push_str(&format!("\n/{} - {}", command.command(), command.description()));
    }

    help.push_str("\n\nYou can also use /h or /? for /help, and /q, /quit or /exit for /bye.");
    help.push_str("\nPress Enter to send, PageUp/PageDown to scroll, Esc to quit.");

    help
}
