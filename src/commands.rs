use crate::client::AskClient;
use crate::config::Config;
use crate::events::Message;
use crate::prompts::CONNECTION_PROBLEM;
use crate::render::{render_message, render_plain};
use anyhow::{bail, Result};
use std::io::{self, Write};
use tracing::error;

/// Send one question and print the formatted answer to stdout.
/// Returns false when the request failed; the diagnostic goes to stderr.
pub async fn ask_once(config: &Config, query: &str, color: bool) -> Result<bool> {
    let query = query.trim();
    if query.is_empty() {
        bail!("Query is empty");
    }

    let client = AskClient::new(config)?;
    let outcome = client.ask(query).await;
    let mut stdout = io::stdout().lock();

    match outcome {
        Ok(text) => {
            let block = render_message(Message::bot(text));
            stdout.write_all(render_plain(&block, color).as_bytes())?;
            Ok(true)
        }
        Err(err) => {
            error!(kind = err.kind(), "ask request failed: {:?}", err);
            writeln!(stdout, "{}", CONNECTION_PROBLEM)?;
            eprintln!("{}", err.diagnostic());
            Ok(false)
        }
    }
}

/// Print the effective configuration as TOML
pub fn show_config(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
