//! Terminal setup and the UI event loop

use crate::client::AskClient;
use crate::config::Config;
use crate::events::{AppEvent, AskRequest, TuiEvent};
use crate::ui::conversation::{ConversationAction, ConversationManager};
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};
use tracing::{debug, info};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the chat until the user quits. The terminal is restored even when the loop fails.
pub async fn run_tui(config: Config) -> Result<()> {
    let client = AskClient::new(&config)?;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_loop(&mut terminal, client, config.ui.show_timestamps).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;

    result
}

/// Send one request and wrap its outcome as an event for the loop
pub async fn execute_request(client: &AskClient, request: AskRequest) -> AppEvent {
    let outcome = client.ask(&request.query).await;
    AppEvent::AskCompleted {
        id: request.id,
        outcome,
    }
}

fn spawn_request(client: &AskClient, request: AskRequest, tx: mpsc::UnboundedSender<AppEvent>) {
    let client = client.clone();
    tokio::spawn(async move {
        let event = execute_request(&client, request).await;
        // The loop may have exited; the outcome is then dropped
        let _ = tx.send(event);
    });
}

async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    client: AskClient,
    show_timestamps: bool,
) -> Result<()> {
    let mut manager = ConversationManager::new(show_timestamps);
    manager.start_conversation();

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    let mut terminal_events = EventStream::new();
    let mut ticker = interval(TICK_RATE);

    info!("chat started");

    loop {
        terminal.draw(|frame| frame.render_widget(&manager, frame.size()))?;

        let event = tokio::select! {
            maybe_event = terminal_events.next() => match maybe_event {
                Some(event) => TuiEvent::from_crossterm(event.context("Failed to read terminal event")?),
                None => break,
            },
            Some(app_event) = rx.recv() => {
                match app_event {
                    AppEvent::AskCompleted { id, outcome } => manager.complete(id, outcome),
                }
                continue;
            }
            _ = ticker.tick() => {
                manager.tick();
                TuiEvent::Draw
            }
        };

        let action = match event {
            TuiEvent::Key(key) => manager.handle_key(key),
            TuiEvent::Paste(text) => {
                manager.handle_paste(&text);
                ConversationAction::None
            }
            TuiEvent::Draw => ConversationAction::None,
        };

        match action {
            ConversationAction::None => {}
            ConversationAction::Ask(request) => {
                debug!(request_id = %request.id, "spawning ask request");
                spawn_request(&client, request, tx.clone());
            }
            ConversationAction::Exit => break,
        }
    }

    if manager.pending().is_waiting() {
        info!(pending = manager.pending().count(), "exiting with requests in flight");
    }
    info!("chat closed");
    Ok(())
}
