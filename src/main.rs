use anyhow::Result;
use clap::{Parser, Subcommand};
use lexchat::config::{Config, ConfigOverrides};
use lexchat::{commands, logging, ui};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lexchat")]
#[command(version)]
#[command(about = "Chat with the legal assistant from your terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Backend base URL, e.g. http://127.0.0.1:5001
    #[arg(long, global = true)]
    url: Option<String>,

    /// Path to config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question and print the answer
    Ask {
        /// The question
        #[arg(required = true)]
        query: Vec<String>,

        /// Print without colours
        #[arg(long)]
        no_color: bool,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(ConfigOverrides {
        server_url: cli.url,
        timeout_ms: cli.timeout_ms,
    });

    match cli.command {
        None => {
            logging::init_file(&config.log_file, cli.verbose)?;
            ui::run_tui(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Ask { query, no_color }) => {
            logging::init_stderr(cli.verbose);
            let answered = commands::ask_once(&config, &query.join(" "), !no_color).await?;
            Ok(if answered { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Some(Commands::Config) => {
            logging::init_stderr(cli.verbose);
            commands::show_config(&config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
