//! Terminal chat client for the legal assistant backend.

pub mod client;
pub mod commands;
pub mod config;
pub mod events;
pub mod logging;
pub mod prompts;
pub mod render;
pub mod ui;

pub use client::{AskClient, RequestError};
pub use config::Config;
