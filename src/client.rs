use crate::config::Config;
use crate::prompts::{DIAGNOSTIC_PREFIX, FALLBACK_RESPONSE, NO_RESPONSE_DETAIL};
use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a conversation request failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The server answered with a non-success status
    #[error("Server responded with {status}: {error}")]
    Server { status: u16, error: String },

    /// The request went out but nothing usable came back (timeout, refused connection, ...)
    #[error("{}", NO_RESPONSE_DETAIL)]
    NoResponse { reason: String },

    /// The request could not be built or sent
    #[error("{0}")]
    Local(String),
}

impl RequestError {
    /// Text for the inline error slot
    pub fn diagnostic(&self) -> String {
        format!("{}{}", DIAGNOSTIC_PREFIX, self)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RequestError::Server { .. } => "server",
            RequestError::NoResponse { .. } => "no-response",
            RequestError::Local(_) => "local",
        }
    }

    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            RequestError::Local(err.to_string())
        } else {
            RequestError::NoResponse {
                reason: err.to_string(),
            }
        }
    }
}

/// JSON body sent to the ask endpoint
#[derive(Debug, Serialize)]
struct AskPayload<'a> {
    query: &'a str,
}

/// Reply body. Either field may be missing, and neither is guaranteed to be a string.
#[derive(Debug, Default, Deserialize)]
struct AskEnvelope {
    #[serde(default)]
    response: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl AskEnvelope {
    fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    fn response_text(&self) -> Option<String> {
        value_text(self.response.as_ref())
    }

    fn error_text(&self) -> Option<String> {
        value_text(self.error.as_ref())
    }
}

fn value_text(value: Option<&serde_json::Value>) -> Option<String> {
    let text = match value? {
        serde_json::Value::Null => return None,
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}

/// HTTP client for the assistant's ask endpoint
#[derive(Clone)]
pub struct AskClient {
    client: reqwest::Client,
    server_url: String,
    endpoint: String,
}

impl AskClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            server_url: config.server_url.clone(),
            endpoint: config.endpoint.clone(),
        })
    }

    /// Full URL of the ask endpoint
    pub fn ask_url(&self) -> Result<Url, RequestError> {
        let base = self.server_url.trim_end_matches('/');
        let url = if self.endpoint.starts_with('/') {
            format!("{}{}", base, self.endpoint)
        } else {
            format!("{}/{}", base, self.endpoint)
        };
        Url::parse(&url).map_err(|e| RequestError::Local(format!("Invalid URL {url}: {e}")))
    }

    /// Send one question and return the bot's reply text
    pub async fn ask(&self, query: &str) -> Result<String, RequestError> {
        let url = self.ask_url()?;
        let started = Instant::now();

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&AskPayload { query })
            .send()
            .await
            .map_err(RequestError::from_transport)?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if status.is_success() => {
                return Err(RequestError::NoResponse {
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                warn!("Could not read error body for status {}: {}", status, e);
                String::new()
            }
        };

        debug!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "ask request finished"
        );

        let envelope = AskEnvelope::parse(&body);
        if !status.is_success() {
            return Err(RequestError::Server {
                status: status.as_u16(),
                error: envelope.error_text().unwrap_or_default(),
            });
        }

        Ok(envelope
            .response_text()
            .unwrap_or_else(|| FALLBACK_RESPONSE.to_string()))
    }
}
