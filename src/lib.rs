//! Slack Gemini Bot - answers Slack mentions with Gemini using recent channel history.
//!
//! The bot receives Slack Events API callbacks, acknowledges them immediately and
//! replies in the mentioning channel from a background task:
//! 1. Fetch the last 10 messages of the channel
//! 2. Build a prompt from that history and the mention text
//! 3. Ask Gemini (`generateContent`) for an answer
//! 4. Post the answer (or the error) back to the channel
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda (`lambda_runtime`) or a standalone `axum` server as the host
//! - slack-morphism for Slack API interactions
//! - reqwest for the Gemini API
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use slack_gemini_bot::api::{AppState, handle_request};
//! use slack_gemini_bot::core::config::AppConfig;
//! use slack_gemini_bot::worker::InlineExecutor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     slack_gemini_bot::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let state = AppState::from_config(&config, Arc::new(InlineExecutor))?;
//!
//!     let reply = handle_request(&state, br#"{"type":"url_verification","challenge":"c"}"#).await;
//!     println!("{} {}", reply.status, reply.body_string());
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod slack;
pub mod worker;

pub use errors::BotError;

/// Configure structured logging with JSON format.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; only the first call installs the subscriber.
///
/// # Example
///
/// ```
/// slack_gemini_bot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
