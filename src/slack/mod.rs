//! All Slack-specific functionality

pub mod client;

// Re-export main types for convenience
pub use client::{ChatApi, HISTORY_LIMIT, SlackClient};
