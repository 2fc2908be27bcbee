use std::env;

use crate::errors::BotError;

pub const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Channels allowed to trigger the bot, in configuration order.
///
/// An empty list places no restriction on channels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    channels: Vec<String>,
}

impl AllowList {
    /// Parses a comma separated channel list, trimming items and dropping empty ones.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let channels = raw
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ToString::to_string)
            .collect();
        Self { channels }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    #[must_use]
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// Returns true when `channel_id` may trigger a reply.
    #[must_use]
    pub fn permits(&self, channel_id: &str) -> bool {
        self.channels.is_empty() || self.channels.iter().any(|id| id == channel_id)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub gemini_api_key: String,
    pub gemini_api_base_url: String,
    pub allowed_channels: AllowList,
    pub bind_addr: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `BotError::ConfigError` when a required variable is unset.
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `BotError::ConfigError` when `SLACK_BOT_TOKEN` or `GEMINI_API_KEY`
    /// is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| BotError::ConfigError(key.to_string()))
        };

        Ok(Self {
            slack_bot_token: required("SLACK_BOT_TOKEN")?,
            gemini_api_key: required("GEMINI_API_KEY")?,
            gemini_api_base_url: lookup("GEMINI_API_BASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE_URL.to_string()),
            allowed_channels: AllowList::parse(
                &lookup("ALLOWED_CHANNEL_ID").unwrap_or_default(),
            ),
            bind_addr: lookup("BIND_ADDR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
