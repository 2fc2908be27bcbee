//! Slack API client module
//!
//! Wraps the two Web API calls the bot needs: reading recent channel history
//! and posting a reply.

use async_trait::async_trait;
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::{SlackApiChatPostMessageRequest, SlackApiConversationsHistoryRequest};
use slack_morphism::{
    SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackHistoryMessage, SlackMessageContent,
};
use tracing::{debug, warn};

use crate::core::models::HistoryMessage;
use crate::errors::BotError;

/// Number of recent messages used as conversation context.
pub const HISTORY_LIMIT: u16 = 10;

// Build the Slack client connector safely without panicking.
// If connector construction fails, store None and surface a BotError at call sites.
static SLACK_CLIENT: std::sync::LazyLock<Option<SlackHyperClient>> =
    std::sync::LazyLock::new(|| match SlackClientHyperConnector::new() {
        Ok(connector) => Some(SlackHyperClient::new(connector)),
        Err(e) => {
            warn!("Failed to create Slack HTTP connector: {}", e);
            None
        }
    });

/// Chat platform operations used by the reply workflow.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Returns up to `limit` messages, newest first, as the platform delivers them.
    async fn recent_messages(
        &self,
        channel_id: &str,
        limit: u16,
    ) -> Result<Vec<HistoryMessage>, BotError>;

    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), BotError>;
}

impl From<SlackHistoryMessage> for HistoryMessage {
    fn from(message: SlackHistoryMessage) -> Self {
        Self {
            from_bot: message.sender.bot_id.is_some(),
            text: message.content.text.unwrap_or_default(),
        }
    }
}

/// Slack Web API client authenticated with the bot token.
pub struct SlackClient {
    token: SlackApiToken,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        }
    }

    fn client() -> Result<&'static SlackHyperClient, BotError> {
        SLACK_CLIENT
            .as_ref()
            .ok_or_else(|| BotError::HttpError("Slack HTTP connector not initialized".to_string()))
    }
}

#[async_trait]
impl ChatApi for SlackClient {
    async fn recent_messages(
        &self,
        channel_id: &str,
        limit: u16,
    ) -> Result<Vec<HistoryMessage>, BotError> {
        let session = Self::client()?.open_session(&self.token);

        let request = SlackApiConversationsHistoryRequest::new()
            .with_channel(SlackChannelId(channel_id.to_string()))
            .with_limit(limit);

        let result = session.conversations_history(&request).await?;
        debug!(
            channel_id,
            count = result.messages.len(),
            "Fetched conversation history"
        );

        Ok(result.messages.into_iter().map(HistoryMessage::from).collect())
    }

    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), BotError> {
        let session = Self::client()?.open_session(&self.token);

        let post_req = SlackApiChatPostMessageRequest::new(
            SlackChannelId(channel_id.to_string()),
            SlackMessageContent::new().with_text(text.to_string()),
        );

        session.chat_post_message(&post_req).await?;

        Ok(())
    }
}
