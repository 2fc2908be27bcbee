//! Event adapter - classifies an inbound Events API request and acknowledges it.
//!
//! This module handles:
//! - `url_verification` handshakes (challenge echoed back)
//! - `app_mention` events (allow-list check, reply workflow handed to the executor)
//! - everything else (plain acknowledgment)

use std::sync::Arc;

use tracing::{error, info, warn};

use super::helpers::{HttpReply, err_response, ok_ack, ok_challenge};
use super::parsing::{classify, parse_body};
use crate::ai::{CompletionApi, GeminiClient};
use crate::core::config::{AllowList, AppConfig};
use crate::core::models::InboundEvent;
use crate::errors::BotError;
use crate::slack::{ChatApi, SlackClient};
use crate::worker::{BackgroundExecutor, reply_task};

/// Everything the adapter needs, built once at startup.
pub struct AppState {
    pub allowed_channels: AllowList,
    pub chat: Arc<dyn ChatApi>,
    pub completion: Arc<dyn CompletionApi>,
    pub executor: Arc<dyn BackgroundExecutor>,
}

impl AppState {
    /// Wires the Slack and Gemini clients from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the Gemini HTTP client cannot be built.
    pub fn from_config(
        config: &AppConfig,
        executor: Arc<dyn BackgroundExecutor>,
    ) -> Result<Self, BotError> {
        Ok(Self {
            allowed_channels: config.allowed_channels.clone(),
            chat: Arc::new(SlackClient::new(config.slack_bot_token.clone())),
            completion: Arc::new(GeminiClient::new(
                config.gemini_api_key.clone(),
                &config.gemini_api_base_url,
            )?),
            executor,
        })
    }
}

/// Handles one raw request body.
///
/// Parse failures become a 500 with a JSON `error` body; every accepted
/// request is acknowledged with 200 regardless of what the reply workflow
/// later does.
#[tracing::instrument(level = "info", skip_all)]
pub async fn handle_request(state: &AppState, raw_body: &[u8]) -> HttpReply {
    match dispatch(state, raw_body).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("Failed to handle request: {}", e);
            err_response(500, &e.to_string())
        }
    }
}

async fn dispatch(state: &AppState, raw_body: &[u8]) -> Result<HttpReply, BotError> {
    let body = parse_body(raw_body)?;

    match classify(&body) {
        InboundEvent::UrlVerification { challenge } => Ok(ok_challenge(challenge)),
        InboundEvent::Mention(mention) => {
            if !state.allowed_channels.permits(&mention.channel_id) {
                info!(
                    "Skip: Channel {} is not in the allowed list.",
                    mention.channel_id
                );
                return Ok(ok_ack());
            }

            info!(
                correlation_id = %mention.correlation_id,
                "Processing in allowed channel: {}", mention.channel_id
            );
            state
                .executor
                .submit(reply_task(
                    state.chat.clone(),
                    state.completion.clone(),
                    mention,
                ))
                .await;
            Ok(ok_ack())
        }
        InboundEvent::MentionWithoutChannel => {
            warn!("app_mention event without a channel; nothing to reply to");
            Ok(ok_ack())
        }
        InboundEvent::Ignored => Ok(ok_ack()),
    }
}
