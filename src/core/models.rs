use serde_json::Value;
use uuid::Uuid;

/// An `app_mention` that passed the bot filter and should be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionEvent {
    pub correlation_id: String,
    pub channel_id: String,
    pub text: String,
}

impl MentionEvent {
    #[must_use]
    pub fn new(channel_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
            channel_id: channel_id.into(),
            text: text.into(),
        }
    }
}

/// One entry of the conversation history window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryMessage {
    pub text: String,
    pub from_bot: bool,
}

impl HistoryMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from_bot: false,
        }
    }

    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from_bot: true,
        }
    }
}

/// Classification of an inbound Events API payload.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    /// Endpoint ownership handshake; the challenge is echoed back verbatim
    /// and left out of the reply when the request carried none.
    UrlVerification { challenge: Option<Value> },
    /// A human mention of the bot.
    Mention(MentionEvent),
    /// An `app_mention` without a usable channel.
    MentionWithoutChannel,
    /// Anything else, acknowledged without side effects.
    Ignored,
}
