#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use slack_gemini_bot::BotError;
use slack_gemini_bot::ai::CompletionApi;
use slack_gemini_bot::api::AppState;
use slack_gemini_bot::core::config::AllowList;
use slack_gemini_bot::core::models::HistoryMessage;
use slack_gemini_bot::slack::ChatApi;
use slack_gemini_bot::worker::{BackgroundExecutor, InlineExecutor};

/// Records every Slack call and serves a canned history.
#[derive(Default)]
pub struct FakeChat {
    pub history: Vec<HistoryMessage>,
    pub fail_history: bool,
    pub fail_posts: bool,
    pub history_calls: Mutex<Vec<(String, u16)>>,
    pub posts: Mutex<Vec<(String, String)>>,
}

impl FakeChat {
    pub fn with_history(history: Vec<HistoryMessage>) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    pub fn history_calls(&self) -> Vec<(String, u16)> {
        self.history_calls.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<(String, String)> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatApi for FakeChat {
    async fn recent_messages(
        &self,
        channel_id: &str,
        limit: u16,
    ) -> Result<Vec<HistoryMessage>, BotError> {
        self.history_calls
            .lock()
            .unwrap()
            .push((channel_id.to_string(), limit));
        if self.fail_history {
            return Err(BotError::ApiError("channel_not_found".to_string()));
        }
        Ok(self.history.clone())
    }

    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), BotError> {
        self.posts
            .lock()
            .unwrap()
            .push((channel_id.to_string(), text.to_string()));
        if self.fail_posts {
            return Err(BotError::ApiError("not_in_channel".to_string()));
        }
        Ok(())
    }
}

/// Returns a fixed completion outcome and keeps the prompts it was given.
pub struct FakeCompletion {
    pub outcome: Box<dyn Fn() -> Result<Option<String>, BotError> + Send + Sync>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeCompletion {
    pub fn answering(text: &str) -> Self {
        let text = text.to_string();
        Self {
            outcome: Box::new(move || Ok(Some(text.clone()))),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self {
            outcome: Box::new(|| Ok(None)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(detail: &str) -> Self {
        let detail = detail.to_string();
        Self {
            outcome: Box::new(move || Err(BotError::GeminiError(detail.clone()))),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionApi for FakeCompletion {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, BotError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.outcome)()
    }
}

pub fn state_with(
    allowed: &str,
    chat: Arc<FakeChat>,
    completion: Arc<FakeCompletion>,
) -> AppState {
    state_with_executor(allowed, chat, completion, Arc::new(InlineExecutor))
}

pub fn state_with_executor(
    allowed: &str,
    chat: Arc<FakeChat>,
    completion: Arc<FakeCompletion>,
    executor: Arc<dyn BackgroundExecutor>,
) -> AppState {
    AppState {
        allowed_channels: AllowList::parse(allowed),
        chat,
        completion,
        executor,
    }
}

pub fn mention_body(channel: &str, text: &str) -> Vec<u8> {
    serde_json::json!({
        "type": "event_callback",
        "event": {"type": "app_mention", "channel": channel, "text": text, "user": "U1"}
    })
    .to_string()
    .into_bytes()
}
