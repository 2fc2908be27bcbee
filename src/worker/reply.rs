use std::sync::Arc;

use futures::FutureExt;
use tracing::{Instrument, error, info, info_span};

use super::executor::BackgroundTask;
use crate::ai::CompletionApi;
use crate::ai::prompt_builder::{GENERATION_FALLBACK, build_prompt, error_reply, render_history};
use crate::core::models::MentionEvent;
use crate::errors::BotError;
use crate::slack::{ChatApi, HISTORY_LIMIT};

/// Fetches history, asks the model and returns the text to post.
///
/// # Errors
///
/// Returns an error if the history fetch or the completion request fails.
pub async fn compose_answer(
    chat: &dyn ChatApi,
    completion: &dyn CompletionApi,
    mention: &MentionEvent,
) -> Result<String, BotError> {
    let history = chat
        .recent_messages(&mention.channel_id, HISTORY_LIMIT)
        .await?;
    let context = render_history(&history);
    let prompt = build_prompt(&context, &mention.text);

    let answer = completion.generate(&prompt).await?;
    Ok(answer.unwrap_or_else(|| GENERATION_FALLBACK.to_string()))
}

/// Runs the whole reply sequence for one mention.
///
/// Every failure ends here: it is logged and reported back to the channel
/// once. Nothing is returned to the caller.
pub async fn run_reply_workflow(
    chat: &dyn ChatApi,
    completion: &dyn CompletionApi,
    mention: &MentionEvent,
) {
    let outcome = match compose_answer(chat, completion, mention).await {
        Ok(answer) => chat.post_message(&mention.channel_id, &answer).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => info!(channel_id = %mention.channel_id, "Reply posted"),
        Err(e) => {
            error!(channel_id = %mention.channel_id, "Error: {}", e);
            if let Err(post_err) = chat
                .post_message(&mention.channel_id, &error_reply(&e))
                .await
            {
                error!(
                    channel_id = %mention.channel_id,
                    "Failed to post error reply: {}", post_err
                );
            }
        }
    }
}

/// Packages the reply workflow as a detached task owning its dependencies.
#[must_use]
pub fn reply_task(
    chat: Arc<dyn ChatApi>,
    completion: Arc<dyn CompletionApi>,
    mention: MentionEvent,
) -> BackgroundTask {
    let span = info_span!(
        "reply_workflow",
        correlation_id = %mention.correlation_id,
        channel_id = %mention.channel_id
    );

    async move { run_reply_workflow(chat.as_ref(), completion.as_ref(), &mention).await }
        .instrument(span)
        .boxed()
}
