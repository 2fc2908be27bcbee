mod common;

use common::{FakeChat, FakeCompletion};
use slack_gemini_bot::core::models::{HistoryMessage, MentionEvent};
use slack_gemini_bot::worker::{compose_answer, run_reply_workflow};

/// Ten messages as Slack returns them: newest first, alternating origin.
fn alternating_history() -> Vec<HistoryMessage> {
    (0..10)
        .rev()
        .map(|i| {
            if i % 2 == 0 {
                HistoryMessage::user(format!("message {i}"))
            } else {
                HistoryMessage::bot(format!("message {i}"))
            }
        })
        .collect()
}

#[tokio::test]
async fn prompt_carries_history_in_chronological_order() {
    let chat = FakeChat::with_history(alternating_history());
    let completion = FakeCompletion::answering("ok");
    let mention = MentionEvent::new("C1", "<@U0BOT> what happened?");

    compose_answer(&chat, &completion, &mention).await.unwrap();

    let prompts = completion.prompts();
    assert_eq!(prompts.len(), 1);
    let expected_history = (0..10)
        .map(|i| {
            let role = if i % 2 == 0 { "User" } else { "Model" };
            format!("{role}: message {i}")
        })
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(
        prompts[0],
        format!(
            "\nあなたはアシスタントです。以下の履歴を元に質問に答えてください。\n[履歴]\n{expected_history}\n[質問]\n<@U0BOT> what happened?\n"
        )
    );
}

#[tokio::test]
async fn missing_candidate_text_posts_fallback() {
    let chat = FakeChat::default();
    let completion = FakeCompletion::empty();
    let mention = MentionEvent::new("C1", "question");

    run_reply_workflow(&chat, &completion, &mention).await;

    assert_eq!(chat.posts(), vec![("C1".to_string(), "回答生成エラー".to_string())]);
}

#[tokio::test]
async fn history_failure_posts_error_reply_without_calling_model() {
    let chat = FakeChat {
        fail_history: true,
        ..FakeChat::default()
    };
    let completion = FakeCompletion::answering("unused");
    let mention = MentionEvent::new("C9", "question");

    run_reply_workflow(&chat, &completion, &mention).await;

    assert!(completion.prompts().is_empty());
    assert_eq!(
        chat.posts(),
        vec![(
            "C9".to_string(),
            "エラー: Failed to access Slack API: channel_not_found".to_string()
        )]
    );
}

#[tokio::test]
async fn gemini_error_detail_reaches_the_channel() {
    let chat = FakeChat::default();
    let completion = FakeCompletion::failing(r#"{"error":{"code":400,"message":"API key not valid"}}"#);
    let mention = MentionEvent::new("C1", "question");

    run_reply_workflow(&chat, &completion, &mention).await;

    assert_eq!(
        chat.posts(),
        vec![(
            "C1".to_string(),
            r#"エラー: Gemini API Error: {"error":{"code":400,"message":"API key not valid"}}"#
                .to_string()
        )]
    );
}

#[tokio::test]
async fn failed_answer_post_is_followed_by_one_error_reply_attempt() {
    let chat = FakeChat {
        fail_posts: true,
        ..FakeChat::default()
    };
    let completion = FakeCompletion::answering("answer");
    let mention = MentionEvent::new("C1", "question");

    run_reply_workflow(&chat, &completion, &mention).await;

    let posts = chat.posts();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].1, "answer");
    assert_eq!(posts[1].1, "エラー: Failed to access Slack API: not_in_channel");
}
