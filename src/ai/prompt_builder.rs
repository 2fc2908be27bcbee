use crate::core::models::HistoryMessage;

/// Reply text used when the model response carries no candidate text.
pub const GENERATION_FALLBACK: &str = "回答生成エラー";

/// Prefix of the message posted when the reply workflow fails.
pub const ERROR_REPLY_PREFIX: &str = "エラー: ";

const INSTRUCTION: &str = "あなたはアシスタントです。以下の履歴を元に質問に答えてください。";

/// Renders history delivered newest first as chronological `Model:`/`User:` lines.
#[must_use]
pub fn render_history(messages_newest_first: &[HistoryMessage]) -> String {
    messages_newest_first
        .iter()
        .rev()
        .map(|m| {
            let role = if m.from_bot { "Model" } else { "User" };
            format!("{role}: {}", m.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn build_prompt(history: &str, question: &str) -> String {
    format!("\n{INSTRUCTION}\n[履歴]\n{history}\n[質問]\n{question}\n")
}

#[must_use]
pub fn error_reply(error: &impl std::fmt::Display) -> String {
    format!("{ERROR_REPLY_PREFIX}{error}")
}
