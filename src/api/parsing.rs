use serde_json::Value;

use crate::core::models::{InboundEvent, MentionEvent};
use crate::errors::BotError;

pub const URL_VERIFICATION: &str = "url_verification";
pub const APP_MENTION: &str = "app_mention";

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Parses a raw request body as JSON.
///
/// Arrays and scalars are accepted and later classified as ignored events;
/// only a `null` document has no fields to read.
///
/// # Errors
///
/// Returns `BotError::ParseError` for invalid JSON or a `null` document.
pub fn parse_body(raw: &[u8]) -> Result<Value, BotError> {
    let body: Value = serde_json::from_slice(raw)?;
    if body.is_null() {
        return Err(BotError::ParseError("request body is null".to_string()));
    }
    Ok(body)
}

/// A `bot_id` counts only when it carries a value; `null`, `false`, `0` and `""` do not.
fn has_bot_id(event: &Value) -> bool {
    match event.get("bot_id") {
        None | Some(Value::Null | Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(_) => true,
    }
}

#[must_use]
pub fn classify(body: &Value) -> InboundEvent {
    if v_str(body, &["type"]) == Some(URL_VERIFICATION) {
        return InboundEvent::UrlVerification {
            challenge: body.get("challenge").cloned(),
        };
    }

    let Some(event) = body.get("event") else {
        return InboundEvent::Ignored;
    };

    if v_str(event, &["type"]) != Some(APP_MENTION) || has_bot_id(event) {
        return InboundEvent::Ignored;
    }

    match v_str(event, &["channel"]) {
        Some(channel) if !channel.is_empty() => InboundEvent::Mention(MentionEvent::new(
            channel,
            v_str(event, &["text"]).unwrap_or_default(),
        )),
        _ => InboundEvent::MentionWithoutChannel,
    }
}
