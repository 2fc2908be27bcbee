//! Response type shared by both hosts and the builders that produce it.
//!
//! Handlers return an [`HttpReply`]; the Lambda host turns it into an API
//! Gateway proxy response and the server host into an axum response.

use serde_json::{Value, json};

pub const ACK_BODY: &str = "OK";

#[derive(Debug, Clone, PartialEq)]
pub enum ReplyBody {
    Text(String),
    Json(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl HttpReply {
    #[must_use]
    pub fn content_type(&self) -> &'static str {
        match self.body {
            ReplyBody::Text(_) => "text/plain;charset=UTF-8",
            ReplyBody::Json(_) => "application/json",
        }
    }

    #[must_use]
    pub fn body_string(&self) -> String {
        match &self.body {
            ReplyBody::Text(text) => text.clone(),
            ReplyBody::Json(value) => value.to_string(),
        }
    }

    /// Shapes the reply as an API Gateway / function URL proxy response.
    #[must_use]
    pub fn into_proxy_response(self) -> Value {
        json!({
            "statusCode": self.status,
            "headers": { "Content-Type": self.content_type() },
            "body": self.body_string(),
        })
    }
}

/// Returns a 200 plain-text `OK` acknowledgment.
#[must_use]
pub fn ok_ack() -> HttpReply {
    HttpReply {
        status: 200,
        body: ReplyBody::Text(ACK_BODY.to_string()),
    }
}

/// Returns a 200 response echoing the verification challenge.
#[must_use]
pub fn ok_challenge(challenge: Option<Value>) -> HttpReply {
    let body = match challenge {
        Some(challenge) => json!({ "challenge": challenge }),
        None => json!({}),
    };
    HttpReply {
        status: 200,
        body: ReplyBody::Json(body),
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> HttpReply {
    HttpReply {
        status: status_code,
        body: ReplyBody::Json(json!({ "error": message })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_response_carries_status_type_and_body() {
        let response = ok_challenge(Some(json!("abc"))).into_proxy_response();
        assert_eq!(response["statusCode"], 200);
        assert_eq!(response["headers"]["Content-Type"], "application/json");
        assert_eq!(response["body"], r#"{"challenge":"abc"}"#);

        let response = ok_ack().into_proxy_response();
        assert_eq!(response["body"], "OK");
        assert_eq!(response["headers"]["Content-Type"], "text/plain;charset=UTF-8");
    }

    #[test]
    fn challenge_key_is_omitted_when_absent() {
        assert_eq!(ok_challenge(None).body_string(), "{}");
        assert_eq!(
            ok_challenge(Some(Value::Null)).body_string(),
            r#"{"challenge":null}"#
        );
    }

    #[test]
    fn err_response_wraps_message() {
        let reply = err_response(500, "boom");
        assert_eq!(reply.status, 500);
        assert_eq!(reply.body, ReplyBody::Json(json!({"error": "boom"})));
    }
}
