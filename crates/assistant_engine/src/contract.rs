//! Request and response shapes exchanged with the crawl/chat backend.

use serde::Serialize;
use serde_json::Value;

use crate::CrawlMode;

/// Bot reply used when the backend answered with neither `response` nor `answer`.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn’t understand that.";

/// Body of `POST /crawl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_url: Option<String>,
    pub url: String,
}

impl CrawlRequest {
    /// Builds the body for the given action. The skip path never carries
    /// `extra_url`, whatever the caller passed.
    pub fn new(mode: CrawlMode, extra_url: Option<String>, url: impl Into<String>) -> Self {
        let extra_url = match mode {
            CrawlMode::WithExtraUrl => extra_url,
            CrawlMode::Skip => None,
        };
        Self {
            extra_url,
            url: url.into(),
        }
    }
}

/// Body of `POST /chat`. An absent `extra_url` is omitted, never sent as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub query: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_url: Option<String>,
}

/// Picks the reply text from a chat response body: the first truthy of
/// `response` and `answer`, otherwise [`FALLBACK_REPLY`].
pub fn coerce_reply(body: &Value) -> String {
    ["response", "answer"]
        .iter()
        .filter_map(|field| body.get(field))
        .find_map(truthy_text)
        .unwrap_or_else(|| FALLBACK_REPLY.to_string())
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_wins_over_answer() {
        let body = json!({"response": "from response", "answer": "from answer"});
        assert_eq!(coerce_reply(&body), "from response");
    }

    #[test]
    fn falsy_response_falls_through_to_answer() {
        for response in [json!(null), json!(""), json!(false), json!(0)] {
            let body = json!({"response": response, "answer": "hi there"});
            assert_eq!(coerce_reply(&body), "hi there");
        }
    }

    #[test]
    fn empty_object_yields_fallback_verbatim() {
        assert_eq!(coerce_reply(&json!({})), FALLBACK_REPLY);
        assert_eq!(coerce_reply(&json!({"answer": ""})), FALLBACK_REPLY);
        assert_eq!(coerce_reply(&json!(["not", "an", "object"])), FALLBACK_REPLY);
    }

    #[test]
    fn non_string_truthy_values_are_rendered() {
        assert_eq!(coerce_reply(&json!({"answer": 42})), "42");
    }

    #[test]
    fn skip_request_drops_extra_url() {
        let request = CrawlRequest::new(
            CrawlMode::Skip,
            Some("https://typed.example".to_string()),
            "https://active.tab",
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"url": "https://active.tab"})
        );
    }

    #[test]
    fn chat_request_omits_missing_extra_url() {
        let request = ChatRequest {
            query: "hello".to_string(),
            url: "https://x".to_string(),
            extra_url: None,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"query":"hello","url":"https://x"}"#
        );
    }
}
