//! Chat relay logic that does not depend on the browser.
//!
//! The backend contract is small: a form POST with a `message` field, answered
//! by JSON of the shape `{"reply": "..."}`. Anything that goes wrong on the way
//! collapses into one of two fixed fallback lines.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Shown when the request fails or the body is not the expected JSON.
pub const NETWORK_FALLBACK: &str = "Network issue — let's take a soft breath together.";
/// Shown when the backend answers but has nothing to say.
pub const EMPTY_REPLY_FALLBACK: &str = "Let's breathe together.";

/// Form field name the backend reads the user text from.
pub const MESSAGE_FIELD: &str = "message";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Network(String),
    #[error("chat reply could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    Me,
    Ai,
}

impl Author {
    /// CSS class applied next to `msg` on the rendered bubble.
    pub fn css_class(self) -> &'static str {
        match self {
            Author::Me => "me",
            Author::Ai => "ai",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, author: Author, text: impl Into<String>) -> &ChatMessage {
        self.messages.push(ChatMessage {
            author,
            text: text.into(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct ReplyBody {
    #[serde(default)]
    reply: Option<Value>,
}

/// Trim user input; blank input yields `None` and nothing should be sent.
pub fn prepare_message(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Decode a backend body into reply text.
///
/// `reply` is shown when it is truthy: a non-empty string (whitespace
/// included, passed through untouched), a non-zero number rendered as text,
/// or `true`. Missing, null, `""`, `0`, `false`, arrays and objects all give
/// [`EMPTY_REPLY_FALLBACK`]. A body that is not JSON is a [`ChatError::Decode`].
pub fn parse_reply(body: &str) -> Result<String, ChatError> {
    let parsed: ReplyBody = serde_json::from_str(body)?;
    let text = match parsed.reply {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Some(Value::Bool(true)) => Some("true".to_string()),
        _ => None,
    };
    Ok(text.unwrap_or_else(|| EMPTY_REPLY_FALLBACK.to_string()))
}

/// Collapse the outcome of a chat round-trip into displayable text.
pub fn reply_or_fallback(result: Result<String, ChatError>) -> String {
    match result {
        Ok(reply) => reply,
        Err(e) => {
            log::warn!("[chat] {}", e);
            NETWORK_FALLBACK.to_string()
        }
    }
}
