// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }
}

/// One message in the conversation. Never edited after it is appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self { role: Role::Bot, content: content.into() }
    }
}

pub const SEND_MESSAGE_ACTION: &str = "sendMessage";

/// Body element posted to the webhook. The webhook expects it wrapped in a
/// one-element array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub session_id: String,
    pub action: String,
    pub chat_input: String,
}

impl RequestPayload {
    pub fn send_message(session_id: impl Into<String>, chat_input: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            action: SEND_MESSAGE_ACTION.to_string(),
            chat_input: chat_input.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct OutputRecord {
    #[serde(default)]
    pub output: Option<String>,
}

/// The two shapes the webhook is known to answer with.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    List(Vec<OutputRecord>),
    Single(OutputRecord),
}

impl ResponsePayload {
    /// Reply text carried by the payload. Only the first list element counts;
    /// a missing `output` (or an empty list) is an empty reply.
    pub fn into_output(self) -> String {
        let record = match self {
            ResponsePayload::List(records) => records.into_iter().next(),
            ResponsePayload::Single(record) => Some(record),
        };
        record.and_then(|r| r.output).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WidgetSnapshot {
    pub turns: Vec<Turn>,
    pub input: String,
    pub in_flight: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTurn {
    pub role: Role,
    pub html: String,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct TurnsResponse {
    pub turns: Vec<RenderedTurn>,
    pub in_flight: bool,
}
