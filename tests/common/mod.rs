#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chat_widget::{
    copy::WidgetCopy,
    error::{StoreError, WebhookError},
    message::{RequestPayload, ResponsePayload},
    services::{
        markdown::CmarkRenderer,
        session_store::{KeyValueStore, MemoryStore},
        webhook::WebhookClient,
        widget::ChatWidget,
    },
};
use tokio::sync::Notify;

#[derive(Clone)]
pub enum Outcome {
    Reply(ResponsePayload),
    Status(u16),
    BadBody,
}

/// Webhook double that answers every request with the same outcome and
/// remembers what it was sent. With a gate, each request waits for a
/// `notify_one` before answering.
pub struct ScriptedWebhook {
    outcome: Outcome,
    gate: Option<Arc<Notify>>,
    pub requests: Mutex<Vec<RequestPayload>>,
}

impl ScriptedWebhook {
    pub fn new(outcome: Outcome) -> Self {
        Self { outcome, gate: None, requests: Mutex::new(Vec::new()) }
    }

    pub fn gated(outcome: Outcome, gate: Arc<Notify>) -> Self {
        Self { outcome, gate: Some(gate), requests: Mutex::new(Vec::new()) }
    }

    pub fn replying(output: &str) -> Self {
        Self::new(Outcome::Reply(list_reply(output)))
    }

    pub fn requests(&self) -> Vec<RequestPayload> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookClient for ScriptedWebhook {
    async fn send(&self, payload: &RequestPayload) -> Result<ResponsePayload, WebhookError> {
        self.requests.lock().unwrap().push(payload.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.outcome {
            Outcome::Reply(reply) => Ok(reply.clone()),
            Outcome::Status(code) => Err(WebhookError::Status(
                reqwest::StatusCode::from_u16(*code).unwrap(),
            )),
            Outcome::BadBody => Err(serde_json::from_str::<ResponsePayload>("<html>oops</html>")
                .unwrap_err()
                .into()),
        }
    }
}

pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Poisoned)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Poisoned)
    }
}

pub fn list_reply(output: &str) -> ResponsePayload {
    serde_json::from_value(serde_json::json!([{ "output": output }])).unwrap()
}

pub fn widget_with(client: Arc<ScriptedWebhook>) -> (ChatWidget, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let widget = ChatWidget::new(
        store.clone(),
        client,
        Arc::new(CmarkRenderer::trusted()),
        WidgetCopy::spanish(),
    );
    (widget, store)
}
