// src/services/webhook.rs
use async_trait::async_trait;

use crate::{
    error::WebhookError,
    message::{RequestPayload, ResponsePayload},
};

/// The remote conversational backend.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    async fn send(&self, payload: &RequestPayload) -> Result<ResponsePayload, WebhookError>;
}

/// Posts to the webhook over HTTP. No timeout and no retry: a hung request
/// keeps the turn pending until the connection resolves.
#[derive(Clone, Debug)]
pub struct HttpWebhook {
    client: reqwest::Client,
    url: String,
}

impl HttpWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WebhookClient for HttpWebhook {
    async fn send(&self, payload: &RequestPayload) -> Result<ResponsePayload, WebhookError> {
        let res = self
            .client
            .post(&self.url)
            .json(&[payload])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(WebhookError::Status(status));
        }

        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
