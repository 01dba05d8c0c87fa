// src/services/widget.rs
use std::{
    fmt::Debug,
    sync::{Arc, Weak},
};

use thiserror::Error;
use tokio::{sync::RwLock, task::JoinHandle};

use crate::{
    copy::WidgetCopy,
    error::ExchangeError,
    message::{RenderedTurn, RequestPayload, Turn, WidgetSnapshot},
    services::{
        markdown::MarkdownRenderer,
        session_store::{KeyValueStore, get_or_create_session_id},
        webhook::WebhookClient,
    },
};

/// Why a submit did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("message is blank")]
    BlankInput,
    #[error("a message is already being sent")]
    Busy,
}

#[derive(Debug)]
struct WidgetState {
    turns: Vec<Turn>,
    input: String,
    in_flight: bool,
}

/// A single chat window: turns, the input field and the in-flight flag.
pub struct ChatWidget {
    state: Arc<RwLock<WidgetState>>,
    store: Arc<dyn KeyValueStore>,
    client: Arc<dyn WebhookClient>,
    renderer: Arc<dyn MarkdownRenderer>,
    copy: WidgetCopy,
}

impl Debug for ChatWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatWidget")
            .field("language", &self.copy.language)
            .finish()
    }
}

impl ChatWidget {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        client: Arc<dyn WebhookClient>,
        renderer: Arc<dyn MarkdownRenderer>,
        copy: WidgetCopy,
    ) -> Self {
        let state = WidgetState {
            turns: vec![Turn::bot(copy.welcome.clone())],
            input: String::new(),
            in_flight: false,
        };
        Self {
            state: Arc::new(RwLock::new(state)),
            store,
            client,
            renderer,
            copy,
        }
    }

    pub fn copy(&self) -> &WidgetCopy {
        &self.copy
    }

    /// Replaces the input text. Ignored while a message is being sent, the
    /// same way the disabled input field takes no typing.
    pub async fn set_input(&self, text: impl Into<String>) {
        let mut guard = self.state.write().await;
        if !guard.in_flight {
            guard.input = text.into();
        }
    }

    pub async fn snapshot(&self) -> WidgetSnapshot {
        let guard = self.state.read().await;
        WidgetSnapshot {
            turns: guard.turns.clone(),
            input: guard.input.clone(),
            in_flight: guard.in_flight,
        }
    }

    pub async fn render_turns(&self) -> Vec<RenderedTurn> {
        let turns = self.state.read().await.turns.clone();
        turns
            .iter()
            .map(|turn| RenderedTurn {
                role: turn.role,
                html: self.renderer.render(&turn.content),
            })
            .collect()
    }

    /// Appends the user turn for the current input and marks the widget busy.
    /// The returned reply must be resolved to finish the exchange; until then
    /// every other submit is rejected as busy.
    pub async fn begin_submit(&self) -> Result<PendingReply, Rejection> {
        self.begin(None).await
    }

    /// Like [`begin_submit`](Self::begin_submit) but first replaces the input
    /// with `text`, under the same lock. A busy widget keeps its input.
    pub async fn begin_submit_text(&self, text: impl Into<String>) -> Result<PendingReply, Rejection> {
        self.begin(Some(text.into())).await
    }

    /// Submits the current input and waits for the bot turn. Once the user
    /// turn is appended the exchange runs on its own task, so dropping this
    /// future does not leave the widget busy.
    pub async fn submit(&self) -> Result<(), Rejection> {
        let pending = self.begin_submit().await?;
        finish(tokio::spawn(pending.resolve())).await;
        Ok(())
    }

    pub async fn submit_text(&self, text: impl Into<String>) -> Result<(), Rejection> {
        let pending = self.begin_submit_text(text).await?;
        finish(tokio::spawn(pending.resolve())).await;
        Ok(())
    }

    /// Starts a submit and finishes it on a background task.
    pub async fn spawn_submit_text(
        &self,
        text: impl Into<String>,
    ) -> Result<JoinHandle<Option<Turn>>, Rejection> {
        let pending = self.begin_submit_text(text).await?;
        Ok(tokio::spawn(pending.resolve()))
    }

    async fn begin(&self, text: Option<String>) -> Result<PendingReply, Rejection> {
        let mut guard = self.state.write().await;
        if guard.in_flight {
            return Err(Rejection::Busy);
        }
        if let Some(text) = text {
            guard.input = text;
        }
        if guard.input.trim().is_empty() {
            return Err(Rejection::BlankInput);
        }

        let chat_input = std::mem::take(&mut guard.input);
        guard.turns.push(Turn::user(chat_input.clone()));
        guard.in_flight = true;
        tracing::debug!(turns = guard.turns.len(), "submitting chat message");

        Ok(PendingReply {
            state: Arc::downgrade(&self.state),
            store: Arc::clone(&self.store),
            client: Arc::clone(&self.client),
            error_message: self.copy.error.clone(),
            chat_input,
        })
    }
}

async fn finish(handle: JoinHandle<Option<Turn>>) {
    if let Err(e) = handle.await {
        tracing::error!(error = %e, "chat reply task failed");
    }
}

/// The second half of a submit: the webhook exchange and the bot turn.
pub struct PendingReply {
    state: Weak<RwLock<WidgetState>>,
    store: Arc<dyn KeyValueStore>,
    client: Arc<dyn WebhookClient>,
    error_message: String,
    chat_input: String,
}

impl PendingReply {
    pub fn chat_input(&self) -> &str {
        &self.chat_input
    }

    /// Runs the exchange and appends the bot turn. Returns `None` when the
    /// widget was dropped in the meantime and nothing was appended.
    pub async fn resolve(self) -> Option<Turn> {
        let content = match self.exchange().await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(error = %e, "chat exchange failed");
                self.error_message.clone()
            }
        };

        let Some(state) = self.state.upgrade() else {
            tracing::debug!("widget dropped before reply arrived, discarding");
            return None;
        };
        let turn = Turn::bot(content);
        let mut guard = state.write().await;
        guard.turns.push(turn.clone());
        guard.in_flight = false;
        Some(turn)
    }

    async fn exchange(&self) -> Result<String, ExchangeError> {
        let session_id = get_or_create_session_id(self.store.as_ref())?;
        let payload = RequestPayload::send_message(session_id, self.chat_input.as_str());
        let response = self.client.send(&payload).await?;
        Ok(response.into_output())
    }
}
