// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failure talking to the webhook endpoint.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("request to webhook failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("webhook answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected webhook response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session store file is not a JSON object: {0}")]
    Format(#[source] serde_json::Error),

    #[error("session store lock poisoned")]
    Poisoned,
}

/// Anything that keeps a submitted turn from getting a real reply.
/// Never leaves the widget: it becomes the error bot turn.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("could not resolve session id: {0}")]
    Session(#[from] StoreError),

    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("page template failed to load: {0}")]
    Template(#[from] tera::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("a message is already being sent")]
    Busy,

    #[error("page rendering failed: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Busy => StatusCode::CONFLICT,
            AppError::Template(e) => {
                tracing::error!(error = %e, "template error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
