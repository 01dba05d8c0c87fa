use axum::{
    Form, Json,
    extract::State,
    response::{Html, Redirect},
};
use serde::Deserialize;

use crate::{
    error::AppError,
    message::{ChatRequest, TurnsResponse},
    routes::page::{PageView, render_page},
    services::widget::Rejection,
    state::SharedState,
};

#[derive(Deserialize)]
pub struct SendForm {
    #[serde(default)]
    pub message: String,
}

pub async fn index_handler(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let widget = &state.widget;
    let snapshot = widget.snapshot().await;
    let turns = widget.render_turns().await;

    let view = PageView::new(
        widget.copy(),
        &turns,
        &snapshot.input,
        snapshot.in_flight,
        state.config.site_url.as_deref(),
    );
    Ok(Html(render_page(&state.tera, &view)?))
}

// Form submit: the reply is fetched in the background and the page polls
// until it lands.
pub async fn send_form_handler(
    State(state): State<SharedState>,
    Form(form): Form<SendForm>,
) -> Redirect {
    if let Err(rejection) = state.widget.spawn_submit_text(form.message).await {
        tracing::debug!(%rejection, "form submit ignored");
    }
    Redirect::to("/#end")
}

pub async fn turns_handler(State(state): State<SharedState>) -> Json<TurnsResponse> {
    Json(turns_response(&state).await)
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<TurnsResponse>, AppError> {
    state
        .widget
        .submit_text(payload.message)
        .await
        .map_err(|rejection| match rejection {
            Rejection::BlankInput => AppError::BadRequest("Message cannot be empty".to_string()),
            Rejection::Busy => AppError::Busy,
        })?;

    Ok(Json(turns_response(&state).await))
}

async fn turns_response(state: &SharedState) -> TurnsResponse {
    let in_flight = state.widget.snapshot().await.in_flight;
    TurnsResponse {
        turns: state.widget.render_turns().await,
        in_flight,
    }
}
