// src/routes/mod.rs
pub mod chat;
pub mod page;

use crate::state::SharedState;
use axum::{
    Router,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use chat::{chat_handler, index_handler, send_form_handler, turns_handler};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(state: SharedState) -> Router {
    let api_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/turns", get(turns_handler))
        .layer(CorsLayer::very_permissive());

    Router::new()
        .route("/", get(index_handler))
        .route("/send", post(send_form_handler))
        .nest("/api", api_routes)
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(&state.config.public_dir))
        .layer(middleware::from_fn_with_state(state.clone(), allowed_host_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn allowed_host_middleware(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|val| val.to_str().ok())
        .or_else(|| req.uri().host());

    let allowed = match host {
        Some(host) => state.config.host_allowed(host),
        None => state.config.allowed_hosts.is_empty(),
    };
    if !allowed {
        tracing::warn!(host = host.unwrap_or("<none>"), "rejected request for unlisted host");
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(next.run(req).await)
}
