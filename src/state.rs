// src/state.rs
use std::sync::Arc;

use tera::Tera;

use crate::{
    config::Config,
    copy::WidgetCopy,
    error::StartupError,
    routes::page::page_templates,
    services::{
        markdown::CmarkRenderer,
        session_store::FileStore,
        webhook::HttpWebhook,
        widget::ChatWidget,
    },
};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub widget: ChatWidget,
    pub config: Config,
    pub tera: Tera,
}

impl AppState {
    pub fn new(config: Config, widget: ChatWidget) -> Result<Self, StartupError> {
        let tera = page_templates()?;
        Ok(Self { widget, config, tera })
    }

    /// Wires the production capabilities: file-backed session store, HTTP
    /// webhook and the pulldown-cmark renderer.
    pub fn from_config(config: Config) -> Result<Self, StartupError> {
        let store = FileStore::open(&config.session_store_path)?;
        let widget = ChatWidget::new(
            Arc::new(store),
            Arc::new(HttpWebhook::new(config.webhook_url.clone())),
            Arc::new(CmarkRenderer::new(config.raw_html)),
            WidgetCopy::for_language(config.language),
        );
        Self::new(config, widget)
    }
}
