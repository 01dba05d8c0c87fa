// src/config.rs
use std::{env, net::SocketAddr, path::PathBuf};

use crate::{copy::Language, error::ConfigError, services::markdown::RawHtml};

pub const DEFAULT_WEBHOOK_URL: &str = "https://n8n.dkuaik.dev/webhook/chat-indava-rag";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SITE_URL: &str = "http://demo.dkuaik.dev";
pub const DEFAULT_ALLOWED_HOSTS: &str =
    "demos-chatbotragindava-aog5if-68d07a-217-196-48-210.traefik.me,localhost,127.0.0.1";

#[derive(Clone, Debug)]
pub struct Config {
    pub webhook_url: String,
    pub bind_addr: SocketAddr,
    pub site_url: Option<String>,
    /// Empty means every host is accepted.
    pub allowed_hosts: Vec<String>,
    pub session_store_path: PathBuf,
    pub public_dir: PathBuf,
    pub raw_html: RawHtml,
    pub language: Language,
}

impl Config {
    /// Reads `CHAT_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let webhook_url = get("CHAT_WEBHOOK_URL", DEFAULT_WEBHOOK_URL);
        if reqwest::Url::parse(&webhook_url).is_err() {
            return Err(invalid("CHAT_WEBHOOK_URL", webhook_url, "not an absolute URL"));
        }

        let bind = get("CHAT_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|e| invalid("CHAT_BIND_ADDR", bind.clone(), e.to_string()))?;

        let site_url = Some(get("CHAT_SITE_URL", DEFAULT_SITE_URL)).filter(|s| !s.trim().is_empty());

        let allowed_hosts = get("CHAT_ALLOWED_HOSTS", DEFAULT_ALLOWED_HOSTS)
            .split(',')
            .map(|h| h.trim().to_lowercase())
            .filter(|h| !h.is_empty())
            .collect();

        let raw = get("CHAT_RAW_HTML", "true");
        let raw_html = match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => RawHtml::PassThrough,
            "false" | "0" | "no" => RawHtml::Escape,
            _ => return Err(invalid("CHAT_RAW_HTML", raw, "expected true or false")),
        };

        let lang = get("CHAT_LANG", "es");
        let language = lang.parse::<Language>().map_err(|reason| invalid("CHAT_LANG", lang.clone(), reason))?;

        Ok(Self {
            webhook_url,
            bind_addr,
            site_url,
            allowed_hosts,
            session_store_path: PathBuf::from(get("CHAT_SESSION_STORE", "chat_session.json")),
            public_dir: PathBuf::from(get("CHAT_PUBLIC_DIR", "public")),
            raw_html,
            language,
        })
    }

    /// Whether a request for `host` (as found in the Host header) is served.
    pub fn host_allowed(&self, host: &str) -> bool {
        if self.allowed_hosts.is_empty() {
            return true;
        }
        let name = strip_port(host).to_lowercase();
        self.allowed_hosts.iter().any(|h| *h == name)
    }
}

fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        // [::1]:3000
        return rest.split(']').next().unwrap_or(rest);
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}

fn invalid(key: &'static str, value: String, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { key, value, reason: reason.into() }
}
