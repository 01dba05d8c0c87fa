pub mod markdown;
pub mod session_store;
pub mod webhook;
pub mod widget;
