pub mod config;
pub mod copy;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
