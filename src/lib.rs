//! Riskbook - an HTTP/JSON service for tracking risk records.
//!
//! This library provides the pieces the `riskbook` binary wires together:
//! the risk data model, an in-memory store behind the [`storage::RiskStore`]
//! trait, and the axum server that exposes the store under `/v1`.

pub mod cli;
pub mod config;
pub mod models;
pub mod server;
pub mod storage;

/// Library-level error type for riskbook operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid listen address: {0}")]
    ListenAddr(#[from] std::net::AddrParseError),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type alias for riskbook operations.
pub type Result<T> = std::result::Result<T, Error>;
