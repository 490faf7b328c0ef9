//! Shared error type across hellometrics crates.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Stable error codes used in logs and HTTP error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Duplicate or malformed metric name.
    Registration,
    /// Non-positive increment.
    InvalidAmount,
    /// Counter would wrap past `u64::MAX`.
    CounterOverflow,
    /// A listener could not acquire its address.
    ListenerBind,
    /// Log file could not be created.
    LogSink,
    /// Invalid environment value.
    Config,
    /// Internal server error.
    Internal,
    /// No route for the requested path. HTTP-only, never a `HelloError`.
    NotFound,
}

impl ErrorCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Registration => "REGISTRATION",
            ErrorCode::InvalidAmount => "INVALID_AMOUNT",
            ErrorCode::CounterOverflow => "COUNTER_OVERFLOW",
            ErrorCode::ListenerBind => "LISTENER_BIND",
            ErrorCode::LogSink => "LOG_SINK",
            ErrorCode::Config => "CONFIG",
            ErrorCode::Internal => "INTERNAL",
            ErrorCode::NotFound => "NOT_FOUND",
        }
    }
}

/// Which of the two listeners an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerRole {
    Business,
    Scrape,
}

impl std::fmt::Display for ListenerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerRole::Business => f.write_str("business"),
            ListenerRole::Scrape => f.write_str("scrape"),
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HelloError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum HelloError {
    #[error("registration failed: {0}")]
    Registration(String),
    #[error("invalid increment amount: {0} (must be > 0)")]
    InvalidAmount(i64),
    #[error("counter {name} would overflow")]
    CounterOverflow { name: String },
    #[error("{role} listener failed to bind {addr}: {source}")]
    ListenerBind {
        role: ListenerRole,
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("create log file {} failed: {source}", .path.display())]
    LogSink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl HelloError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            HelloError::Registration(_) => ErrorCode::Registration,
            HelloError::InvalidAmount(_) => ErrorCode::InvalidAmount,
            HelloError::CounterOverflow { .. } => ErrorCode::CounterOverflow,
            HelloError::ListenerBind { .. } => ErrorCode::ListenerBind,
            HelloError::LogSink { .. } => ErrorCode::LogSink,
            HelloError::Config(_) => ErrorCode::Config,
            HelloError::Internal(_) => ErrorCode::Internal,
        }
    }
}
