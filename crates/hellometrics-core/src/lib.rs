//! hellometrics core: the metrics registry and the error surface shared by
//! the server and facade crates.
//!
//! This crate carries no transport or runtime dependencies. Counters are
//! plain atomics behind cheap clonable handles, so request handlers never see
//! a lock.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here; every fallible
//! path surfaces as `HelloError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{ErrorCode, HelloError, ListenerRole, Result};
pub use metrics::{Counter, Registry};
