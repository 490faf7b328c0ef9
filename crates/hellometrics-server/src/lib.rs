//! hellometrics server library entry.
//!
//! Wires the metrics registry into two HTTP listeners: a business listener
//! serving `/hello` (which counts every call) and a scrape listener serving
//! `/metrics`. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod logging;
pub mod ops;
pub mod router;
pub mod server;
pub mod services;
