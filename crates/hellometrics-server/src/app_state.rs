//! Shared application state.
//!
//! The registry is built by the caller and handed in; nothing here reaches
//! for a global. Construction declares the `hello` counter and the scrape
//! handler's own request counter, and fails fast if either name is taken.

use std::sync::Arc;

use hellometrics_core::error::Result;
use hellometrics_core::metrics::{Counter, Registry};

pub const HELLO_COUNTER: &str = "hello";
pub const HELLO_UNIT: &str = "time(s)";
pub const HELLO_DESCRIPTION: &str = "a counter of hello api";

pub const SCRAPE_COUNTER: &str = "metrics_handler_requests_total";
pub const SCRAPE_DESCRIPTION: &str = "Total number of scrapes served by the metrics handler.";

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    registry: Arc<Registry>,
    hello: Counter,
    scrapes: Counter,
}

impl AppState {
    pub fn new(registry: Arc<Registry>) -> Result<Self> {
        let hello = registry.declare_counter(HELLO_COUNTER, HELLO_UNIT, HELLO_DESCRIPTION)?;
        let scrapes = registry.declare_counter(SCRAPE_COUNTER, "", SCRAPE_DESCRIPTION)?;
        Ok(Self {
            inner: Arc::new(AppStateInner { registry, hello, scrapes }),
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn hello_counter(&self) -> &Counter {
        &self.inner.hello
    }

    pub fn scrape_counter(&self) -> &Counter {
        &self.inner.scrapes
    }
}
