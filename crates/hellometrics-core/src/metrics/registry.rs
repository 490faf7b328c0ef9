use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::exposition::render_counter;
use super::Counter;
use crate::error::{HelloError, Result};

/// Owner of every declared measurement in a process, keyed by unique name.
#[derive(Default)]
pub struct Registry {
    counters: DashMap<String, Counter>,
}

/// `[a-zA-Z_:][a-zA-Z0-9_:]*`
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new zero-valued counter and return a handle to it.
    ///
    /// Fails with [`HelloError::Registration`] when `name` is taken or is not
    /// a valid exposition metric name. An existing counter is never replaced.
    pub fn declare_counter(&self, name: &str, unit: &str, description: &str) -> Result<Counter> {
        if !is_valid_name(name) {
            return Err(HelloError::Registration(format!("invalid metric name: {name:?}")));
        }
        match self.counters.entry(name.to_string()) {
            Entry::Occupied(_) => Err(HelloError::Registration(format!(
                "metric already declared: {name}"
            ))),
            Entry::Vacant(slot) => {
                let counter = Counter::new(name, unit, description);
                slot.insert(counter.clone());
                tracing::debug!(metric = %name, "counter declared");
                Ok(counter)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn counter(&self, name: &str) -> Option<Counter> {
        self.counters.get(name).map(|r| r.value().clone())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.counters.len()
    }

    /// Render every measurement in name order, in Prometheus text format.
    pub fn render_snapshot(&self) -> String {
        let mut counters: Vec<Counter> = self.counters.iter().map(|r| r.value().clone()).collect();
        counters.sort_by(|a, b| a.name().cmp(b.name()));

        let mut out = String::new();
        for c in &counters {
            render_counter(c, &mut out);
        }
        out
    }
}
