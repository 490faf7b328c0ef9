use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::{HelloError, Result};

struct CounterInner {
    name: String,
    unit: String,
    description: String,
    value: AtomicU64,
}

/// Handle to a monotonically increasing counter owned by a [`Registry`].
///
/// Cloning is cheap; every clone points at the same value.
///
/// [`Registry`]: crate::metrics::Registry
#[derive(Clone)]
pub struct Counter {
    inner: Arc<CounterInner>,
}

impl Counter {
    pub(crate) fn new(name: &str, unit: &str, description: &str) -> Self {
        Self {
            inner: Arc::new(CounterInner {
                name: name.to_string(),
                unit: unit.to_string(),
                description: description.to_string(),
                value: AtomicU64::new(0),
            }),
        }
    }

    /// Increment by 1.
    pub fn inc(&self) -> Result<()> {
        self.add(1)
    }

    /// Increment by `amount`.
    ///
    /// Rejects `amount <= 0` with [`HelloError::InvalidAmount`] and an
    /// increment past `u64::MAX` with [`HelloError::CounterOverflow`]; the
    /// value is left untouched in both cases.
    pub fn add(&self, amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(HelloError::InvalidAmount(amount));
        }
        let delta = amount.unsigned_abs();
        self.inner
            .value
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |cur| cur.checked_add(delta))
            .map(|_| ())
            .map_err(|_| HelloError::CounterOverflow {
                name: self.inner.name.clone(),
            })
    }

    /// Current value.
    pub fn get(&self) -> u64 {
        self.inner.value.load(Ordering::Relaxed)
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn unit(&self) -> &str {
        &self.inner.unit
    }

    pub fn description(&self) -> &str {
        &self.inner.description
    }

    #[cfg(test)]
    pub(crate) fn force(&self, v: u64) {
        self.inner.value.store(v, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Counter")
            .field("name", &self.inner.name)
            .field("value", &self.get())
            .finish()
    }
}
