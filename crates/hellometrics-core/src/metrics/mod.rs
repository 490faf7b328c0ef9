//! In-process metrics registry with Prometheus text exposition.
//!
//! Counters are `AtomicU64`s behind clonable handles. The registry owns one
//! entry per metric name and renders a fresh snapshot on every scrape.

mod counter;
mod exposition;
mod registry;

pub use counter::Counter;
pub use exposition::CONTENT_TYPE;
pub use registry::Registry;
