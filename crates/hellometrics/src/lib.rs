//! Top-level facade crate for hellometrics.
//!
//! Re-exports the metrics core and the server library so users can depend on a single crate.

pub mod core {
    pub use hellometrics_core::*;
}

pub mod server {
    pub use hellometrics_server::*;
}
