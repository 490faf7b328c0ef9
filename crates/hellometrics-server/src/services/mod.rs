//! Business endpoints.

pub mod hello;
