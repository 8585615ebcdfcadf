//! Shared utilities: decimal helpers and timing instrumentation.

pub mod decimal;
pub mod timing;
