//! Process-wide tracing setup.

pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize tracing for the process.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init();
}
