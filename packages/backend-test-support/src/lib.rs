//! Shared helpers for the engine's integration tests: logging bootstrap and
//! collision-free ids.

pub mod test_logging;
pub mod unique_helpers;
