//! System-level modules
//!
//! Startup plumbing that is not business logic: logging initialization.

pub mod logging;
