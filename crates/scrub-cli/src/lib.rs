//! CLI library components for scrub.

pub mod config;
pub mod logging;
pub mod shell;
pub mod summary;
