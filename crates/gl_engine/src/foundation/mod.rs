//! Foundation module - Core utilities
//!
//! - Logging setup
//! - Frame timing

pub mod time;
pub mod logging;
