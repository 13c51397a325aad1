//! # Core Engine Module
//!
//! Shared configuration types used by the session, the frame loop and the
//! sample binary.

pub mod config;

pub use config::{
    ApplicationConfig,
    Config,
    ConfigError,
    ContextConfig,
    ContextProfile,
    EngineConfig,
    InputConfig,
    RenderConfig,
    WindowConfig,
};
