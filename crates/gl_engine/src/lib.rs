//! # GL Engine
//!
//! A minimal GLFW + OpenGL bootstrap: one window with a 3.3 core context, a
//! clear-and-present frame loop, and a resize callback that keeps the
//! viewport matched to the framebuffer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_engine::prelude::*;
//!
//! fn main() {
//!     let config = ApplicationConfig::default();
//!     gl_engine::foundation::logging::init(&config.engine.log_level);
//!
//!     if let Err(err) = Engine::run(&config) {
//!         eprintln!("{err}");
//!         std::process::exit(err.exit_code());
//!     }
//! }
//! ```
//!
//! ## Step by step
//!
//! ```rust,no_run
//! use gl_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = Session::initialize()?;
//!     let mut window = session.create_window(&WindowConfig::default(), &ContextConfig::default())?;
//!     window.make_context_current();
//!     window.set_resize_callback(fit_viewport);
//!     window.load_graphics_proc_addresses(true)?;
//!     window.reset_viewport();
//!
//!     FrameLoop::new(ClearColor::DARK_TEAL).run(&mut session, &mut window);
//!
//!     session.destroy_window(window);
//!     session.shutdown();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod input;
pub mod render;

mod engine;

pub use engine::{Engine, EngineError, FATAL_EXIT_CODE};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Engine, EngineError,
        core::config::{ApplicationConfig, Config, ContextConfig, ContextProfile, WindowConfig},
        input::{EscapeToClose, InputHandler, KeyCode},
        render::{
            fit_viewport, ClearColor, FrameLoop, FrameStats, GraphicsApi, Session, Viewport,
            WindowHandle,
        },
    };
}
