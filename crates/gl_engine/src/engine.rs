//! Engine orchestration: the whole window/context lifecycle in one call

use thiserror::Error;

use crate::core::config::{ApplicationConfig, ConfigError};
use crate::input::EscapeToClose;
use crate::render::graphics::ProcLoadError;
use crate::render::window::{GlfwSystem, Session, WindowError, WindowResult, WindowSystem};
use crate::render::{fit_viewport, FrameLoop, FrameStats};

/// Exit status used for every fatal startup failure
pub const FATAL_EXIT_CODE: i32 = -1;

/// Engine-level errors
///
/// All of them are fatal: the program either fully starts or does not run.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The configuration is unusable
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The windowing subsystem did not start
    #[error("Engine initialization failed: {0}")]
    Initialization(#[source] WindowError),

    /// The window or its context could not be created
    #[error("Window creation failed: {0}")]
    WindowCreation(#[source] WindowError),

    /// OpenGL function pointers could not be resolved
    #[error("OpenGL loading failed: {0}")]
    ProcLoad(#[from] ProcLoadError),
}

impl EngineError {
    /// Process exit status for this error
    pub const fn exit_code(&self) -> i32 {
        FATAL_EXIT_CODE
    }
}

/// Runs the bootstrap: init, window, loop, teardown
pub struct Engine;

impl Engine {
    /// Run against GLFW until the window is closed
    pub fn run(config: &ApplicationConfig) -> Result<FrameStats, EngineError> {
        Self::run_with(config, GlfwSystem::init)
    }

    /// Run against the windowing system produced by `init`
    ///
    /// Once the window exists, every exit path destroys it and then shuts
    /// the subsystem down, each exactly once.
    pub fn run_with<S, F>(config: &ApplicationConfig, init: F) -> Result<FrameStats, EngineError>
    where
        S: WindowSystem,
        F: FnOnce() -> WindowResult<S>,
    {
        config.validate()?;

        log::info!("Initializing windowing system...");
        let mut session = Session::from_system(init().map_err(EngineError::Initialization)?);

        let mut window = match session.create_window(&config.window, &config.context) {
            Ok(window) => window,
            Err(err) => {
                session.shutdown();
                return Err(EngineError::WindowCreation(err));
            }
        };

        window.make_context_current();
        window.set_resize_callback(fit_viewport);
        if let Some(interval) = config.render.swap_interval {
            session.set_swap_interval(interval);
        }

        if let Err(err) = window.load_graphics_proc_addresses(config.render.strict_proc_loading) {
            session.destroy_window(window);
            session.shutdown();
            return Err(err.into());
        }
        window.reset_viewport();

        let mut frame_loop = FrameLoop::new(config.render.clear_color);
        if config.input.escape_closes {
            frame_loop = frame_loop.with_input(EscapeToClose);
        }
        let stats = frame_loop.run(&mut session, &mut window);

        session.destroy_window(window);
        session.shutdown();
        log::info!("Engine shutdown complete");

        Ok(stats)
    }
}
