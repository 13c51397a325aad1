//! Backend-agnostic windowing traits
//!
//! [`WindowSystem`] stands for the process-wide windowing library and
//! [`WindowBackend`] for one native window with its OpenGL context. The GLFW
//! implementation lives in `glfw_backend.rs`; the session and the frame loop only talk
//! to these traits.

use thiserror::Error;

use crate::core::config::{ContextConfig, ContextProfile, WindowConfig};
use crate::input::KeyCode;
use crate::render::graphics::GraphicsApi;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing library could not start (no display server, no driver)
    #[error("Failed to initialize the windowing system: {0}")]
    InitializationFailed(String),

    /// The window or its context could not be created
    #[error("Failed to create a {width}x{height} window with an OpenGL {major}.{minor} {profile} context")]
    CreationFailed {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Requested context major version
        major: u32,
        /// Requested context minor version
        minor: u32,
        /// Requested context profile
        profile: ContextProfile,
    },

    /// The session already owns a live window
    #[error("A window is already open in this session")]
    WindowAlreadyOpen,
}

impl WindowError {
    /// Build a [`WindowError::CreationFailed`] from the requested parameters
    pub fn creation_failed(window: &WindowConfig, context: &ContextConfig) -> Self {
        Self::CreationFailed {
            width: window.width,
            height: window.height,
            major: context.major,
            minor: context.minor,
            profile: context.profile,
        }
    }
}

/// Result type for windowing operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Window events the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The framebuffer changed size, in pixels
    FramebufferResized {
        /// New framebuffer width
        width: u32,
        /// New framebuffer height
        height: u32,
    },

    /// The user or the OS asked the window to close
    CloseRequested,
}

/// The windowing subsystem
///
/// Constructing a value of an implementing type is the subsystem
/// initialization; [`WindowSystem::shutdown`] consumes it, so no windowing
/// call can follow it.
pub trait WindowSystem {
    /// Window type produced by this system
    type Window: WindowBackend;

    /// Create a window and its context
    ///
    /// Context hints (version, profile, forward compatibility) are applied
    /// before the native window is created.
    fn create_window(
        &mut self,
        window: &WindowConfig,
        context: &ContextConfig,
    ) -> WindowResult<Self::Window>;

    /// Drain the OS event queue once
    ///
    /// Events are buffered per window and picked up with
    /// [`WindowBackend::drain_events`].
    fn poll_events(&mut self);

    /// Set the buffer swap interval of the current context
    fn set_swap_interval(&mut self, interval: u32);

    /// Release all subsystem resources
    fn shutdown(self);
}

/// One native window plus its OpenGL context
///
/// Note: no `Send` bound. GLFW windows must stay on the main thread.
pub trait WindowBackend {
    /// GL binding produced for this window's context
    type Graphics: GraphicsApi + 'static;

    /// Bind this window's context to the calling thread
    fn make_context_current(&mut self);

    /// Whether closure was requested (close button, Alt+F4, or programmatically)
    fn should_close(&self) -> bool;

    /// Raise or clear the close flag
    fn set_should_close(&mut self, should_close: bool);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Take the events buffered by the last poll
    fn drain_events(&mut self) -> Vec<WindowEvent>;

    /// Whether `key` is currently held down
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// Current framebuffer size in pixels
    ///
    /// May differ from the window size on high-density displays.
    fn framebuffer_size(&self) -> (u32, u32);

    /// Resolve GL function pointers against this window's context
    ///
    /// Must be called with the context current. Resolution is best effort;
    /// the result is checked with [`GraphicsApi::verify`].
    fn load_graphics(&mut self) -> Self::Graphics;

    /// Destroy the window and its context
    fn destroy(self);
}
