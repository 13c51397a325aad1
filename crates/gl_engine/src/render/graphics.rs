//! OpenGL binding
//!
//! The frame loop only needs three GL entry points. They are reached through
//! [`GraphicsApi`] so the loop can run against a recording implementation in
//! tests.

use std::ffi::c_void;

use gl::types::GLsizei;
use thiserror::Error;

use super::color::ClearColor;
use super::viewport::Viewport;

/// Errors raised while resolving GL function pointers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcLoadError {
    /// Resolution was attempted before any context was made current
    #[error("no OpenGL context is current on this thread")]
    NoCurrentContext,

    /// The loader returned null for required entry points
    #[error("failed to resolve OpenGL functions: {}", .0.join(", "))]
    MissingFunctions(Vec<&'static str>),
}

/// The GL calls issued by the bootstrap
pub trait GraphicsApi {
    /// `glViewport`
    fn set_viewport(&mut self, viewport: Viewport);

    /// `glClearColor`
    fn set_clear_color(&mut self, color: ClearColor);

    /// `glClear(GL_COLOR_BUFFER_BIT)`
    fn clear_color_buffer(&mut self);

    /// Check that every entry point above was resolved
    fn verify(&self) -> Result<(), ProcLoadError>;
}

/// [`GraphicsApi`] backed by the global `gl` function table
#[derive(Debug)]
pub struct GlGraphics {
    _loaded: (),
}

impl GlGraphics {
    /// Resolve GL function pointers against the current context
    ///
    /// Resolution is best effort; call [`GraphicsApi::verify`] to find out
    /// whether it worked.
    pub fn load_with<F>(loader: F) -> Self
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);
        Self { _loaded: () }
    }

    fn missing_functions() -> Vec<&'static str> {
        [
            ("glViewport", gl::Viewport::is_loaded()),
            ("glClearColor", gl::ClearColor::is_loaded()),
            ("glClear", gl::Clear::is_loaded()),
        ]
        .into_iter()
        .filter_map(|(name, loaded)| (!loaded).then_some(name))
        .collect()
    }
}

// Unresolved entry points are skipped: the `gl` stubs panic when called.
impl GraphicsApi for GlGraphics {
    fn set_viewport(&mut self, viewport: Viewport) {
        if !gl::Viewport::is_loaded() {
            log::trace!("glViewport not loaded, skipping {:?}", viewport);
            return;
        }
        let width = GLsizei::try_from(viewport.width).unwrap_or(GLsizei::MAX);
        let height = GLsizei::try_from(viewport.height).unwrap_or(GLsizei::MAX);
        unsafe {
            gl::Viewport(viewport.x, viewport.y, width, height);
        }
    }

    fn set_clear_color(&mut self, color: ClearColor) {
        if gl::ClearColor::is_loaded() {
            unsafe {
                gl::ClearColor(color.r, color.g, color.b, color.a);
            }
        }
    }

    fn clear_color_buffer(&mut self) {
        if gl::Clear::is_loaded() {
            unsafe {
                gl::Clear(gl::COLOR_BUFFER_BIT);
            }
        }
    }

    fn verify(&self) -> Result<(), ProcLoadError> {
        let missing = Self::missing_functions();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ProcLoadError::MissingFunctions(missing))
        }
    }
}
