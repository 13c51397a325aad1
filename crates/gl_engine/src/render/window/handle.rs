//! High-level window handle for applications
//!
//! A [`WindowHandle`] owns one backend window together with the GL binding
//! resolved against its context, the last known framebuffer size and the
//! resize callback. It is obtained from [`super::Session::create_window`] and
//! given back to [`super::Session::destroy_window`].

use super::backend::{WindowBackend, WindowEvent};
use crate::core::config::ContextConfig;
use crate::input::{InputTarget, KeyCode};
use crate::render::color::ClearColor;
use crate::render::graphics::{GraphicsApi, ProcLoadError};
use crate::render::viewport::Viewport;

/// Callback invoked with the new framebuffer size after a resize
pub type ResizeCallback<G> = Box<dyn FnMut(&mut G, u32, u32)>;

/// A window plus its OpenGL context
pub struct WindowHandle<W: WindowBackend> {
    backend: W,
    graphics: Option<W::Graphics>,
    title: String,
    context: ContextConfig,
    width: u32,
    height: u32,
    context_current: bool,
    resize_callback: Option<ResizeCallback<W::Graphics>>,
}

impl<W: WindowBackend> WindowHandle<W> {
    pub(crate) fn new(backend: W, title: &str, context: ContextConfig) -> Self {
        let (width, height) = backend.framebuffer_size();
        Self {
            backend,
            graphics: None,
            title: title.to_string(),
            context,
            width,
            height,
            context_current: false,
            resize_callback: None,
        }
    }

    /// Bind this window's context to the calling thread
    pub fn make_context_current(&mut self) {
        self.backend.make_context_current();
        self.context_current = true;
    }

    /// Register the handler run when the framebuffer changes size
    ///
    /// The handler receives the GL binding and the new size in pixels and is
    /// expected to update the viewport; [`crate::render::fit_viewport`] does
    /// exactly that. Registering again replaces the previous handler.
    pub fn set_resize_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut W::Graphics, u32, u32) + 'static,
    {
        self.resize_callback = Some(Box::new(callback));
    }

    /// Resolve GL function pointers against the current context
    ///
    /// With `strict` set, unresolved entry points are an error. Otherwise they
    /// are logged and the binding is kept, so later GL calls may fail.
    pub fn load_graphics_proc_addresses(&mut self, strict: bool) -> Result<(), ProcLoadError> {
        if !self.context_current {
            return Err(ProcLoadError::NoCurrentContext);
        }

        let graphics = self.backend.load_graphics();
        match graphics.verify() {
            Ok(()) => log::info!("OpenGL function pointers loaded"),
            Err(err) if strict => return Err(err),
            Err(err) => log::warn!("Continuing with an incomplete OpenGL binding: {}", err),
        }

        self.graphics = Some(graphics);
        Ok(())
    }

    /// Push a viewport covering the current framebuffer
    pub fn reset_viewport(&mut self) {
        let viewport = Viewport::full(self.width, self.height);
        if let Some(graphics) = self.graphics.as_mut() {
            graphics.set_viewport(viewport);
        }
    }

    /// Clear the color buffer to `color`
    pub fn clear_frame(&mut self, color: ClearColor) {
        if let Some(graphics) = self.graphics.as_mut() {
            graphics.set_clear_color(color);
            graphics.clear_color_buffer();
        }
    }

    /// Check if the window should close
    pub fn should_close(&self) -> bool {
        self.backend.should_close()
    }

    /// Set whether the window should close
    pub fn set_should_close(&mut self, should_close: bool) {
        self.backend.set_should_close(should_close);
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.backend.swap_buffers();
    }

    /// Whether `key` is currently held down
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.backend.is_key_pressed(key)
    }

    /// Framebuffer size in pixels as of the last processed event
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Context parameters the window was created with
    pub fn context(&self) -> &ContextConfig {
        &self.context
    }

    /// The GL binding, once loaded
    pub fn graphics_mut(&mut self) -> Option<&mut W::Graphics> {
        self.graphics.as_mut()
    }

    /// Apply events buffered by the last poll
    pub(crate) fn dispatch_events(&mut self) {
        for event in self.backend.drain_events() {
            match event {
                WindowEvent::FramebufferResized { width, height } => {
                    self.width = width;
                    self.height = height;
                    log::debug!("Framebuffer resized to {}x{}", width, height);

                    match (self.resize_callback.as_mut(), self.graphics.as_mut()) {
                        (Some(callback), Some(graphics)) => callback(graphics, width, height),
                        (Some(_), None) => {
                            log::debug!("Resize before OpenGL was loaded, viewport left unchanged");
                        }
                        (None, _) => {}
                    }
                }
                WindowEvent::CloseRequested => {
                    log::debug!("Close requested for window '{}'", self.title);
                    self.backend.set_should_close(true);
                }
            }
        }
    }

    pub(crate) fn into_backend(self) -> W {
        self.backend
    }
}

impl<W: WindowBackend> InputTarget for WindowHandle<W> {
    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.backend.is_key_pressed(key)
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.backend.set_should_close(should_close);
    }
}
