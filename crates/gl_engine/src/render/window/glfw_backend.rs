//! Window management using GLFW
//!
//! Provides window + OpenGL context creation and event handling.

use glfw::Context;

use super::backend::{WindowBackend, WindowError, WindowEvent, WindowResult, WindowSystem};
use crate::core::config::{ContextConfig, ContextProfile, WindowConfig};
use crate::input::KeyCode;
use crate::render::graphics::GlGraphics;

/// The initialized GLFW library
pub struct GlfwSystem {
    glfw: glfw::Glfw,
}

impl GlfwSystem {
    /// Initialize GLFW
    ///
    /// GLFW errors reported later are forwarded to the `log` facade.
    pub fn init() -> WindowResult<Self> {
        let glfw = glfw::init(glfw::log_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{:?}", e)))?;

        log::info!("GLFW {} initialized", glfw::get_version_string());
        Ok(Self { glfw })
    }
}

impl WindowSystem for GlfwSystem {
    type Window = GlfwWindow;

    fn create_window(
        &mut self,
        window: &WindowConfig,
        context: &ContextConfig,
    ) -> WindowResult<GlfwWindow> {
        self.glfw.default_window_hints();
        self.glfw.window_hint(glfw::WindowHint::ContextVersion(context.major, context.minor));
        self.glfw.window_hint(glfw::WindowHint::OpenGlProfile(profile_hint(context.profile)));
        self.glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(context.forward_compat));
        self.glfw.window_hint(glfw::WindowHint::Resizable(window.resizable));

        let (mut handle, events) = self
            .glfw
            .create_window(window.width, window.height, &window.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| WindowError::creation_failed(window, context))?;

        // Events are delivered through the receiver and drained after each poll
        handle.set_framebuffer_size_polling(true);
        handle.set_close_polling(true);

        Ok(GlfwWindow { handle, events })
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn set_swap_interval(&mut self, interval: u32) {
        self.glfw.set_swap_interval(glfw::SwapInterval::Sync(interval));
    }

    fn shutdown(self) {
        // glfwTerminate runs when the last Glfw handle is dropped
        drop(self.glfw);
        log::info!("GLFW terminated");
    }
}

/// GLFW window wrapper owning its OpenGL context
pub struct GlfwWindow {
    handle: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl WindowBackend for GlfwWindow {
    type Graphics = GlGraphics;

    fn make_context_current(&mut self) {
        self.handle.make_current();
    }

    fn should_close(&self) -> bool {
        self.handle.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.handle.set_should_close(should_close);
    }

    fn swap_buffers(&mut self) {
        self.handle.swap_buffers();
    }

    fn drain_events(&mut self) -> Vec<WindowEvent> {
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| match event {
                glfw::WindowEvent::FramebufferSize(width, height) => {
                    Some(WindowEvent::FramebufferResized {
                        width: to_pixels(width),
                        height: to_pixels(height),
                    })
                }
                glfw::WindowEvent::Close => Some(WindowEvent::CloseRequested),
                _ => None,
            })
            .collect()
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.handle.get_key(key_to_glfw(key)) == glfw::Action::Press
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.handle.get_framebuffer_size();
        (to_pixels(width), to_pixels(height))
    }

    fn load_graphics(&mut self) -> GlGraphics {
        let handle = &mut self.handle;
        GlGraphics::load_with(|symbol| handle.get_proc_address(symbol) as *const _)
    }

    fn destroy(self) {
        // glfwDestroyWindow runs on drop
        drop(self.handle);
    }
}

const fn profile_hint(profile: ContextProfile) -> glfw::OpenGlProfileHint {
    match profile {
        ContextProfile::Core => glfw::OpenGlProfileHint::Core,
        ContextProfile::Compat => glfw::OpenGlProfileHint::Compat,
        ContextProfile::Any => glfw::OpenGlProfileHint::Any,
    }
}

const fn key_to_glfw(key: KeyCode) -> glfw::Key {
    match key {
        KeyCode::Escape => glfw::Key::Escape,
    }
}

fn to_pixels(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
