//! Windowing session lifecycle
//!
//! A [`Session`] exists from subsystem initialization to shutdown. Windows can
//! only be created through it, and [`Session::shutdown`] consumes it, so the
//! "init first, shutdown last" ordering is enforced by the type system.

use super::backend::{WindowBackend, WindowError, WindowResult, WindowSystem};
use super::glfw_backend::GlfwSystem;
use super::handle::WindowHandle;
use crate::core::config::{ContextConfig, WindowConfig};

/// The initialized windowing subsystem
pub struct Session<S: WindowSystem> {
    system: S,
    window_open: bool,
}

impl Session<GlfwSystem> {
    /// Initialize GLFW
    pub fn initialize() -> WindowResult<Self> {
        GlfwSystem::init().map(Self::from_system)
    }
}

impl<S: WindowSystem> Session<S> {
    /// Wrap an already initialized windowing system
    pub const fn from_system(system: S) -> Self {
        Self {
            system,
            window_open: false,
        }
    }

    /// Create the session's window
    ///
    /// Only one window may be live at a time.
    pub fn create_window(
        &mut self,
        window: &WindowConfig,
        context: &ContextConfig,
    ) -> WindowResult<WindowHandle<S::Window>> {
        if self.window_open {
            return Err(WindowError::WindowAlreadyOpen);
        }

        let backend = self.system.create_window(window, context)?;
        self.window_open = true;

        log::info!(
            "Created {}x{} window '{}' with an OpenGL {}.{} {} context",
            window.width,
            window.height,
            window.title,
            context.major,
            context.minor,
            context.profile
        );
        Ok(WindowHandle::new(backend, &window.title, *context))
    }

    /// Drain the OS event queue and dispatch the window's callbacks
    ///
    /// Resize callbacks have run by the time this returns.
    pub fn poll_events(&mut self, window: &mut WindowHandle<S::Window>) {
        self.system.poll_events();
        window.dispatch_events();
    }

    /// Set the swap interval of the current context
    pub fn set_swap_interval(&mut self, interval: u32) {
        log::debug!("Swap interval set to {}", interval);
        self.system.set_swap_interval(interval);
    }

    /// Destroy the window and its context
    pub fn destroy_window(&mut self, window: WindowHandle<S::Window>) {
        log::info!("Destroying window '{}'", window.title());
        window.into_backend().destroy();
        self.window_open = false;
    }

    /// Shut the subsystem down; must be the final windowing call
    pub fn shutdown(self) {
        if self.window_open {
            log::warn!("Shutting down the windowing system with a window still open");
        }
        self.system.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::window::mock::{Call, MockState, MockSystem};
    use crate::render::Viewport;

    #[test]
    fn test_window_created_with_requested_parameters() {
        let state = MockState::shared();
        let mut session = Session::from_system(MockSystem::new(&state));

        let window = session
            .create_window(&WindowConfig::default(), &ContextConfig::default())
            .expect("mock window creation succeeds");

        assert_eq!(window.title(), "LearneOpenGL");
        assert_eq!(window.size(), (800, 600));
        assert_eq!(window.context().major, 3);
        assert_eq!(state.borrow().calls[0], Call::CreateWindow { width: 800, height: 600, major: 3, minor: 3 });
    }

    #[test]
    fn test_second_window_rejected() {
        let state = MockState::shared();
        let mut session = Session::from_system(MockSystem::new(&state));

        let first = session
            .create_window(&WindowConfig::default(), &ContextConfig::default())
            .expect("first window");
        let second = session.create_window(&WindowConfig::default(), &ContextConfig::default());
        assert!(matches!(second, Err(WindowError::WindowAlreadyOpen)));

        session.destroy_window(first);
        assert!(session
            .create_window(&WindowConfig::default(), &ContextConfig::default())
            .is_ok());
    }

    #[test]
    fn test_creation_failure_reports_request() {
        let state = MockState::shared();
        state.borrow_mut().fail_create = true;
        let mut session = Session::from_system(MockSystem::new(&state));

        let result = session.create_window(&WindowConfig::default(), &ContextConfig::default());
        assert!(matches!(
            result,
            Err(WindowError::CreationFailed { width: 800, height: 600, major: 3, minor: 3, .. })
        ));
    }

    #[test]
    fn test_resize_updates_viewport() {
        let state = MockState::shared();
        let mut session = Session::from_system(MockSystem::new(&state));
        let mut window = session
            .create_window(&WindowConfig::default(), &ContextConfig::default())
            .expect("window");
        window.make_context_current();
        window.set_resize_callback(crate::render::fit_viewport);
        window
            .load_graphics_proc_addresses(true)
            .expect("mock binding is complete");

        state.borrow_mut().resize_on_poll.push((1, 400, 300));
        session.poll_events(&mut window);

        assert_eq!(window.size(), (400, 300));
        assert_eq!(
            state.borrow().calls.last(),
            Some(&Call::Viewport(Viewport { x: 0, y: 0, width: 400, height: 300 }))
        );
    }

    #[test]
    fn test_resize_before_loading_only_tracks_size() {
        let state = MockState::shared();
        let mut session = Session::from_system(MockSystem::new(&state));
        let mut window = session
            .create_window(&WindowConfig::default(), &ContextConfig::default())
            .expect("window");
        window.set_resize_callback(crate::render::fit_viewport);

        state.borrow_mut().resize_on_poll.push((1, 1024, 768));
        session.poll_events(&mut window);

        assert_eq!(window.size(), (1024, 768));
        assert!(!state.borrow().calls.iter().any(|c| matches!(c, Call::Viewport(_))));
    }

    #[test]
    fn test_custom_resize_callback_captures_state() {
        use std::cell::Cell;
        use std::rc::Rc;

        let state = MockState::shared();
        let mut session = Session::from_system(MockSystem::new(&state));
        let mut window = session
            .create_window(&WindowConfig::default(), &ContextConfig::default())
            .expect("window");
        window.make_context_current();
        window.load_graphics_proc_addresses(true).expect("binding");

        let resizes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&resizes);
        window.set_resize_callback(move |_graphics, _width, _height| counter.set(counter.get() + 1));

        state.borrow_mut().resize_on_poll.extend([(1, 640, 480), (2, 320, 240)]);
        session.poll_events(&mut window);
        session.poll_events(&mut window);

        assert_eq!(resizes.get(), 2);
        assert_eq!(window.size(), (320, 240));
    }

    #[test]
    fn test_close_event_sets_flag() {
        let state = MockState::shared();
        let mut session = Session::from_system(MockSystem::new(&state));
        let mut window = session
            .create_window(&WindowConfig::default(), &ContextConfig::default())
            .expect("window");

        state.borrow_mut().close_on_poll = Some(1);
        assert!(!window.should_close());
        session.poll_events(&mut window);
        assert!(window.should_close());
    }

    #[test]
    fn test_loading_requires_current_context() {
        let state = MockState::shared();
        let mut session = Session::from_system(MockSystem::new(&state));
        let mut window = session
            .create_window(&WindowConfig::default(), &ContextConfig::default())
            .expect("window");

        assert_eq!(
            window.load_graphics_proc_addresses(true),
            Err(crate::render::ProcLoadError::NoCurrentContext)
        );
        assert!(window.graphics_mut().is_none());
    }

    #[test]
    fn test_lenient_loading_keeps_incomplete_binding() {
        let state = MockState::shared();
        state.borrow_mut().missing_procs = vec!["glClear"];
        let mut session = Session::from_system(MockSystem::new(&state));
        let mut window = session
            .create_window(&WindowConfig::default(), &ContextConfig::default())
            .expect("window");
        window.make_context_current();

        assert!(window.load_graphics_proc_addresses(true).is_err());
        assert!(window.graphics_mut().is_none());

        assert!(window.load_graphics_proc_addresses(false).is_ok());
        assert!(window.graphics_mut().is_some());
    }

    #[test]
    fn test_destroy_then_shutdown() {
        let state = MockState::shared();
        let mut session = Session::from_system(MockSystem::new(&state));
        let window = session
            .create_window(&WindowConfig::default(), &ContextConfig::default())
            .expect("window");

        session.destroy_window(window);
        session.shutdown();

        let state = state.borrow();
        let calls = &state.calls;
        assert_eq!(&calls[calls.len() - 2..], &[Call::DestroyWindow, Call::Shutdown]);
    }
}
