//! Recording window system for tests
//!
//! Every call is appended to a shared log; events are scripted by poll number
//! (the first `poll_events` is poll 1).

use std::cell::RefCell;
use std::rc::Rc;

use super::backend::{WindowBackend, WindowError, WindowEvent, WindowResult, WindowSystem};
use crate::core::config::{ContextConfig, WindowConfig};
use crate::input::KeyCode;
use crate::render::{ClearColor, GraphicsApi, ProcLoadError, Viewport};

pub(crate) type SharedState = Rc<RefCell<MockState>>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateWindow { width: u32, height: u32, major: u32, minor: u32 },
    MakeCurrent,
    SwapInterval(u32),
    LoadGraphics,
    Viewport(Viewport),
    ClearColor(ClearColor),
    Clear,
    Swap,
    Poll,
    DestroyWindow,
    Shutdown,
}

#[derive(Debug, Default)]
pub(crate) struct MockState {
    pub calls: Vec<Call>,
    pub polls: usize,
    pub fail_create: bool,
    pub close_on_poll: Option<usize>,
    pub resize_on_poll: Vec<(usize, u32, u32)>,
    pub escape_from_poll: Option<usize>,
    pub missing_procs: Vec<&'static str>,
    should_close: bool,
    pending: Vec<WindowEvent>,
    framebuffer: (u32, u32),
}

impl MockState {
    pub fn shared() -> SharedState {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    fn record(&mut self, call: Call) {
        self.calls.push(call);
    }
}

pub(crate) struct MockSystem {
    state: SharedState,
}

impl MockSystem {
    pub fn new(state: &SharedState) -> Self {
        Self {
            state: Rc::clone(state),
        }
    }
}

impl WindowSystem for MockSystem {
    type Window = MockWindow;

    fn create_window(
        &mut self,
        window: &WindowConfig,
        context: &ContextConfig,
    ) -> WindowResult<MockWindow> {
        let mut state = self.state.borrow_mut();
        state.record(Call::CreateWindow {
            width: window.width,
            height: window.height,
            major: context.major,
            minor: context.minor,
        });
        if state.fail_create {
            return Err(WindowError::creation_failed(window, context));
        }
        state.framebuffer = (window.width, window.height);

        Ok(MockWindow {
            state: Rc::clone(&self.state),
        })
    }

    fn poll_events(&mut self) {
        let mut state = self.state.borrow_mut();
        state.polls += 1;
        state.record(Call::Poll);

        let poll = state.polls;
        let resizes: Vec<_> = state
            .resize_on_poll
            .iter()
            .filter(|(at, _, _)| *at == poll)
            .map(|&(_, width, height)| (width, height))
            .collect();
        for (width, height) in resizes {
            state.framebuffer = (width, height);
            state.pending.push(WindowEvent::FramebufferResized { width, height });
        }

        if state.close_on_poll == Some(poll) {
            state.should_close = true;
            state.pending.push(WindowEvent::CloseRequested);
        }
    }

    fn set_swap_interval(&mut self, interval: u32) {
        self.state.borrow_mut().record(Call::SwapInterval(interval));
    }

    fn shutdown(self) {
        self.state.borrow_mut().record(Call::Shutdown);
    }
}

pub(crate) struct MockWindow {
    state: SharedState,
}

impl WindowBackend for MockWindow {
    type Graphics = MockGraphics;

    fn make_context_current(&mut self) {
        self.state.borrow_mut().record(Call::MakeCurrent);
    }

    fn should_close(&self) -> bool {
        self.state.borrow().should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.state.borrow_mut().should_close = should_close;
    }

    fn swap_buffers(&mut self) {
        self.state.borrow_mut().record(Call::Swap);
    }

    fn drain_events(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.state.borrow_mut().pending)
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        let state = self.state.borrow();
        key == KeyCode::Escape && state.escape_from_poll.is_some_and(|from| state.polls >= from)
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.state.borrow().framebuffer
    }

    fn load_graphics(&mut self) -> MockGraphics {
        self.state.borrow_mut().record(Call::LoadGraphics);
        MockGraphics {
            state: Rc::clone(&self.state),
        }
    }

    fn destroy(self) {
        self.state.borrow_mut().record(Call::DestroyWindow);
    }
}

pub(crate) struct MockGraphics {
    state: SharedState,
}

impl GraphicsApi for MockGraphics {
    fn set_viewport(&mut self, viewport: Viewport) {
        self.state.borrow_mut().record(Call::Viewport(viewport));
    }

    fn set_clear_color(&mut self, color: ClearColor) {
        self.state.borrow_mut().record(Call::ClearColor(color));
    }

    fn clear_color_buffer(&mut self) {
        self.state.borrow_mut().record(Call::Clear);
    }

    fn verify(&self) -> Result<(), ProcLoadError> {
        let missing = self.state.borrow().missing_procs.clone();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ProcLoadError::MissingFunctions(missing))
        }
    }
}
