//! Clear-and-present frame loop

use super::color::ClearColor;
use super::window::{Session, WindowHandle, WindowSystem};
use crate::foundation::time::FrameClock;
use crate::input::InputHandler;

/// Totals reported when the loop exits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Frames presented
    pub frames: u64,
    /// Seconds spent in the loop
    pub elapsed_secs: f32,
    /// Slowest single frame, in seconds
    pub longest_frame_secs: f32,
}

impl FrameStats {
    /// Average frames per second over the whole run
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        if self.elapsed_secs > 0.0 {
            self.frames as f32 / self.elapsed_secs
        } else {
            0.0
        }
    }
}

/// Blocking frame loop
///
/// Each iteration, while the window is not flagged for closing:
/// 1. run the input handler, if any
/// 2. set the clear color and clear the color buffer
/// 3. swap buffers
/// 4. poll events (resize callbacks run here)
///
/// The close flag is only checked at the top of an iteration, so a close
/// requested mid-frame still lets that frame finish.
pub struct FrameLoop {
    clear_color: ClearColor,
    input: Option<Box<dyn InputHandler>>,
}

impl FrameLoop {
    /// Create a loop that clears to `clear_color`, with input processing disabled
    pub fn new(clear_color: ClearColor) -> Self {
        Self {
            clear_color,
            input: None,
        }
    }

    /// Enable input processing with `handler`
    #[must_use]
    pub fn with_input<H: InputHandler + 'static>(mut self, handler: H) -> Self {
        self.input = Some(Box::new(handler));
        self
    }

    /// Run until the window's close flag is set
    pub fn run<S: WindowSystem>(
        &mut self,
        session: &mut Session<S>,
        window: &mut WindowHandle<S::Window>,
    ) -> FrameStats {
        let mut clock = FrameClock::start();
        log::info!("Entering frame loop");

        while !window.should_close() {
            if let Some(input) = self.input.as_mut() {
                input.process_input(window);
            }

            window.clear_frame(self.clear_color);
            window.swap_buffers();
            session.poll_events(window);

            let frame = clock.tick();
            log::trace!("Frame {} took {:?}", clock.frames(), frame);
        }

        let stats = FrameStats {
            frames: clock.frames(),
            elapsed_secs: clock.elapsed().as_secs_f32(),
            longest_frame_secs: clock.longest_frame().as_secs_f32(),
        };
        log::info!(
            "Frame loop finished: {} frames in {:.2}s ({:.1} fps)",
            stats.frames,
            stats.elapsed_secs,
            stats.average_fps()
        );
        stats
    }
}
