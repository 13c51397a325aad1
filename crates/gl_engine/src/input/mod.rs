//! Input handling
//!
//! Input processing is off by default. A caller enables it by handing an
//! [`InputHandler`] to the frame loop (or setting `input.escape_closes`),
//! without touching the loop itself.

/// Key codes the engine can query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape key
    Escape,
}

/// What an input handler may look at and change on a window
pub trait InputTarget {
    /// Whether `key` is currently held down
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// Raise or clear the window's close flag
    fn set_should_close(&mut self, should_close: bool);
}

/// Per-frame input processing
pub trait InputHandler {
    /// Called once at the top of every frame, before the clear
    fn process_input(&mut self, target: &mut dyn InputTarget);
}

/// Requests window closure when Escape is pressed
///
/// The close flag is only checked at the top of the next loop iteration, so
/// the frame in which Escape is seen still clears, swaps and polls.
#[derive(Debug, Default, Clone, Copy)]
pub struct EscapeToClose;

impl InputHandler for EscapeToClose {
    fn process_input(&mut self, target: &mut dyn InputTarget) {
        process_input(target);
    }
}

/// Close the window if Escape is pressed
pub fn process_input(target: &mut dyn InputTarget) {
    if target.is_key_pressed(KeyCode::Escape) {
        log::debug!("Escape pressed, requesting window close");
        target.set_should_close(true);
    }
}
