//! Rendering: window/context lifecycle, the GL binding and the frame loop

pub mod color;
pub mod frame_loop;
pub mod graphics;
pub mod viewport;
pub mod window;

pub use color::ClearColor;
pub use frame_loop::{FrameLoop, FrameStats};
pub use graphics::{GlGraphics, GraphicsApi, ProcLoadError};
pub use viewport::{fit_viewport, Viewport};
pub use window::{GlfwSystem, Session, WindowHandle};
