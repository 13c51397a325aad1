//! Window management subsystem
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Engine / application        │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!     ┌─────────▼──────────┐
//!     │ Session            │ ← init, create/destroy window, poll, shutdown
//!     │ WindowHandle       │ ← context, resize callback, GL binding
//!     └─────────┬──────────┘
//!               │ Uses
//!     ┌─────────▼──────────┐
//!     │ WindowSystem       │ ← traits (backend.rs)
//!     │ WindowBackend      │
//!     └─────────┬──────────┘
//!               │ Implemented by
//!     ┌─────────▼──────────┐
//!     │ GlfwSystem         │ ← glfw_backend.rs
//!     │ GlfwWindow         │
//!     └────────────────────┘
//! ```

pub mod backend;
pub mod glfw_backend;
pub mod handle;
pub mod session;

#[cfg(test)]
pub(crate) mod mock;

pub use backend::{WindowBackend, WindowError, WindowEvent, WindowResult, WindowSystem};
pub use glfw_backend::{GlfwSystem, GlfwWindow};
pub use handle::{ResizeCallback, WindowHandle};
pub use session::Session;
