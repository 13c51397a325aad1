//! # Application Configuration
//!
//! Every value the bootstrap used to hard-code (window size, title, context
//! version, clear color) lives here with a documented default. The defaults
//! reproduce the fixed sample window: 800x600, "LearneOpenGL", OpenGL 3.3
//! core profile, cleared to dark teal every frame.
//!
//! All sections are `#[serde(default)]`, so a config file only needs to list
//! the values it changes.

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};
use crate::render::ClearColor;

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
/// Default window title
pub const DEFAULT_WINDOW_TITLE: &str = "LearneOpenGL";

/// OpenGL context profile requested at window creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextProfile {
    /// Core profile: no deprecated fixed-function API
    Core,
    /// Compatibility profile: core plus the legacy API
    Compat,
    /// Let the driver decide (required for versions below 3.2)
    Any,
}

impl std::fmt::Display for ContextProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Core => write!(f, "core"),
            Self::Compat => write!(f, "compat"),
            Self::Any => write!(f, "any"),
        }
    }
}

/// Engine-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter; `RUST_LOG` overrides it
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Window creation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title, fixed after creation
    pub title: String,
    /// Requested width in screen coordinates
    pub width: u32,
    /// Requested height in screen coordinates
    pub height: u32,
    /// Whether the user may resize the window
    pub resizable: bool,
}

impl WindowConfig {
    /// Create a window configuration with the given size and title
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            resizable: true,
        }
    }

    /// Validate the window parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("window title cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_TITLE)
    }
}

/// OpenGL context hints, applied before the window is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Context major version
    pub major: u32,
    /// Context minor version
    pub minor: u32,
    /// Context profile
    pub profile: ContextProfile,
    /// Request a forward-compatible context (mandatory for core contexts on macOS)
    pub forward_compat: bool,
}

impl ContextConfig {
    /// Create a context configuration for the given version and profile
    pub const fn new(major: u32, minor: u32, profile: ContextProfile) -> Self {
        Self {
            major,
            minor,
            profile,
            forward_compat: cfg!(target_os = "macos"),
        }
    }

    /// Validate the requested version/profile combination
    ///
    /// Profiles only exist from OpenGL 3.2 on; asking for one on an older
    /// version makes context creation fail on every driver.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.major == 0 {
            return Err(ConfigError::Invalid("context major version must be at least 1".to_string()));
        }
        if self.profile != ContextProfile::Any && (self.major, self.minor) < (3, 2) {
            return Err(ConfigError::Invalid(format!(
                "{} profile requires OpenGL 3.2 or newer, got {}.{}",
                self.profile, self.major, self.minor
            )));
        }
        if self.forward_compat && self.major < 3 {
            return Err(ConfigError::Invalid(format!(
                "forward-compatible contexts require OpenGL 3.0 or newer, got {}.{}",
                self.major, self.minor
            )));
        }
        Ok(())
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self::new(3, 3, ContextProfile::Core)
    }
}

/// Frame loop and GL binding settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Swap interval; `None` keeps the platform default
    pub swap_interval: Option<u32>,
    /// Fail when GL function pointers cannot be resolved
    pub strict_proc_loading: bool,
    /// Color the framebuffer is cleared to every frame
    pub clear_color: ClearColor,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            swap_interval: None,
            strict_proc_loading: true,
            clear_color: ClearColor::DARK_TEAL,
        }
    }
}

/// Input processing settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Close the window when Escape is pressed
    pub escape_closes: bool,
}

/// # Complete Application Configuration
///
/// Top-level configuration handed to [`crate::Engine::run`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine-wide settings
    pub engine: EngineConfig,
    /// Window creation parameters
    pub window: WindowConfig,
    /// OpenGL context hints
    pub context: ContextConfig,
    /// Frame loop settings
    pub render: RenderConfig,
    /// Input settings
    pub input: InputConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.context.validate()?;
        if !self.render.clear_color.is_normalized() {
            return Err(ConfigError::Invalid(format!(
                "clear color components must be within [0, 1], got {:?}",
                self.render.clear_color
            )));
        }
        Ok(())
    }
}

impl Config for ApplicationConfig {}
