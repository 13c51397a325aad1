//! Logging setup on top of the `log` facade

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// `default_level` uses the `env_logger` filter syntax (`"info"`,
/// `"gl_engine=debug"`); a `RUST_LOG` variable takes precedence. Calling this
/// more than once keeps the first logger.
pub fn init(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);

    if env_logger::Builder::from_env(env).try_init().is_ok() {
        log::debug!("Logging initialized (default filter: {})", default_level);
    }
}
