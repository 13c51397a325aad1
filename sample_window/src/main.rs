//! Sample window
//!
//! Opens an 800x600 "LearneOpenGL" window with an OpenGL 3.3 core context and
//! clears it to dark teal until it is closed. A `sample_window.toml` in the
//! working directory overrides the defaults.

use gl_engine::core::config::{ApplicationConfig, Config};
use gl_engine::{foundation::logging, Engine, EngineError};

const CONFIG_FILE: &str = "sample_window.toml";

fn main() {
    let config = match ApplicationConfig::load_or_default(CONFIG_FILE) {
        Ok(config) => config,
        Err(err) => fatal_error(&err.into()),
    };

    logging::init(&config.engine.log_level);

    match Engine::run(&config) {
        Ok(stats) => log::info!("Closed after {} frames", stats.frames),
        Err(err) => fatal_error(&err),
    }
}

fn fatal_error(err: &EngineError) -> ! {
    eprintln!("{}", err);
    std::process::exit(err.exit_code())
}
