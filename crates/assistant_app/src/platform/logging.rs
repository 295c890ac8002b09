//! Logging setup for the terminal front end.
//!
//! The terminal belongs to the UI, so logs only go to the configured file.

use engine_logging::{engine_info, LogDestination};

use super::config::AppConfig;

pub fn initialize(config: &AppConfig) {
    let path = config.log_path();
    if engine_logging::initialize(LogDestination::File(path.clone()), config.log_level()) {
        engine_info!(
            "context-assistant {} logging to {:?}",
            env!("CARGO_PKG_VERSION"),
            path
        );
    } else {
        eprintln!("Warning: logging disabled, could not open {:?}", path);
    }
}
