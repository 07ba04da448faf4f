//! Logger setup for the binary

use log::LevelFilter;
use std::env;

/// Initialize `env_logger` at Debug when `verbose`, otherwise at `default_level`
///
/// `RUST_LOG`, when set, overrides both.
pub fn init_logger(verbose: bool, default_level: LevelFilter) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        default_level
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (tests, repeated runs in one process) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
