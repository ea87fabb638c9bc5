// logmask/src/logger.rs
//! Logger setup for the CLI. Log lines always go to stderr so they never mix with
//! the masked output on stdout.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger`, honoring `RUST_LOG`.
///
/// `level_override` forces the level for the logmask crates regardless of `RUST_LOG`.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_module("logmask", level);
        builder.filter_module("logmask_core", level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    // A second initialization (e.g. in tests) is harmless.
    let _ = builder.try_init();
}
