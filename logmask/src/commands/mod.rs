// logmask/src/commands/mod.rs
//! Implementations of the CLI subcommands.

pub mod mask;
pub mod templates;
