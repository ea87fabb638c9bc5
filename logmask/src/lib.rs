// logmask/src/lib.rs
//! # logmask CLI
//!
//! A command-line host for `logmask-core`: reads log text from a file or stdin,
//! masks sensitive field values and writes the result to a file or stdout.

pub mod cli;
pub mod commands;
pub mod logger;
