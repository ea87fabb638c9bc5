// logmask-core/src/engines/mod.rs
//! Concrete implementations of the `MaskingStrategy` trait.
//!
//! Each strategy lives in its own file and only supplies the per-value replacement;
//! the scanning loop is shared through `crate::engine::redact_values`.

pub mod fixed_mask;
pub mod shortcut;
