// logmask-core/src/engines/fixed_mask.rs
//! A `MaskingStrategy` that replaces every sensitive value with a constant literal.
//! License: MIT OR APACHE 2.0

use crate::engine::{redact_values, MaskingStrategy};
use crate::sanitizers::compiler::MatcherSet;

/// Mask literal used when none is configured.
pub const DEFAULT_MASK: &str = "********";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedMask {
    mask: String,
}

impl FixedMask {
    pub fn new(mask: impl Into<String>) -> Self {
        Self { mask: mask.into() }
    }

    pub fn mask(&self) -> &str {
        &self.mask
    }

    pub fn set_mask(&mut self, mask: impl Into<String>) {
        self.mask = mask.into();
    }
}

impl Default for FixedMask {
    fn default() -> Self {
        Self::new(DEFAULT_MASK)
    }
}

impl MaskingStrategy for FixedMask {
    fn name(&self) -> &'static str {
        "mask"
    }

    fn mask_message(&self, message: &str, matchers: &MatcherSet) -> String {
        redact_values(message, matchers, self.name(), |_| self.mask.clone())
    }
}
