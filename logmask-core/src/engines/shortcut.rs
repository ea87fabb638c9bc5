// logmask-core/src/engines/shortcut.rs
//! A `MaskingStrategy` that replaces every sensitive value with a short fingerprint:
//! first character, length, last character (`Gustaw` becomes `G-6-w`).
//!
//! The fingerprint is lossy but not a cryptographic hash. Running the strategy twice
//! over the same text shortens already-shortened values again (`G-6-w` becomes
//! `G-5-w`), so it is not idempotent.
//!
//! License: MIT OR APACHE 2.0

use crate::engine::{is_blank, redact_values, MaskingStrategy};
use crate::sanitizers::compiler::MatcherSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shortcut;

impl Shortcut {
    pub fn new() -> Self {
        Self
    }
}

/// Builds `first-len-last` for a value. Length counts chars, not bytes.
/// Blank values are returned unchanged.
pub fn shortcut(value: &str) -> String {
    if is_blank(value) {
        return value.to_string();
    }
    let mut chars = value.chars();
    let first = chars.next().unwrap_or_default();
    let last = chars.next_back().unwrap_or(first);
    format!("{}-{}-{}", first, value.chars().count(), last)
}

impl MaskingStrategy for Shortcut {
    fn name(&self) -> &'static str {
        "shortcut"
    }

    fn mask_message(&self, message: &str, matchers: &MatcherSet) -> String {
        redact_values(message, matchers, self.name(), shortcut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TemplateRegistry;

    #[test]
    fn test_shortcut_format() {
        assert_eq!(shortcut("Gustaw"), "G-6-w");
        assert_eq!(shortcut("CC123456"), "C-8-6");
        assert_eq!(shortcut("+48123123123"), "+-12-3");
    }

    #[test]
    fn test_shortcut_single_char() {
        assert_eq!(shortcut("x"), "x-1-x");
    }

    #[test]
    fn test_shortcut_blank_passthrough() {
        assert_eq!(shortcut(""), "");
        assert_eq!(shortcut("   "), "   ");
    }

    #[test]
    fn test_shortcut_counts_chars() {
        assert_eq!(shortcut("Zażółć"), "Z-6-ć");
    }

    #[test]
    fn test_shortcut_is_not_idempotent() {
        let mut registry = TemplateRegistry::new();
        registry.add_predefined("EQUAL_AND_SQUARE_BRACKETS").unwrap();
        let mut set = MatcherSet::new();
        set.register_field(&registry, "firstName").unwrap();

        let once = Shortcut.mask_message("firstName=[Gustaw]", &set);
        assert_eq!(once, "firstName=[G-6-w]");
        let twice = Shortcut.mask_message(&once, &set);
        assert_eq!(twice, "firstName=[G-5-w]");
        assert_ne!(once, twice);
    }
}
