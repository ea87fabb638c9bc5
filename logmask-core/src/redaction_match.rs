// logmask-core/src/redaction_match.rs
//! Value spans found by a matcher, plus debug logging that never leaks the values
//! it reports on.

use lazy_static::lazy_static;
use log::debug;

lazy_static! {
    /// Whether original values may appear in debug logs. Read once from the environment.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("LOGMASK_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Byte span of one sensitive value inside the buffer a matcher scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedactionMatch {
    pub start: usize,
    pub end: usize,
}

impl RedactionMatch {
    pub fn as_str<'a>(&self, haystack: &'a str) -> &'a str {
        &haystack[self.start..self.end]
    }
}

/// Summarizes a sensitive value without revealing it.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

/// Logs one replacement. Both sides go through the PII gate: a shortcut
/// replacement still carries the first and last character of the value.
pub fn log_redaction_action_debug(
    strategy: &str,
    field_name: &str,
    original_sensitive_content: &str,
    replacement: &str,
) {
    debug!(
        "[{}] Redaction action: Original='{}', Redacted='{}' for field '{}'",
        strategy,
        get_loggable_content(original_sensitive_content),
        get_loggable_content(replacement),
        field_name
    );
}
