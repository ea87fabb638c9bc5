// logmask-core/src/engine.rs
//! Defines the `MaskingStrategy` trait and the redaction loop shared by every strategy.
//!
//! A strategy only decides what a sensitive value is replaced with. Finding the
//! values and rebuilding the text is done by [`redact_values`], which applies the
//! matchers one after another: each matcher scans the output of the previous one.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::fmt;

use crate::redaction_match::{log_redaction_action_debug, RedactionMatch};
use crate::sanitizers::compiler::{FieldMatcher, MatcherSet, VALUE_GROUP};

/// A pluggable way of redacting the values captured by a [`MatcherSet`].
///
/// Implementations must be stateless with respect to masking so a configured
/// decorator can be shared across threads.
pub trait MaskingStrategy: Send + Sync + fmt::Debug {
    /// Short identifier used in logs and configuration (`mask`, `shortcut`).
    fn name(&self) -> &'static str;

    /// Returns `message` with every value captured by `matchers` redacted.
    ///
    /// Blank messages are returned unchanged.
    fn mask_message(&self, message: &str, matchers: &MatcherSet) -> String;
}

impl MaskingStrategy for Box<dyn MaskingStrategy> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn mask_message(&self, message: &str, matchers: &MatcherSet) -> String {
        (**self).mask_message(message, matchers)
    }
}

/// True for empty or whitespace-only text.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Applies every matcher in order, replacing each captured value with `replace(value)`.
///
/// All value spans of one matcher are collected before the buffer is touched and the
/// new buffer is rebuilt left to right, so replacements whose length differs from the
/// original never shift the offsets of later matches.
pub fn redact_values<F>(message: &str, matchers: &MatcherSet, strategy: &str, replace: F) -> String
where
    F: Fn(&str) -> String,
{
    if is_blank(message) {
        return message.to_string();
    }

    let mut working = message.to_string();
    let mut total = 0usize;

    for matcher in matchers {
        let spans = find_value_spans(&working, matcher);
        if spans.is_empty() {
            continue;
        }
        total += spans.len();
        working = rebuild(&working, &spans, matcher, strategy, &replace);
    }

    debug!(
        "[{}] Redacted {} value(s) using {} matcher(s).",
        strategy,
        total,
        matchers.len()
    );
    working
}

fn find_value_spans(haystack: &str, matcher: &FieldMatcher) -> Vec<RedactionMatch> {
    matcher
        .regex
        .captures_iter(haystack)
        .filter_map(|caps| caps.get(VALUE_GROUP))
        .map(|value| RedactionMatch {
            start: value.start(),
            end: value.end(),
        })
        .collect()
}

fn rebuild<F>(
    haystack: &str,
    spans: &[RedactionMatch],
    matcher: &FieldMatcher,
    strategy: &str,
    replace: &F,
) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = String::with_capacity(haystack.len());
    let mut last_end = 0usize;

    for span in spans {
        let original = span.as_str(haystack);
        let replacement = replace(original);
        log_redaction_action_debug(strategy, &matcher.field_name, original, &replacement);

        out.push_str(&haystack[last_end..span.start]);
        out.push_str(&replacement);
        last_end = span.end;
    }
    out.push_str(&haystack[last_end..]);
    out
}
