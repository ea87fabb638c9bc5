//! Compilation of raw templates into field-scoped matchers.
//!
//! Templates stay plain strings until a field name is registered; this module turns
//! each (template, field) pair into a ready-to-run regular expression and keeps the
//! resulting matchers in registration order.

pub mod compiler;
