// logmask-core/src/lib.rs
//! # logmask Core Library
//!
//! `logmask-core` redacts sensitive field values embedded in log text. Callers
//! register *templates* describing how a `field=value` pair looks in a log line and
//! the *field names* that are sensitive; every template is combined with every field
//! into a compiled matcher, and only the captured value is replaced, either with a
//! fixed mask literal or with a short `first-len-last` fingerprint.
//!
//! The library does not parse log lines into a structured model. It works on text
//! and never fails while masking: text without matches, blank text and non-text
//! values pass through unchanged. Misconfiguration fails fast at setup with
//! [`LogmaskError::InvalidConfiguration`].
//!
//! ## Modules
//!
//! * `templates`: the placeholder marker, predefined shapes and the template registry.
//! * `sanitizers`: compiles (template, field) pairs into the ordered `MatcherSet`.
//! * `engine`: the `MaskingStrategy` trait and the shared redaction loop.
//! * `engines`: the `FixedMask` and `Shortcut` strategies.
//! * `decorator`: the `SensitiveDataDecorator` facade.
//! * `config`: YAML-backed `DecoratorConfig`.
//! * `headless`: one-shot masking helper.
//! * `redaction_match`: value spans and PII-safe debug logging.
//! * `errors`: the `LogmaskError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use logmask_core::{PredefinedTemplate, SensitiveDataDecorator};
//!
//! let mut decorator = SensitiveDataDecorator::masking();
//! decorator.add_template(PredefinedTemplate::EqualAndSquareBrackets);
//! decorator.register_field("firstName").unwrap();
//!
//! assert_eq!(
//!     decorator.mask_message("login firstName=[Gustaw]"),
//!     "login firstName=[********]"
//! );
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod decorator;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod redaction_match;
pub mod sanitizers;
pub mod templates;

/// Re-exports the configuration types.
pub use config::{DecoratorConfig, StrategyKind};

/// Re-exports the error type.
pub use errors::LogmaskError;

/// Re-exports the decorator facade.
pub use decorator::{DynDecorator, MaskContext, SensitiveDataDecorator};

/// Re-exports the strategy trait and its implementations.
pub use engine::MaskingStrategy;
pub use engines::fixed_mask::{FixedMask, DEFAULT_MASK};
pub use engines::shortcut::{shortcut, Shortcut};

/// Re-exports template registration types.
pub use templates::{PredefinedTemplate, TemplateRegistry, PROPERTY_NAME_MARKER};

/// Re-exports the compiled matcher types for advanced usage.
pub use sanitizers::compiler::{FieldMatcher, MatcherSet};

pub use headless::headless_mask_string;
