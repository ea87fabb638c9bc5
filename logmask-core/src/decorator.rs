// logmask-core/src/decorator.rs
//! The decorator facade: owns the template registry, the matcher set and the active
//! masking strategy, and exposes the single "text in, redacted text out" operation.
//!
//! Configuration methods take `&mut self` and masking methods take `&self`, so once
//! setup is done the decorator can be shared (e.g. behind an `Arc`) by any number of
//! threads without further synchronization.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use serde_json::Value;

use crate::engine::MaskingStrategy;
use crate::engines::fixed_mask::FixedMask;
use crate::engines::shortcut::Shortcut;
use crate::errors::LogmaskError;
use crate::sanitizers::compiler::MatcherSet;
use crate::templates::{PredefinedTemplate, TemplateRegistry};

/// Structural position of a value handed to [`SensitiveDataDecorator::mask`].
///
/// The redaction does not depend on it; it exists so hosts can pass along where a
/// value came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskContext {
    /// JSON pointer of the value inside its event, empty for the root.
    pub pointer: String,
}

impl MaskContext {
    pub fn new(pointer: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
        }
    }

    fn child(&self, segment: &str) -> Self {
        let escaped = segment.replace('~', "~0").replace('/', "~1");
        Self::new(format!("{}/{}", self.pointer, escaped))
    }
}

/// Redacts sensitive field values inside log text.
#[derive(Debug)]
pub struct SensitiveDataDecorator<S: MaskingStrategy = FixedMask> {
    templates: TemplateRegistry,
    matchers: MatcherSet,
    strategy: S,
}

/// A decorator whose strategy is picked at runtime, e.g. from a configuration file.
pub type DynDecorator = SensitiveDataDecorator<Box<dyn MaskingStrategy>>;

impl SensitiveDataDecorator<FixedMask> {
    /// Decorator replacing values with the default mask literal.
    pub fn masking() -> Self {
        Self::new(FixedMask::default())
    }

    /// Replaces the mask literal used for every subsequent call.
    pub fn set_mask_literal(&mut self, literal: impl Into<String>) {
        self.strategy.set_mask(literal);
        debug!("Mask literal updated.");
    }

    pub fn mask_literal(&self) -> &str {
        self.strategy.mask()
    }
}

impl Default for SensitiveDataDecorator<FixedMask> {
    fn default() -> Self {
        Self::masking()
    }
}

impl SensitiveDataDecorator<Shortcut> {
    /// Decorator replacing values with their `first-len-last` fingerprint.
    pub fn shortcut() -> Self {
        Self::new(Shortcut)
    }
}

impl<S: MaskingStrategy> SensitiveDataDecorator<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            matchers: MatcherSet::new(),
            strategy,
        }
    }

    /// Registers one of the predefined templates by its configuration name.
    pub fn add_predefined_template(&mut self, name: &str) -> Result<(), LogmaskError> {
        if self.templates.add_predefined(name)? {
            self.warn_if_late(name);
        }
        Ok(())
    }

    /// Typed counterpart of [`Self::add_predefined_template`].
    pub fn add_template(&mut self, template: PredefinedTemplate) {
        if self.templates.add_predefined(template.name()).unwrap_or(false) {
            self.warn_if_late(template.name());
        }
    }

    /// Registers a custom template containing the `[PROPERTY_NAME]` placeholder.
    pub fn add_custom_template(&mut self, pattern: &str) -> Result<(), LogmaskError> {
        if self.templates.add_custom(pattern)? {
            self.warn_if_late(pattern);
        }
        Ok(())
    }

    /// Expands a sensitive field name against every template registered so far.
    pub fn register_field(&mut self, field_name: &str) -> Result<(), LogmaskError> {
        self.matchers
            .register_field(&self.templates, field_name)
            .map(|_| ())
    }

    fn warn_if_late(&self, template: &str) {
        if !self.matchers.is_empty() {
            warn!(
                "Template '{}' was added after {} matcher(s) were compiled; fields registered earlier will not use it.",
                template,
                self.matchers.len()
            );
        }
    }

    /// Redacts `message` with the active strategy.
    pub fn mask_message(&self, message: &str) -> String {
        self.strategy.mask_message(message, &self.matchers)
    }

    /// Redacts a single value: strings go through the strategy, everything else is
    /// returned as is. `context` is accepted for the host's benefit only.
    pub fn mask(&self, context: &MaskContext, value: Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.mask_message(&text)),
            other => {
                debug!("Value at '{}' is not text, leaving it unchanged.", context.pointer);
                other
            }
        }
    }

    /// Walks a JSON event and masks every leaf value in place of the original.
    pub fn mask_event(&self, event: Value) -> Value {
        self.mask_tree(&MaskContext::default(), event)
    }

    fn mask_tree(&self, context: &MaskContext, value: Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, child)| {
                        let masked = self.mask_tree(&context.child(&key), child);
                        (key, masked)
                    })
                    .collect(),
            ),
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, child)| self.mask_tree(&context.child(&i.to_string()), child))
                    .collect(),
            ),
            leaf => self.mask(context, leaf),
        }
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn matchers(&self) -> &MatcherSet {
        &self.matchers
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<S: MaskingStrategy + 'static> SensitiveDataDecorator<S> {
    /// Erases the strategy type, keeping templates and matchers.
    pub fn into_dyn(self) -> DynDecorator {
        SensitiveDataDecorator {
            templates: self.templates,
            matchers: self.matchers,
            strategy: Box::new(self.strategy),
        }
    }
}
