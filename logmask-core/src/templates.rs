//! Pattern template registry.
//!
//! A template is a regular expression in which the literal token
//! [`PROPERTY_NAME_MARKER`] stands for the sensitive field name. Templates are
//! stored as raw strings and only compiled once a field name is known (see
//! [`crate::sanitizers::compiler`]).
//!
//! License: MIT OR Apache-2.0

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::LogmaskError;
use crate::sanitizers::compiler::validate_template;

/// The placeholder a template uses to mark where the field name goes.
pub const PROPERTY_NAME_MARKER: &str = "[PROPERTY_NAME]";

/// The built-in log shapes a field/value pair can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredefinedTemplate {
    /// `"field":"value"`
    Json,
    /// `field=[value]`
    EqualAndSquareBrackets,
    /// `field=(value)`
    EqualAndBrackets,
    /// `field="value"`
    EqualAndDoubleQuotes,
}

impl PredefinedTemplate {
    /// Every predefined template, in declaration order.
    pub const ALL: [PredefinedTemplate; 4] = [
        PredefinedTemplate::Json,
        PredefinedTemplate::EqualAndSquareBrackets,
        PredefinedTemplate::EqualAndBrackets,
        PredefinedTemplate::EqualAndDoubleQuotes,
    ];

    /// The configuration name of the template.
    pub fn name(&self) -> &'static str {
        match self {
            PredefinedTemplate::Json => "JSON",
            PredefinedTemplate::EqualAndSquareBrackets => "EQUAL_AND_SQUARE_BRACKETS",
            PredefinedTemplate::EqualAndBrackets => "EQUAL_AND_BRACKETS",
            PredefinedTemplate::EqualAndDoubleQuotes => "EQUAL_AND_DOUBLE_QUOTES",
        }
    }

    /// The raw template string. The value group never crosses its own delimiter.
    pub fn template(&self) -> &'static str {
        match self {
            PredefinedTemplate::Json => r#""[PROPERTY_NAME]":"([^"]*)""#,
            PredefinedTemplate::EqualAndSquareBrackets => r"[PROPERTY_NAME]=\[([^\[\]]+)\]",
            PredefinedTemplate::EqualAndBrackets => r"[PROPERTY_NAME]=\(([^()]+)\)",
            PredefinedTemplate::EqualAndDoubleQuotes => r#"[PROPERTY_NAME]="([^"]+)""#,
        }
    }
}

impl fmt::Display for PredefinedTemplate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PredefinedTemplate {
    type Err = LogmaskError;

    /// Exact, case-sensitive lookup by configuration name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PredefinedTemplate::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(LogmaskError::unknown_predefined_template)
    }
}

/// Ordered set of raw template strings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    templates: Vec<String>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a predefined template by its configuration name.
    ///
    /// Returns `true` when the template was not registered before.
    pub fn add_predefined(&mut self, name: &str) -> Result<bool, LogmaskError> {
        if name.trim().is_empty() {
            return Err(LogmaskError::unknown_predefined_template());
        }
        let predefined: PredefinedTemplate = name.parse()?;
        Ok(self.insert(predefined.template()))
    }

    /// Registers a caller-supplied template.
    ///
    /// The pattern must contain [`PROPERTY_NAME_MARKER`] and compile, once a field
    /// name is substituted, into a regex whose second group is the value.
    pub fn add_custom(&mut self, pattern: &str) -> Result<bool, LogmaskError> {
        if pattern.trim().is_empty() {
            return Err(LogmaskError::incorrect_template("pattern is blank"));
        }
        if !pattern.contains(PROPERTY_NAME_MARKER) {
            return Err(LogmaskError::incorrect_template("placeholder is missing"));
        }
        validate_template(pattern)?;
        Ok(self.insert(pattern))
    }

    fn insert(&mut self, template: &str) -> bool {
        if self.templates.iter().any(|t| t == template) {
            debug!("Template '{}' already registered, skipping.", template);
            return false;
        }
        debug!("Registered template '{}'.", template);
        self.templates.push(template.to_string());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(String::as_str)
    }
}
