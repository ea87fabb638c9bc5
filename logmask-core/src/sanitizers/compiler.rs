//! compiler.rs - Expands templates into compiled, field-specific matchers.
//!
//! The marker in a template is replaced by `(<field>)`, so capture group 1 is the
//! field name occurrence and capture group 2 is the sensitive value. The field name
//! is escaped before substitution and therefore always matches literally.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::LogmaskError;
use crate::templates::{TemplateRegistry, PROPERTY_NAME_MARKER};

/// Field name substituted into a custom template to check it at registration time.
const PROBE_FIELD_NAME: &str = "probe";

/// Upper bound for the compiled size of a single matcher.
const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Capture group holding the sensitive value.
pub const VALUE_GROUP: usize = 2;

/// A template materialized for one field name.
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    /// The compiled expression; group 2 is the value to redact.
    pub regex: Regex,
    /// The raw template this matcher was built from.
    pub template: String,
    /// The field name substituted into the template.
    pub field_name: String,
}

impl FieldMatcher {
    fn same_origin(&self, template: &str, field_name: &str) -> bool {
        self.template == template && self.field_name == field_name
    }
}

/// Ordered, duplicate-free collection of compiled matchers.
///
/// Built during setup and read-only afterwards; strategies receive it by reference.
#[derive(Debug, Default, Clone)]
pub struct MatcherSet {
    matchers: Vec<FieldMatcher>,
}

impl MatcherSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands `field_name` against every registered template.
    ///
    /// Fails when no template has been registered yet. Pairs that were already
    /// compiled are skipped; returns the number of new matchers.
    pub fn register_field(
        &mut self,
        templates: &TemplateRegistry,
        field_name: &str,
    ) -> Result<usize, LogmaskError> {
        if templates.is_empty() {
            return Err(LogmaskError::no_templates_registered());
        }

        let mut added = 0;
        for template in templates.iter() {
            if self.contains(template, field_name) {
                debug!(
                    "Matcher for field '{}' and template '{}' already exists.",
                    field_name, template
                );
                continue;
            }
            self.matchers.push(compile_matcher(template, field_name)?);
            added += 1;
        }

        debug!(
            "Field '{}' registered with {} new matcher(s); {} matcher(s) in total.",
            field_name,
            added,
            self.matchers.len()
        );
        Ok(added)
    }

    pub fn contains(&self, template: &str, field_name: &str) -> bool {
        self.matchers.iter().any(|m| m.same_origin(template, field_name))
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Matchers in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldMatcher> {
        self.matchers.iter()
    }
}

impl<'a> IntoIterator for &'a MatcherSet {
    type Item = &'a FieldMatcher;
    type IntoIter = std::slice::Iter<'a, FieldMatcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Substitutes the escaped field name, wrapped in a capture group, for the marker.
pub fn expand_template(template: &str, field_name: &str) -> String {
    template.replace(
        PROPERTY_NAME_MARKER,
        &format!("({})", regex::escape(field_name)),
    )
}

/// Compiles one (template, field) pair.
pub fn compile_matcher(template: &str, field_name: &str) -> Result<FieldMatcher, LogmaskError> {
    let pattern = expand_template(template, field_name);
    debug!(
        "Compiling matcher for field '{}' with pattern '{}'.",
        field_name, pattern
    );

    let regex = RegexBuilder::new(&pattern)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .map_err(|e| {
            LogmaskError::InvalidConfiguration(format!(
                "Failed to compile template '{}' for field '{}': {}",
                template, field_name, e
            ))
        })?;

    // captures_len counts the implicit whole-match group 0.
    if regex.captures_len() <= VALUE_GROUP {
        return Err(LogmaskError::incorrect_template(format!(
            "template '{}' has no capture group for the value",
            template
        )));
    }

    Ok(FieldMatcher {
        regex,
        template: template.to_string(),
        field_name: field_name.to_string(),
    })
}

/// Checks a custom template before it is stored.
pub fn validate_template(template: &str) -> Result<(), LogmaskError> {
    if template.matches(PROPERTY_NAME_MARKER).count() != 1 {
        return Err(LogmaskError::incorrect_template(
            "placeholder must appear exactly once",
        ));
    }
    compile_matcher(template, PROBE_FIELD_NAME).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::PredefinedTemplate;

    fn registry(names: &[&str]) -> TemplateRegistry {
        let mut registry = TemplateRegistry::new();
        for name in names {
            registry.add_predefined(name).unwrap();
        }
        registry
    }

    #[test]
    fn test_expand_template_wraps_field_in_group() {
        let expanded = expand_template(PredefinedTemplate::EqualAndSquareBrackets.template(), "firstName");
        assert_eq!(expanded, r"(firstName)=\[([^\[\]]+)\]");
    }

    #[test]
    fn test_expand_template_escapes_metacharacters() {
        let expanded = expand_template("[PROPERTY_NAME]=(\\S+)", "user.name");
        assert_eq!(expanded, r"(user\.name)=(\S+)");
    }

    #[test]
    fn test_compiled_groups() {
        let matcher = compile_matcher(PredefinedTemplate::Json.template(), "firstName").unwrap();
        let caps = matcher.regex.captures(r#"{"firstName":"Gustaw"}"#).unwrap();
        assert_eq!(&caps[1], "firstName");
        assert_eq!(&caps[VALUE_GROUP], "Gustaw");
    }

    #[test]
    fn test_register_field_requires_templates() {
        let mut set = MatcherSet::new();
        let err = set.register_field(&TemplateRegistry::new(), "firstName").unwrap_err();
        assert!(err.to_string().contains("no templates registered yet"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_register_field_expands_every_template() {
        let templates = registry(&["JSON", "EQUAL_AND_BRACKETS"]);
        let mut set = MatcherSet::new();
        assert_eq!(set.register_field(&templates, "firstName").unwrap(), 2);
        assert_eq!(set.register_field(&templates, "mobilePhone").unwrap(), 2);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_register_field_is_idempotent() {
        let templates = registry(&["JSON"]);
        let mut set = MatcherSet::new();
        set.register_field(&templates, "firstName").unwrap();
        assert_eq!(set.register_field(&templates, "firstName").unwrap(), 0);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let templates = registry(&["EQUAL_AND_BRACKETS", "JSON"]);
        let mut set = MatcherSet::new();
        set.register_field(&templates, "b").unwrap();
        set.register_field(&templates, "a").unwrap();
        let order: Vec<(&str, &str)> = set
            .iter()
            .map(|m| (m.field_name.as_str(), m.template.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("b", PredefinedTemplate::EqualAndBrackets.template()),
                ("b", PredefinedTemplate::Json.template()),
                ("a", PredefinedTemplate::EqualAndBrackets.template()),
                ("a", PredefinedTemplate::Json.template()),
            ]
        );
    }

    #[test]
    fn test_validate_template_rejects_double_marker() {
        assert!(validate_template("[PROPERTY_NAME]=([^ ]+) [PROPERTY_NAME]").is_err());
    }
}
