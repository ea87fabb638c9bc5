//! Configuration management for `logmask-core`.
//!
//! A [`DecoratorConfig`] describes a decorator declaratively (strategy, mask literal,
//! templates, fields) and can be loaded from YAML. [`DecoratorConfig::build`] replays
//! it through the decorator's configuration methods, templates first, so every
//! contract check applies exactly as it does for programmatic setup.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::decorator::{DynDecorator, SensitiveDataDecorator};
use crate::engine::MaskingStrategy;
use crate::engines::fixed_mask::FixedMask;
use crate::engines::shortcut::Shortcut;
use crate::errors::LogmaskError;

/// Which masking strategy a configured decorator uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Replace values with the mask literal.
    #[default]
    Mask,
    /// Replace values with their `first-len-last` fingerprint.
    Shortcut,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StrategyKind::Mask => f.write_str("mask"),
            StrategyKind::Shortcut => f.write_str("shortcut"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = LogmaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mask" => Ok(StrategyKind::Mask),
            "shortcut" => Ok(StrategyKind::Shortcut),
            other => Err(LogmaskError::InvalidConfiguration(format!(
                "Unknown strategy '{}'. Valid strategies are [mask,shortcut]",
                other
            ))),
        }
    }
}

/// Declarative description of a decorator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoratorConfig {
    pub strategy: StrategyKind,
    /// `None` when absent, `Some(None)` for an explicit `null`.
    #[serde(
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub mask: Option<Option<String>>,
    /// Names of predefined templates.
    pub templates: Vec<String>,
    /// Custom templates containing `[PROPERTY_NAME]`.
    pub custom_templates: Vec<String>,
    /// Sensitive field names.
    pub fields: Vec<String>,
}

/// Marks a present key as `Some`, keeping an explicit null distinguishable from absence.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl DecoratorConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LogmaskError> {
        let path = path.as_ref();
        info!("Loading decorator configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        info!(
            "Loaded {} template(s), {} custom template(s) and {} field(s) from {}.",
            config.templates.len(),
            config.custom_templates.len(),
            config.fields.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, LogmaskError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Loads the embedded default: every predefined template, no fields.
    pub fn load_default() -> Result<Self, LogmaskError> {
        debug!("Loading default decorator configuration from embedded string...");
        Self::from_yaml_str(include_str!("../config/default_decorator.yaml"))
    }

    /// Builds a decorator, failing on the first configuration error.
    pub fn build(&self) -> Result<DynDecorator, LogmaskError> {
        let strategy: Box<dyn MaskingStrategy> = match (self.strategy, &self.mask) {
            (_, Some(None)) => {
                return Err(LogmaskError::InvalidConfiguration(
                    "Mask cannot be set as null".to_string(),
                ))
            }
            (StrategyKind::Mask, Some(Some(mask))) => Box::new(FixedMask::new(mask.as_str())),
            (StrategyKind::Mask, None) => Box::new(FixedMask::default()),
            (StrategyKind::Shortcut, Some(Some(_))) => {
                return Err(LogmaskError::InvalidConfiguration(
                    "A mask literal can only be used with the 'mask' strategy".to_string(),
                ))
            }
            (StrategyKind::Shortcut, None) => Box::new(Shortcut),
        };

        let mut decorator = SensitiveDataDecorator::new(strategy);
        for name in &self.templates {
            decorator.add_predefined_template(name)?;
        }
        for pattern in &self.custom_templates {
            decorator.add_custom_template(pattern)?;
        }
        for field in &self.fields {
            decorator.register_field(field)?;
        }

        debug!(
            "Built '{}' decorator with {} matcher(s).",
            self.strategy,
            decorator.matchers().len()
        );
        Ok(decorator)
    }
}
