// File: logmask-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for one-shot masking of a string straight from a
//! [`DecoratorConfig`], without keeping a decorator around.

use anyhow::{Context, Result};
use crate::config::DecoratorConfig;

/// Builds a decorator from `config` and masks `content` with it.
///
/// Building compiles every matcher, so callers masking more than one message should
/// build the decorator once with [`DecoratorConfig::build`] instead.
pub fn headless_mask_string(config: &DecoratorConfig, content: &str) -> Result<String> {
    let decorator = config
        .build()
        .context("Failed to build decorator from configuration")?;
    Ok(decorator.mask_message(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StrategyKind;

    #[test]
    fn test_headless_mask_string_shortcut() -> Result<()> {
        let config = DecoratorConfig {
            strategy: StrategyKind::Shortcut,
            templates: vec!["EQUAL_AND_DOUBLE_QUOTES".to_string()],
            fields: vec!["mobilePhone".to_string()],
            ..Default::default()
        };

        let masked = headless_mask_string(&config, r#"user mobilePhone="+48123123123" updated"#)?;
        assert_eq!(masked, r#"user mobilePhone="+-12-3" updated"#);
        Ok(())
    }

    #[test]
    fn test_headless_mask_string_reports_configuration_errors() {
        let config = DecoratorConfig {
            fields: vec!["firstName".to_string()],
            ..Default::default()
        };
        let err = headless_mask_string(&config, "firstName=[Gustaw]").unwrap_err();
        assert!(format!("{:#}", err).contains("no templates registered yet"));
    }
}
