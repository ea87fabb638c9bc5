// logmask-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use logmask_core::config::{DecoratorConfig, StrategyKind};
use logmask_core::{headless_mask_string, LogmaskError};

fn write_config(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test_log::test]
fn test_load_from_file_and_build() -> Result<()> {
    let file = write_config(
        r#"
strategy: shortcut
fields:
  - firstName
  - mobilePhone
templates:
  - JSON
custom_templates:
  - "[PROPERTY_NAME]==>'([^']+)'"
"#,
    )?;
    let config = DecoratorConfig::load_from_file(file.path())?;
    assert_eq!(config.strategy, StrategyKind::Shortcut);
    assert_eq!(config.fields, vec!["firstName", "mobilePhone"]);

    // Fields are listed before templates in the file, templates still come first.
    let decorator = config.build()?;
    assert_eq!(decorator.matchers().len(), 4);
    assert_eq!(
        decorator.mask_message(r#"{"firstName":"Gustaw"} mobilePhone==>'+48123123123'"#),
        r#"{"firstName":"G-6-w"} mobilePhone==>'+-12-3'"#
    );
    Ok(())
}

#[test]
fn test_custom_mask_literal() -> Result<()> {
    let config = DecoratorConfig::from_yaml_str(
        r#"
mask: "*SENSITIVE*DATA*"
templates: [EQUAL_AND_SQUARE_BRACKETS, JSON]
fields: [firstName, email]
"#,
    )?;
    let masked = headless_mask_string(
        &config,
        r#"Something firstName=[test] with payload: {"email":"test@github.io"}"#,
    )?;
    assert_eq!(
        masked,
        r#"Something firstName=[*SENSITIVE*DATA*] with payload: {"email":"*SENSITIVE*DATA*"}"#
    );
    Ok(())
}

#[test]
fn test_null_mask_is_rejected() -> Result<()> {
    let config = DecoratorConfig::from_yaml_str("mask: null\ntemplates: [JSON]\n")?;
    let err = config.build().unwrap_err();
    assert!(matches!(err, LogmaskError::InvalidConfiguration(ref msg) if msg.contains("null")));
    Ok(())
}

#[test]
fn test_mask_with_shortcut_strategy_is_rejected() -> Result<()> {
    let config = DecoratorConfig::from_yaml_str("strategy: shortcut\nmask: xx\n")?;
    assert!(matches!(
        config.build(),
        Err(LogmaskError::InvalidConfiguration(_))
    ));
    Ok(())
}

#[test]
fn test_fields_without_templates_are_rejected() -> Result<()> {
    let config = DecoratorConfig::from_yaml_str("fields: [firstName]\n")?;
    let err = config.build().unwrap_err();
    assert!(err.to_string().contains("no templates registered yet"));
    Ok(())
}

#[test]
fn test_unknown_template_name_is_rejected() -> Result<()> {
    let config = DecoratorConfig::from_yaml_str("templates: [XML]\n")?;
    let err = config.build().unwrap_err();
    assert!(err.to_string().contains("EQUAL_AND_DOUBLE_QUOTES"));
    Ok(())
}

#[test]
fn test_custom_template_without_marker_is_rejected() -> Result<()> {
    let config = DecoratorConfig::from_yaml_str("custom_templates: [\"name=([^ ]+)\"]\n")?;
    assert!(config.build().is_err());
    Ok(())
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = DecoratorConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(matches!(err, LogmaskError::IoError(_)));
}

#[test]
fn test_malformed_yaml_is_a_parse_error() {
    let err = DecoratorConfig::from_yaml_str("templates: [JSON").unwrap_err();
    assert!(matches!(err, LogmaskError::ConfigParse(_)));
}

#[test]
fn test_config_serializes_back_to_yaml() -> Result<()> {
    let config = DecoratorConfig {
        strategy: StrategyKind::Mask,
        mask: Some(Some("###".to_string())),
        templates: vec!["JSON".to_string()],
        custom_templates: Vec::new(),
        fields: vec!["firstName".to_string()],
    };
    let yaml = serde_yml::to_string(&config)?;
    assert_eq!(DecoratorConfig::from_yaml_str(&yaml)?, config);
    Ok(())
}
