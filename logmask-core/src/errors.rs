//! errors.rs - Custom error types for the logmask-core library.
//!
//! Every misconfiguration surfaces as [`LogmaskError::InvalidConfiguration`] at the
//! call that violates the contract. Masking itself never fails.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use crate::templates::{PredefinedTemplate, PROPERTY_NAME_MARKER};

/// All error types produced by `logmask-core`.
///
/// `#[non_exhaustive]` so new variants can be added without breaking callers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LogmaskError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to parse decorator configuration: {0}")]
    ConfigParse(#[from] serde_yml::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

impl LogmaskError {
    /// Error raised for a blank or unknown predefined template name.
    pub fn unknown_predefined_template() -> Self {
        let names = PredefinedTemplate::ALL
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(",");
        Self::InvalidConfiguration(format!(
            "Unknown name. You can use the following predefined pattern names [{}]",
            names
        ))
    }

    /// Error raised for a custom template that cannot be used.
    pub fn incorrect_template(reason: impl AsRef<str>) -> Self {
        Self::InvalidConfiguration(format!(
            "Pattern must be a valid regular expression containing the placeholder {} where the \
             field name appears, followed by a capture group around the sensitive value ({})",
            PROPERTY_NAME_MARKER,
            reason.as_ref()
        ))
    }

    /// Error raised when a field is registered before any template.
    pub fn no_templates_registered() -> Self {
        Self::InvalidConfiguration(
            "no templates registered yet; add the templates before the sensitive field names"
                .to_string(),
        )
    }
}
