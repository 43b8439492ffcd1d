use thiserror::Error;

/// Field name reported for the `Organization` attribute.
pub const ORGANIZATION_FIELD: &str = "Organization";

/// Validation errors for notice references.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A mandatory value is absent.
    #[error("{field} is a required attribute")]
    RequiredValueMissing {
        /// Field name that is missing.
        field: &'static str,
    },
}

impl ValidationError {
    /// Stable code for aggregate reports.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::RequiredValueMissing { .. } => "RequiredValueMissing",
        }
    }

    /// Name of the field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::RequiredValueMissing { field } => *field,
        }
    }
}

/// Checks that an organization value is present.
///
/// Both the guarded setter and `validate()` go through this rule.
pub fn require_organization(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::RequiredValueMissing {
            field: ORGANIZATION_FIELD,
        }),
    }
}
