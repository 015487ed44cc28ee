//! Catalog domain errors
//!
//! `DataValidationError` is the single error kind for malformed input and
//! precondition failures. It is always raised before the store is touched.
//! `CatalogError` is what persistence operations return: either a validation
//! failure or the port's own error, passed through unchanged.

use thiserror::Error;

use core_kernel::PortError;

/// Input validation and precondition failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataValidationError {
    /// The transport payload was absent or not a mapping
    #[error("Invalid type for Product: body of request contained bad or no data")]
    EmptyBody,

    /// A required key was missing from the transport payload
    #[error("Invalid product: missing {0}")]
    MissingAttribute(String),

    /// A value had the right type but an unacceptable content
    #[error("Invalid attribute [{attribute}]: {reason}")]
    InvalidAttribute { attribute: String, reason: String },

    /// A value had the wrong JSON type
    #[error("Invalid type for {expected} [{attribute}]: {found}")]
    InvalidType {
        attribute: String,
        expected: String,
        found: String,
    },

    /// The category name is not a member of the closed set
    #[error("Invalid attribute [category]: unknown Category '{0}'")]
    InvalidCategory(String),

    /// The price is not a decimal amount the catalog can store exactly
    #[error("Invalid attribute [price]: '{0}' is not a price with at most 2 decimal places below 10^12")]
    InvalidPrice(String),

    /// Update was requested for a product that was never persisted
    #[error("Update called with empty ID field")]
    MissingId,
}

impl DataValidationError {
    pub fn missing(attribute: impl Into<String>) -> Self {
        DataValidationError::MissingAttribute(attribute.into())
    }

    pub fn invalid(attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        DataValidationError::InvalidAttribute {
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }

    pub fn wrong_type(
        attribute: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        DataValidationError::InvalidType {
            attribute: attribute.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Name of the offending attribute, when the error concerns one
    pub fn attribute(&self) -> Option<&str> {
        match self {
            DataValidationError::MissingAttribute(attribute) => Some(attribute),
            DataValidationError::InvalidAttribute { attribute, .. } => Some(attribute),
            DataValidationError::InvalidType { attribute, .. } => Some(attribute),
            DataValidationError::InvalidCategory(_) => Some("category"),
            DataValidationError::InvalidPrice(_) => Some("price"),
            DataValidationError::MissingId => Some("id"),
            DataValidationError::EmptyBody => None,
        }
    }
}

/// Errors returned by catalog operations that reach the store
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] DataValidationError),

    #[error(transparent)]
    Port(#[from] PortError),
}

impl CatalogError {
    /// Returns the validation failure, if this is one
    pub fn as_validation(&self) -> Option<&DataValidationError> {
        match self {
            CatalogError::Validation(error) => Some(error),
            CatalogError::Port(_) => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }
}
