//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic business failures only (validation, bad identifiers,
/// missing records). Transport failures towards the billing backend are modelled
/// by the invoicing crate's submission errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more fields failed validation. Messages are user-facing.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record (or line item index) does not exist.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    /// Single-message validation failure.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }

    /// Validation failure carrying every collected field message.
    pub fn validation_all(messages: Vec<String>) -> Self {
        Self::Validation(messages)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Validation messages, if this is a validation failure.
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Validation(messages) => messages,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_joins_all_messages() {
        let err = DomainError::validation_all(vec![
            "Company Name is required.".to_string(),
            "Please add at least one line item.".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: Company Name is required.; Please add at least one line item."
        );
        assert_eq!(err.messages().len(), 2);
    }

    #[test]
    fn non_validation_errors_have_no_messages() {
        assert!(DomainError::not_found().messages().is_empty());
        let err = DomainError::invalid_id("InvoiceId: abc");
        assert!(err.messages().is_empty());
        assert_eq!(err.to_string(), "invalid identifier: InvoiceId: abc");
    }
}
