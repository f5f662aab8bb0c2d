//! Custom error types for the registrar
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::money::{Money, MoneyParseError};

/// The main error type for registrar operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrarError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File or terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed numeric input
    #[error("Invalid amount: {0}")]
    Parse(String),

    /// Balance arithmetic left the representable range
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate id errors
    #[error("{entity_type} with this ID already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Payment below the minimum share of the outstanding balance
    #[error("Minimum payment is {percent}% of the balance ({minimum}), got {offered}")]
    InvalidPayment {
        percent: u32,
        minimum: Money,
        offered: Money,
    },
}

impl RegistrarError {
    /// Create a "not found" error for courses
    pub fn course_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Course",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for students
    pub fn student_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Student",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate id" error for courses
    pub fn duplicate_course(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Course",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate id" error for students
    pub fn duplicate_student(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Student",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a "duplicate id" error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is a rejected payment
    pub fn is_invalid_payment(&self) -> bool {
        matches!(self, Self::InvalidPayment { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for RegistrarError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<MoneyParseError> for RegistrarError {
    fn from(err: MoneyParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for registrar operations
pub type RegistrarResult<T> = Result<T, RegistrarError>;
