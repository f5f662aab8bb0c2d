//! Course model
//!
//! A course offering with a fixed tuition fee. Courses are immutable once
//! added to the registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CourseId;
use super::money::Money;

/// A course offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Operator-supplied unique identifier
    pub id: CourseId,

    /// Course name (e.g., "Intro to Programming")
    pub name: String,

    /// Tuition fee charged on enrollment
    pub fee: Money,

    /// When the course was added
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Create a new course
    pub fn new(id: CourseId, name: impl Into<String>, fee: Money) -> Self {
        Self {
            id,
            name: name.into(),
            fee,
            created_at: Utc::now(),
        }
    }

    /// Validate the course
    ///
    /// Only the fee is checked; names are taken as entered.
    pub fn validate(&self) -> Result<(), CourseValidationError> {
        if self.fee.is_negative() {
            return Err(CourseValidationError::NegativeFee(self.fee));
        }

        Ok(())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Validation errors for courses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseValidationError {
    NegativeFee(Money),
}

impl fmt::Display for CourseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeFee(fee) => write!(f, "Course fee cannot be negative: {}", fee),
        }
    }
}

impl std::error::Error for CourseValidationError {}
