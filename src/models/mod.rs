//! Core data models for the registrar
//!
//! This module contains the data structures that represent the registration
//! domain: courses, students, payments, and the money and id types they share.

pub mod course;
pub mod ids;
pub mod money;
pub mod payment;
pub mod student;

pub use course::{Course, CourseValidationError};
pub use ids::{CourseId, StudentId};
pub use money::{Money, MoneyParseError};
pub use payment::Payment;
pub use student::{EnrollmentOutcome, Student};
