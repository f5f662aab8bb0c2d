//! Course Registrar - in-memory course registration and tuition tracking
//!
//! This library provides the core functionality behind the `registrar`
//! command: courses with fees, students with enrollments and a running
//! balance, and payments subject to a minimum-payment rule. All state lives
//! in memory for the lifetime of the process.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Runtime settings (currency symbol, minimum payment share)
//! - `error`: Custom error types
//! - `models`: Core data models (courses, students, payments, money, ids)
//! - `registry`: The registration system and its in-memory repositories
//! - `audit`: In-memory journal of every change
//! - `display`: Text formatting of operation results
//! - `cli`: The interactive numbered menu
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use registrar::models::Money;
//! use registrar::registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.add_course("CS101", "Programming", Money::from_cents(10000))?;
//! registry.register_student("S1", "Ada Lovelace", "ada@example.com")?;
//! registry.enroll_in_course("S1", "CS101")?;
//!
//! let receipt = registry.calculate_payment("S1", Money::from_cents(4000))?;
//! assert_eq!(receipt.balance, Money::from_cents(6000));
//! # Ok::<(), registrar::RegistrarError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;

pub use error::{RegistrarError, RegistrarResult};
