//! Configuration module for the registrar
//!
//! Settings come from built-in defaults, an optional JSON file, and command
//! line overrides, in that order of precedence.

pub mod settings;

pub use settings::Settings;
