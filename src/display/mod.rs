//! Display formatting for terminal output
//!
//! Turns registry results into the text shown to the operator. Every
//! function returns a `String`; printing is up to the caller.

pub mod course;
pub mod history;
pub mod student;

use crate::config::Settings;
use crate::error::RegistrarError;

pub use course::{format_course_added, format_course_list, format_course_roster};
pub use history::format_history;
pub use student::{
    format_balance, format_enrollment, format_payment_receipt, format_student_list,
    format_student_registered,
};

/// Display width of a cell, in characters
fn width(s: &str) -> usize {
    s.chars().count()
}

/// Widest cell in a column, never narrower than its header
fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(width).max().unwrap_or(0).max(width(header))
}

/// Format an operation failure for the operator
///
/// Amounts inside the error are shown with the configured currency symbol.
pub fn format_error(err: &RegistrarError, settings: &Settings) -> String {
    match err {
        RegistrarError::InvalidPayment {
            percent,
            minimum,
            offered,
        } => format!(
            "Error: Minimum payment is {}% of the balance ({}), got {}",
            percent,
            settings.format_money(*minimum),
            settings.format_money(*offered)
        ),
        other => format!("Error: {}", other),
    }
}
