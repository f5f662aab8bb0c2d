//! Student display formatting
//!
//! Confirmation lines for registration, enrollment and payment, the balance
//! report, and the registered-student table.

use super::column_width;
use crate::config::Settings;
use crate::models::{EnrollmentOutcome, Student};
use crate::registry::{BalanceSummary, Enrollment, PaymentReceipt};

/// Confirmation shown after a student registers
pub fn format_student_registered(student: &Student) -> String {
    format!("Student {} registered successfully.", student.name)
}

/// Result of an enrollment request
pub fn format_enrollment(enrollment: &Enrollment, settings: &Settings) -> String {
    match enrollment.outcome {
        EnrollmentOutcome::Enrolled { balance } => format!(
            "Enrolled in {}. Total balance is now {}.",
            enrollment.course_name,
            settings.format_money(balance)
        ),
        EnrollmentOutcome::AlreadyEnrolled => "Already enrolled in this course.".to_string(),
    }
}

/// Confirmation shown after a payment is accepted
pub fn format_payment_receipt(receipt: &PaymentReceipt, settings: &Settings) -> String {
    format!(
        "Payment of {} received. Outstanding balance is now {}.",
        settings.format_money(receipt.amount),
        settings.format_money(receipt.balance)
    )
}

/// A student's balance report
pub fn format_balance(summary: &BalanceSummary, settings: &Settings) -> String {
    let mut output = format!(
        "Balance for {}: {}\n",
        summary.name,
        settings.format_money(summary.balance)
    );
    output.push_str(&format!(
        "  Total fees:  {}\n",
        settings.format_money(summary.total_fees)
    ));
    output.push_str(&format!(
        "  Total paid:  {}\n",
        settings.format_money(summary.total_paid)
    ));
    output
}

/// Format all registered students as a table
pub fn format_student_list(students: &[Student], settings: &Settings) -> String {
    let mut output = String::from("Registered Students:\n");
    if students.is_empty() {
        output.push_str("No students registered.\n");
        return output;
    }

    let balances: Vec<String> = students
        .iter()
        .map(|s| settings.format_money(s.balance))
        .collect();

    let id_width = column_width("ID", students.iter().map(|s| s.id.as_str()));
    let name_width = column_width("Name", students.iter().map(|s| s.name.as_str()));
    let email_width = column_width("Email", students.iter().map(|s| s.email.as_str()));
    let balance_width = column_width("Balance", balances.iter().map(String::as_str));

    output.push_str(&format!(
        "{:<id_width$}  {:<name_width$}  {:<email_width$}  {:>7}  {:>balance_width$}\n",
        "ID", "Name", "Email", "Courses", "Balance",
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:-<name_width$}  {:-<email_width$}  {:->7}  {:->balance_width$}\n",
        "", "", "", "", "",
    ));

    for (student, balance) in students.iter().zip(&balances) {
        output.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {:<email_width$}  {:>7}  {:>balance_width$}\n",
            student.id.as_str(),
            student.name,
            student.email,
            student.enrolled_courses.len(),
            balance,
        ));
    }

    output
}
