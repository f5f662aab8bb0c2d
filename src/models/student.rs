//! Student model
//!
//! A registered student with their enrollments, running balance and payment
//! history. Enrollments reference courses by id; the registry resolves them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::course::Course;
use super::ids::{CourseId, StudentId};
use super::money::Money;
use super::payment::Payment;
use crate::error::{RegistrarError, RegistrarResult};

/// Result of asking a student to enroll in a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum EnrollmentOutcome {
    /// Newly enrolled; carries the balance after the fee was charged
    Enrolled { balance: Money },
    /// Already enrolled in this course; nothing changed
    AlreadyEnrolled,
}

/// A registered student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Operator-supplied unique identifier
    pub id: StudentId,

    /// Full name
    pub name: String,

    /// Contact email, stored as entered
    pub email: String,

    /// Enrolled courses in enrollment order, no duplicates
    #[serde(default)]
    pub enrolled_courses: Vec<CourseId>,

    /// Outstanding amount owed
    #[serde(default)]
    pub balance: Money,

    /// Payments received, oldest first
    #[serde(default)]
    pub payments: Vec<Payment>,

    /// When the student was registered
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Create a new student with no enrollments and a zero balance
    pub fn new(id: StudentId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            enrolled_courses: Vec::new(),
            balance: Money::zero(),
            payments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Check whether the student is enrolled in a course
    pub fn is_enrolled_in(&self, course_id: &CourseId) -> bool {
        self.enrolled_courses.contains(course_id)
    }

    /// Enroll in a course, charging its fee
    ///
    /// Enrolling twice in the same course is a no-op reported as
    /// [`EnrollmentOutcome::AlreadyEnrolled`]. If charging the fee would
    /// overflow the balance, nothing changes and an error is returned.
    pub fn enroll(&mut self, course: &Course) -> RegistrarResult<EnrollmentOutcome> {
        if self.is_enrolled_in(&course.id) {
            return Ok(EnrollmentOutcome::AlreadyEnrolled);
        }

        let balance = self.balance.checked_add(course.fee).ok_or_else(|| {
            RegistrarError::AmountOutOfRange(format!(
                "enrolling in {} would overflow the balance",
                course.id
            ))
        })?;

        self.enrolled_courses.push(course.id.clone());
        self.balance = balance;
        Ok(EnrollmentOutcome::Enrolled { balance })
    }

    /// Sum of fees of all enrolled courses
    ///
    /// `resolve` looks a course up by id; ids it cannot resolve contribute nothing.
    pub fn total_fee<'a, F>(&self, resolve: F) -> RegistrarResult<Money>
    where
        F: Fn(&CourseId) -> Option<&'a Course>,
    {
        let fees = self
            .enrolled_courses
            .iter()
            .filter_map(|id| resolve(id))
            .map(|course| course.fee);
        Money::checked_sum(fees)
            .ok_or_else(|| RegistrarError::AmountOutOfRange("total course fees".into()))
    }

    /// Sum of all payments received
    pub fn total_paid(&self) -> RegistrarResult<Money> {
        Money::checked_sum(self.payments.iter().map(|p| p.amount))
            .ok_or_else(|| RegistrarError::AmountOutOfRange("total payments".into()))
    }

    /// Subtract a payment from the balance and record it
    ///
    /// No floor is applied: overpaying leaves a negative balance (a credit).
    /// If the subtraction would overflow, nothing changes and an error is
    /// returned.
    pub fn apply_payment(&mut self, amount: Money) -> RegistrarResult<&Payment> {
        let balance = self.balance.checked_sub(amount).ok_or_else(|| {
            RegistrarError::AmountOutOfRange("payment would overflow the balance".into())
        })?;

        self.balance = balance;
        self.payments.push(Payment::new(amount, balance));
        Ok(&self.payments[self.payments.len() - 1])
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, cents: i64) -> Course {
        Course::new(CourseId::new(id), id, Money::from_cents(cents))
    }

    fn student() -> Student {
        Student::new(StudentId::new("S1"), "Ada Lovelace", "ada@example.com")
    }

    #[test]
    fn test_new_student() {
        let s = student();
        assert!(s.enrolled_courses.is_empty());
        assert!(s.balance.is_zero());
        assert!(s.payments.is_empty());
        assert_eq!(s.email, "ada@example.com");
    }

    #[test]
    fn test_enroll_charges_fee() {
        let mut s = student();
        let cs101 = course("CS101", 10000);

        let outcome = s.enroll(&cs101).unwrap();
        assert_eq!(
            outcome,
            EnrollmentOutcome::Enrolled {
                balance: Money::from_cents(10000)
            }
        );
        assert!(s.is_enrolled_in(&cs101.id));
    }

    #[test]
    fn test_enroll_twice_is_noop() {
        let mut s = student();
        let cs101 = course("CS101", 10000);

        s.enroll(&cs101).unwrap();
        let outcome = s.enroll(&cs101).unwrap();

        assert_eq!(outcome, EnrollmentOutcome::AlreadyEnrolled);
        assert_eq!(s.enrolled_courses.len(), 1);
        assert_eq!(s.balance.cents(), 10000);
    }

    #[test]
    fn test_total_fee_and_payments() {
        let mut s = student();
        let courses = [course("CS101", 10000), course("MA201", 25050)];
        for c in &courses {
            s.enroll(c).unwrap();
        }

        let resolve = |id: &CourseId| courses.iter().find(|c| &c.id == id);
        assert_eq!(s.total_fee(resolve).unwrap().cents(), 35050);

        s.apply_payment(Money::from_cents(15050)).unwrap();
        assert_eq!(s.balance.cents(), 20000);
        assert_eq!(s.total_paid().unwrap().cents(), 15050);
    }

    #[test]
    fn test_overpayment_goes_negative() {
        let mut s = student();
        s.enroll(&course("CS101", 10000)).unwrap();

        let payment = s.apply_payment(Money::from_cents(15000)).unwrap();
        assert_eq!(payment.balance_after.cents(), -5000);
        assert_eq!(s.balance.cents(), -5000);
    }

    #[test]
    fn test_enroll_overflow_changes_nothing() {
        let mut s = student();
        s.enroll(&course("A", i64::MAX - 1)).unwrap();

        let err = s.enroll(&course("B", 2)).unwrap_err();
        assert!(matches!(err, RegistrarError::AmountOutOfRange(_)));
        assert_eq!(s.enrolled_courses.len(), 1);
        assert_eq!(s.balance.cents(), i64::MAX - 1);
    }

    #[test]
    fn test_payment_overflow_changes_nothing() {
        let mut s = student();
        s.apply_payment(Money::from_cents(i64::MAX)).unwrap();

        let err = s.apply_payment(Money::from_cents(2)).unwrap_err();
        assert!(matches!(err, RegistrarError::AmountOutOfRange(_)));
        assert_eq!(s.balance.cents(), -i64::MAX);
        assert_eq!(s.payments.len(), 1);
    }
}
