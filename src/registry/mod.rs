//! The registration system
//!
//! `Registry` owns every course and student and is the only way to change
//! them. It enforces id uniqueness, the no-double-enrollment rule and the
//! minimum-payment rule, and journals every successful mutation.
//!
//! Operations return typed results; rendering them is left to the caller
//! (see [`crate::display`]).

pub mod courses;
pub mod students;

pub use courses::CourseRepository;
pub use students::StudentRepository;

use serde::Serialize;
use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditJournal, EntityType, Operation};
use crate::config::Settings;
use crate::config::settings::DEFAULT_MINIMUM_PAYMENT_PERCENT;
use crate::error::{RegistrarError, RegistrarResult};
use crate::models::{Course, CourseId, EnrollmentOutcome, Money, Student, StudentId};

/// Result of an enrollment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub course_name: String,
    pub outcome: EnrollmentOutcome,
}

/// Confirmation of an accepted payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    pub student_id: StudentId,
    pub amount: Money,
    /// Outstanding balance after the payment
    pub balance: Money,
}

/// A student's current financial position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceSummary {
    pub student_id: StudentId,
    pub name: String,
    pub balance: Money,
    /// Sum of fees of all enrolled courses
    pub total_fees: Money,
    /// Sum of all payments received
    pub total_paid: Money,
}

/// A course and the students enrolled in it, in registration order
#[derive(Debug, Clone)]
pub struct CourseRoster<'a> {
    pub course: &'a Course,
    pub students: Vec<&'a Student>,
}

impl<'a> CourseRoster<'a> {
    /// Ids of enrolled students, in registration order
    pub fn student_ids(&self) -> Vec<&'a str> {
        self.students.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// In-memory registry of courses and students
#[derive(Debug)]
pub struct Registry {
    courses: CourseRepository,
    students: StudentRepository,
    journal: AuditJournal,
    minimum_payment_percent: u32,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry using the default 40% minimum payment
    pub fn new() -> Self {
        Self::with_minimum_payment_percent(DEFAULT_MINIMUM_PAYMENT_PERCENT)
    }

    /// Create an empty registry with a custom minimum payment share
    pub fn with_minimum_payment_percent(percent: u32) -> Self {
        Self {
            courses: CourseRepository::new(),
            students: StudentRepository::new(),
            journal: AuditJournal::new(),
            minimum_payment_percent: percent,
        }
    }

    /// Create an empty registry configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_minimum_payment_percent(settings.minimum_payment_percent)
    }

    /// Add a new course
    ///
    /// The id and name are stored exactly as given. Only a negative fee is
    /// rejected.
    pub fn add_course(
        &mut self,
        course_id: &str,
        name: &str,
        fee: Money,
    ) -> RegistrarResult<Course> {
        let id = CourseId::new(course_id);
        if self.courses.contains(id.as_str()) {
            warn!(course_id = %id, "rejected duplicate course id");
            return Err(RegistrarError::duplicate_course(id.as_str()));
        }

        let course = Course::new(id, name, fee);
        course
            .validate()
            .map_err(|e| RegistrarError::Validation(e.to_string()))?;

        let course = self.courses.insert(course)?.clone();
        self.journal.record(AuditEntry::create(
            EntityType::Course,
            course.id.as_str(),
            Some(course.name.clone()),
            &course,
        ));
        info!(course_id = %course.id, name = %course.name, fee = %course.fee, "course added");

        Ok(course)
    }

    /// Register a new student
    ///
    /// Fails only if the id is taken; the id, name and email are stored
    /// exactly as given.
    pub fn register_student(
        &mut self,
        student_id: &str,
        name: &str,
        email: &str,
    ) -> RegistrarResult<Student> {
        let id = StudentId::new(student_id);
        if self.students.contains(id.as_str()) {
            warn!(student_id = %id, "rejected duplicate student id");
            return Err(RegistrarError::duplicate_student(id.as_str()));
        }

        let student = Student::new(id, name, email);
        let student = self.students.insert(student)?.clone();
        self.journal.record(AuditEntry::create(
            EntityType::Student,
            student.id.as_str(),
            Some(student.name.clone()),
            &student,
        ));
        info!(student_id = %student.id, name = %student.name, "student registered");

        Ok(student)
    }

    /// Enroll a student in a course, charging the course fee
    ///
    /// Enrolling in a course the student already takes is not an error: the
    /// outcome is [`EnrollmentOutcome::AlreadyEnrolled`] and nothing changes.
    pub fn enroll_in_course(
        &mut self,
        student_id: &str,
        course_id: &str,
    ) -> RegistrarResult<Enrollment> {
        self.students.require(student_id)?;
        let course = self.courses.require(course_id)?;
        let student = self.students.require_mut(student_id)?;

        let before = student.clone();
        let outcome = student.enroll(course)?;

        match outcome {
            EnrollmentOutcome::Enrolled { balance } => {
                self.journal.record(AuditEntry::change(
                    Operation::Enroll,
                    EntityType::Student,
                    student.id.as_str(),
                    Some(student.name.clone()),
                    &before,
                    &*student,
                ));
                info!(
                    student_id = %student.id,
                    course_id = %course.id,
                    balance = %balance,
                    "student enrolled"
                );
            }
            EnrollmentOutcome::AlreadyEnrolled => {
                info!(
                    student_id = %student.id,
                    course_id = %course.id,
                    "student already enrolled"
                );
            }
        }

        Ok(Enrollment {
            student_id: student.id.clone(),
            course_id: course.id.clone(),
            course_name: course.name.clone(),
            outcome,
        })
    }

    /// Apply a payment to a student's balance
    ///
    /// The payment must be at least the configured share of the balance as it
    /// stands before the payment. Paying more than the balance is allowed and
    /// leaves a negative balance; against such a credit the minimum is itself
    /// negative.
    pub fn calculate_payment(
        &mut self,
        student_id: &str,
        payment_amount: Money,
    ) -> RegistrarResult<PaymentReceipt> {
        let percent = self.minimum_payment_percent;
        let student = self.students.require_mut(student_id)?;

        if !payment_amount.covers_percent_of(student.balance, percent) {
            let minimum = student.balance.percent_of_ceil(percent);
            warn!(
                student_id = %student.id,
                offered = %payment_amount,
                minimum = %minimum,
                "payment below minimum rejected"
            );
            return Err(RegistrarError::InvalidPayment {
                percent,
                minimum,
                offered: payment_amount,
            });
        }

        let before = student.clone();
        let balance = student.apply_payment(payment_amount)?.balance_after;

        self.journal.record(AuditEntry::change(
            Operation::Payment,
            EntityType::Student,
            student.id.as_str(),
            Some(student.name.clone()),
            &before,
            &*student,
        ));
        info!(
            student_id = %student.id,
            amount = %payment_amount,
            balance = %balance,
            "payment applied"
        );

        Ok(PaymentReceipt {
            student_id: student.id.clone(),
            amount: payment_amount,
            balance,
        })
    }

    /// Report a student's balance (read-only)
    pub fn check_student_balance(&self, student_id: &str) -> RegistrarResult<BalanceSummary> {
        let student = self.students.require(student_id)?;

        Ok(BalanceSummary {
            student_id: student.id.clone(),
            name: student.name.clone(),
            balance: student.balance,
            total_fees: self.fees_for(student)?,
            total_paid: student.total_paid()?,
        })
    }

    /// Sum of fees of all courses a student is enrolled in
    pub fn total_fee(&self, student_id: &str) -> RegistrarResult<Money> {
        let student = self.students.require(student_id)?;
        self.fees_for(student)
    }

    /// All courses, in the order they were added
    pub fn show_courses(&self) -> &[Course] {
        self.courses.all()
    }

    /// All students, in the order they registered
    pub fn show_registered_students(&self) -> &[Student] {
        self.students.all()
    }

    /// Students enrolled in a course, in registration order
    pub fn show_students_in_course(&self, course_id: &str) -> RegistrarResult<CourseRoster<'_>> {
        let course = self.courses.require(course_id)?;
        Ok(CourseRoster {
            course,
            students: self.students.enrolled_in(&course.id).collect(),
        })
    }

    /// Look up a course by id
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.get(course_id)
    }

    /// Look up a student by id
    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students.get(student_id)
    }

    /// Audit journal of successful mutations, oldest first
    pub fn history(&self) -> &AuditJournal {
        &self.journal
    }

    fn fees_for(&self, student: &Student) -> RegistrarResult<Money> {
        student.total_fee(|id: &CourseId| self.courses.get(id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    /// Registry with course CS101 ($100.00) and student S1 enrolled in it
    fn enrolled_registry() -> Registry {
        let mut registry = Registry::new();
        registry.add_course("CS101", "Programming", money("100.00")).unwrap();
        registry
            .register_student("S1", "Ada Lovelace", "ada@example.com")
            .unwrap();
        registry.enroll_in_course("S1", "CS101").unwrap();
        registry
    }

    #[test]
    fn test_add_course() {
        let mut registry = Registry::new();
        let course = registry.add_course("CS101", "Programming", money("100")).unwrap();

        assert_eq!(course.id.as_str(), "CS101");
        assert_eq!(registry.show_courses().len(), 1);
        assert_eq!(registry.history().len(), 1);
    }

    #[test]
    fn test_duplicate_course_keeps_original() {
        let mut registry = Registry::new();
        registry.add_course("CS101", "Programming", money("100")).unwrap();

        let err = registry.add_course("CS101", "Poetry", money("5")).unwrap_err();
        assert!(err.is_duplicate());

        let course = registry.course("CS101").unwrap();
        assert_eq!(course.name, "Programming");
        assert_eq!(course.fee, money("100"));
        assert_eq!(registry.history().len(), 1);
    }

    #[test]
    fn test_negative_fee_rejected() {
        let mut registry = Registry::new();
        let err = registry
            .add_course("CS101", "Programming", money("-1"))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(registry.show_courses().is_empty());
        assert!(registry.history().is_empty());
    }

    #[test]
    fn test_ids_and_names_stored_as_given() {
        let mut registry = Registry::new();
        registry.add_course("CS101", "Programming", money("1")).unwrap();
        registry.add_course("CS101 ", "", money("1")).unwrap();
        registry.add_course("", "   ", Money::zero()).unwrap();
        assert_eq!(registry.show_courses().len(), 3);
        assert_eq!(registry.course("CS101 ").unwrap().name, "");

        let student = registry.register_student("S1", "", "x").unwrap();
        assert_eq!(student.name, "");
        registry.register_student(" S1", "Ada", "").unwrap();
        assert_eq!(registry.show_registered_students().len(), 2);

        // Lookups are exact
        let err = registry.enroll_in_course("S1 ", "CS101").unwrap_err();
        assert_eq!(err, RegistrarError::student_not_found("S1 "));
        assert!(registry.enroll_in_course(" S1", "CS101").is_ok());
    }

    #[test]
    fn test_duplicate_student_keeps_original() {
        let mut registry = Registry::new();
        registry.register_student("S1", "Ada", "ada@example.com").unwrap();

        let err = registry
            .register_student("S1", "Grace", "grace@example.com")
            .unwrap_err();
        assert_eq!(err, RegistrarError::duplicate_student("S1"));

        let student = registry.student("S1").unwrap();
        assert_eq!(student.name, "Ada");
        assert_eq!(student.email, "ada@example.com");
    }

    #[test]
    fn test_email_is_not_validated() {
        let mut registry = Registry::new();
        let student = registry.register_student("S1", "Ada", "not an email").unwrap();
        assert_eq!(student.email, "not an email");
    }

    #[test]
    fn test_enroll_charges_fee() {
        let registry = enrolled_registry();
        let student = registry.student("S1").unwrap();

        assert_eq!(student.balance, money("100.00"));
        assert_eq!(student.enrolled_courses.len(), 1);
    }

    #[test]
    fn test_enroll_twice_changes_nothing() {
        let mut registry = enrolled_registry();
        let journaled = registry.history().len();

        let enrollment = registry.enroll_in_course("S1", "CS101").unwrap();
        assert_eq!(enrollment.outcome, EnrollmentOutcome::AlreadyEnrolled);

        let student = registry.student("S1").unwrap();
        assert_eq!(student.enrolled_courses.len(), 1);
        assert_eq!(student.balance, money("100.00"));
        assert_eq!(registry.history().len(), journaled);
    }

    #[test]
    fn test_enroll_unknown_ids() {
        let mut registry = enrolled_registry();

        let err = registry.enroll_in_course("S9", "CS101").unwrap_err();
        assert_eq!(err, RegistrarError::student_not_found("S9"));

        let err = registry.enroll_in_course("S1", "XX000").unwrap_err();
        assert_eq!(err, RegistrarError::course_not_found("XX000"));

        // Student is checked first when both are missing
        let err = registry.enroll_in_course("S9", "XX000").unwrap_err();
        assert_eq!(err, RegistrarError::student_not_found("S9"));
    }

    #[test]
    fn test_minimum_payment_rule() {
        let mut registry = enrolled_registry();

        let err = registry.calculate_payment("S1", money("39.99")).unwrap_err();
        assert_eq!(
            err,
            RegistrarError::InvalidPayment {
                percent: 40,
                minimum: money("40.00"),
                offered: money("39.99"),
            }
        );
        assert_eq!(registry.student("S1").unwrap().balance, money("100.00"));

        let receipt = registry.calculate_payment("S1", money("40.00")).unwrap();
        assert_eq!(receipt.balance, money("60.00"));
    }

    #[test]
    fn test_minimum_uses_pre_payment_balance() {
        let mut registry = enrolled_registry();
        registry.calculate_payment("S1", money("40.00")).unwrap();

        // 40% of the remaining 60.00 is 24.00
        assert!(registry.calculate_payment("S1", money("23.99")).is_err());
        let receipt = registry.calculate_payment("S1", money("24.00")).unwrap();
        assert_eq!(receipt.balance, money("36.00"));
    }

    #[test]
    fn test_overpayment_goes_negative() {
        let mut registry = enrolled_registry();

        let receipt = registry.calculate_payment("S1", money("150.00")).unwrap();
        assert_eq!(receipt.balance, money("-50.00"));

        let summary = registry.check_student_balance("S1").unwrap();
        assert_eq!(summary.balance, money("-50.00"));
        assert_eq!(summary.total_paid, money("150.00"));
    }

    #[test]
    fn test_minimum_against_credit_balance() {
        let mut registry = enrolled_registry();
        registry.calculate_payment("S1", money("150.00")).unwrap();

        // 40% of -50.00 is -20.00
        let err = registry.calculate_payment("S1", money("-20.01")).unwrap_err();
        assert_eq!(
            err,
            RegistrarError::InvalidPayment {
                percent: 40,
                minimum: money("-20.00"),
                offered: money("-20.01"),
            }
        );
        assert_eq!(registry.student("S1").unwrap().balance, money("-50.00"));

        let receipt = registry.calculate_payment("S1", money("-10")).unwrap();
        assert_eq!(receipt.balance, money("-40.00"));
    }

    #[test]
    fn test_negative_payment_against_positive_balance() {
        let mut registry = enrolled_registry();
        let err = registry.calculate_payment("S1", money("-10")).unwrap_err();
        assert!(err.is_invalid_payment());
        assert_eq!(registry.student("S1").unwrap().balance, money("100.00"));
    }

    #[test]
    fn test_enroll_overflow_is_recoverable() {
        let mut registry = Registry::new();
        let huge = money("90000000000000000");
        registry.add_course("A", "A", huge).unwrap();
        registry.add_course("B", "B", huge).unwrap();
        registry.register_student("S1", "Ada", "").unwrap();
        registry.enroll_in_course("S1", "A").unwrap();
        let journaled = registry.history().len();

        let err = registry.enroll_in_course("S1", "B").unwrap_err();
        assert!(matches!(err, RegistrarError::AmountOutOfRange(_)));

        let student = registry.student("S1").unwrap();
        assert_eq!(student.balance, huge);
        assert_eq!(student.enrolled_courses.len(), 1);
        assert_eq!(registry.history().len(), journaled);
    }

    #[test]
    fn test_payment_overflow_is_recoverable() {
        let mut registry = Registry::new();
        registry.register_student("S1", "Ada", "").unwrap();
        let huge = money("90000000000000000");
        registry.calculate_payment("S1", huge).unwrap();

        let err = registry.calculate_payment("S1", huge).unwrap_err();
        assert!(matches!(err, RegistrarError::AmountOutOfRange(_)));
        assert_eq!(
            registry.student("S1").unwrap().balance,
            money("-90000000000000000")
        );
    }

    #[test]
    fn test_zero_balance_accepts_zero_payment() {
        let mut registry = Registry::new();
        registry.register_student("S1", "Ada", "").unwrap();

        let receipt = registry.calculate_payment("S1", Money::zero()).unwrap();
        assert!(receipt.balance.is_zero());
    }

    #[test]
    fn test_custom_minimum_percent() {
        let mut registry = Registry::with_minimum_payment_percent(100);
        registry.add_course("CS101", "Programming", money("100")).unwrap();
        registry.register_student("S1", "Ada", "").unwrap();
        registry.enroll_in_course("S1", "CS101").unwrap();

        assert!(registry.calculate_payment("S1", money("99.99")).is_err());
        assert!(registry.calculate_payment("S1", money("100")).is_ok());
    }

    #[test]
    fn test_payment_unknown_student() {
        let mut registry = Registry::new();
        let err = registry.calculate_payment("S9", money("10")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_balance_tracks_fees_minus_payments() {
        let mut registry = enrolled_registry();
        registry.add_course("MA201", "Calculus", money("250.50")).unwrap();
        registry.enroll_in_course("S1", "MA201").unwrap();
        registry.calculate_payment("S1", money("200")).unwrap();

        let summary = registry.check_student_balance("S1").unwrap();
        assert_eq!(summary.name, "Ada Lovelace");
        assert_eq!(summary.total_fees, money("350.50"));
        assert_eq!(summary.total_paid, money("200"));
        assert_eq!(
            Some(summary.balance),
            summary.total_fees.checked_sub(summary.total_paid)
        );
        assert_eq!(registry.total_fee("S1").unwrap(), money("350.50"));
    }

    #[test]
    fn test_check_balance_unknown_student() {
        let registry = Registry::new();
        assert!(registry.check_student_balance("S1").unwrap_err().is_not_found());
        assert!(registry.total_fee("S1").unwrap_err().is_not_found());
    }

    #[test]
    fn test_show_students_in_course() {
        let mut registry = Registry::new();
        registry.add_course("CS101", "Programming", money("100")).unwrap();
        registry.add_course("ART1", "Drawing", money("50")).unwrap();
        for id in ["S2", "S1", "S3"] {
            registry.register_student(id, id, "").unwrap();
        }
        // Enroll out of registration order
        registry.enroll_in_course("S1", "CS101").unwrap();
        registry.enroll_in_course("S2", "CS101").unwrap();

        let roster = registry.show_students_in_course("CS101").unwrap();
        assert_eq!(roster.course.name, "Programming");
        assert_eq!(roster.student_ids(), vec!["S2", "S1"]);

        let empty = registry.show_students_in_course("ART1").unwrap();
        assert!(empty.is_empty());
        assert!(empty.student_ids().is_empty());

        let err = registry.show_students_in_course("NOPE").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_listings_keep_insertion_order() {
        let mut registry = Registry::new();
        for id in ["Z", "A", "M"] {
            registry.add_course(id, id, Money::zero()).unwrap();
            registry.register_student(id, id, "").unwrap();
        }

        let courses: Vec<_> = registry.show_courses().iter().map(|c| c.id.as_str()).collect();
        let students: Vec<_> = registry
            .show_registered_students()
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(courses, vec!["Z", "A", "M"]);
        assert_eq!(students, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_history_records_mutations() {
        let mut registry = enrolled_registry();
        registry.calculate_payment("S1", money("50")).unwrap();
        let _ = registry.calculate_payment("S1", money("1"));

        let ops: Vec<_> = registry
            .history()
            .entries()
            .iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(
            ops,
            vec![
                Operation::Create,
                Operation::Create,
                Operation::Enroll,
                Operation::Payment,
            ]
        );

        let payment = &registry.history().entries()[3];
        assert_eq!(payment.entity_id, "S1");
        assert!(payment
            .diff_summary
            .as_deref()
            .unwrap()
            .contains("balance: 10000 -> 5000"));
    }
}
