//! In-memory student repository
//!
//! Keeps students in registration order and indexes them by id.

use std::collections::HashMap;

use crate::error::{RegistrarError, RegistrarResult};
use crate::models::{CourseId, Student, StudentId};

/// Repository for students, keyed by student id
#[derive(Debug, Default)]
pub struct StudentRepository {
    students: Vec<Student>,
    /// Index: student id -> position in `students`
    by_id: HashMap<StudentId, usize>,
}

impl StudentRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a newly registered student
    ///
    /// Fails with a duplicate error if the id is already taken; the existing
    /// record is left untouched.
    pub fn insert(&mut self, student: Student) -> RegistrarResult<&Student> {
        if self.by_id.contains_key(&student.id) {
            return Err(RegistrarError::duplicate_student(student.id.as_str()));
        }

        let position = self.students.len();
        self.by_id.insert(student.id.clone(), position);
        self.students.push(student);
        Ok(&self.students[position])
    }

    /// Get a student by id
    pub fn get(&self, id: &str) -> Option<&Student> {
        self.by_id.get(id).map(|&position| &self.students[position])
    }

    /// Get a student by id, failing with a not-found error
    pub fn require(&self, id: &str) -> RegistrarResult<&Student> {
        self.get(id)
            .ok_or_else(|| RegistrarError::student_not_found(id))
    }

    /// Get a mutable student by id, failing with a not-found error
    pub fn require_mut(&mut self, id: &str) -> RegistrarResult<&mut Student> {
        match self.by_id.get(id) {
            Some(&position) => Ok(&mut self.students[position]),
            None => Err(RegistrarError::student_not_found(id)),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All students in registration order
    pub fn all(&self) -> &[Student] {
        &self.students
    }

    /// Students enrolled in a course, in registration order
    pub fn enrolled_in<'a>(
        &'a self,
        course_id: &'a CourseId,
    ) -> impl Iterator<Item = &'a Student> + 'a {
        self.students
            .iter()
            .filter(move |s| s.is_enrolled_in(course_id))
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
