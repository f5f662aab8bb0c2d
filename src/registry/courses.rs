//! In-memory course repository
//!
//! Keeps courses in the order they were added and indexes them by id.

use std::collections::HashMap;

use crate::error::{RegistrarError, RegistrarResult};
use crate::models::{Course, CourseId};

/// Repository for courses, keyed by course id
#[derive(Debug, Default)]
pub struct CourseRepository {
    courses: Vec<Course>,
    /// Index: course id -> position in `courses`
    by_id: HashMap<CourseId, usize>,
}

impl CourseRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new course
    ///
    /// Fails with a duplicate error if the id is already taken; the existing
    /// course is left untouched.
    pub fn insert(&mut self, course: Course) -> RegistrarResult<&Course> {
        if self.by_id.contains_key(&course.id) {
            return Err(RegistrarError::duplicate_course(course.id.as_str()));
        }

        let position = self.courses.len();
        self.by_id.insert(course.id.clone(), position);
        self.courses.push(course);
        Ok(&self.courses[position])
    }

    /// Get a course by id
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.by_id.get(id).map(|&position| &self.courses[position])
    }

    /// Get a course by id, failing with a not-found error
    pub fn require(&self, id: &str) -> RegistrarResult<&Course> {
        self.get(id)
            .ok_or_else(|| RegistrarError::course_not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All courses in insertion order
    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
