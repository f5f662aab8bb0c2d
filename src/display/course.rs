//! Course display formatting

use super::column_width;
use crate::config::Settings;
use crate::models::Course;
use crate::registry::CourseRoster;

/// Confirmation shown after a course is added
pub fn format_course_added(course: &Course) -> String {
    format!("Course {} added successfully.", course.name)
}

/// Format all courses as a table
pub fn format_course_list(courses: &[Course], settings: &Settings) -> String {
    let mut output = String::from("Available Courses:\n");
    if courses.is_empty() {
        output.push_str("No courses found.\n");
        return output;
    }

    let fees: Vec<String> = courses.iter().map(|c| settings.format_money(c.fee)).collect();

    let id_width = column_width("ID", courses.iter().map(|c| c.id.as_str()));
    let name_width = column_width("Name", courses.iter().map(|c| c.name.as_str()));
    let fee_width = column_width("Fee", fees.iter().map(String::as_str));

    output.push_str(&format!(
        "{:<id_width$}  {:<name_width$}  {:>fee_width$}\n",
        "ID", "Name", "Fee",
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:-<name_width$}  {:->fee_width$}\n",
        "", "", "",
    ));

    for (course, fee) in courses.iter().zip(&fees) {
        output.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {:>fee_width$}\n",
            course.id.as_str(),
            course.name,
            fee,
        ));
    }

    output
}

/// Format the students enrolled in a course
pub fn format_course_roster(roster: &CourseRoster<'_>) -> String {
    let mut output = format!("Students enrolled in {}:\n", roster.course.name);
    if roster.is_empty() {
        output.push_str("No students enrolled.\n");
        return output;
    }

    let id_width = column_width("ID", roster.students.iter().map(|s| s.id.as_str()));

    output.push_str(&format!("{:<id_width$}  Name\n", "ID"));
    output.push_str(&format!("{:-<id_width$}  ----\n", ""));
    for student in &roster.students {
        output.push_str(&format!("{:<id_width$}  {}\n", student.id.as_str(), student.name));
    }

    output
}
