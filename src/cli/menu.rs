//! Menu options

use std::fmt;

/// The nine operations offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCourse,
    RegisterStudent,
    EnrollInCourse,
    MakePayment,
    CheckStudentBalance,
    ShowCourses,
    ShowRegisteredStudents,
    ShowStudentsInCourse,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 9] = [
        Self::AddCourse,
        Self::RegisterStudent,
        Self::EnrollInCourse,
        Self::MakePayment,
        Self::CheckStudentBalance,
        Self::ShowCourses,
        Self::ShowRegisteredStudents,
        Self::ShowStudentsInCourse,
        Self::Exit,
    ];

    /// Parse the operator's selection ("1" through "9")
    pub fn parse(s: &str) -> Option<Self> {
        let number: usize = s.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    /// Menu number of this choice
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|&c| c == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddCourse => "Add Course",
            Self::RegisterStudent => "Register Student",
            Self::EnrollInCourse => "Enroll in Course",
            Self::MakePayment => "Make Payment",
            Self::CheckStudentBalance => "Check Student Balance",
            Self::ShowCourses => "Show Courses",
            Self::ShowRegisteredStudents => "Show Registered Students",
            Self::ShowStudentsInCourse => "Show Students in Course",
            Self::Exit => "Exit",
        }
    }

    /// The full menu as shown before each selection
    pub fn render_menu() -> String {
        let mut output = String::from("\n--- Registration System Menu ---\n");
        for choice in Self::ALL {
            output.push_str(&format!("{}\n", choice));
        }
        output
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
