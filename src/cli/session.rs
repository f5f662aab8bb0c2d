//! Menu loop
//!
//! Each selection gathers its inputs, runs one registry operation and prints
//! either the confirmation or `Error: <message>`. Registry and parse errors
//! never end the loop; only choosing Exit, running out of input, or failing
//! to write to the terminal does.

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::menu::MenuChoice;
use super::prompt::Prompter;
use crate::config::Settings;
use crate::display;
use crate::error::{RegistrarError, RegistrarResult};
use crate::models::Money;
use crate::registry::Registry;

/// Whether the loop should keep going after a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// An interactive session over one registry
struct Session<'a, R, W> {
    registry: &'a mut Registry,
    settings: &'a Settings,
    prompter: Prompter<R, W>,
}

/// Run the interactive menu until Exit is chosen or input runs out
pub fn run_menu<R: BufRead, W: Write>(
    registry: &mut Registry,
    settings: &Settings,
    input: R,
    output: W,
) -> RegistrarResult<()> {
    let mut session = Session {
        registry,
        settings,
        prompter: Prompter::new(input, output),
    };
    session.run()?;
    Ok(())
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    fn run(&mut self) -> io::Result<()> {
        loop {
            self.prompter.say(&MenuChoice::render_menu())?;

            let Some(selection) = self.prompter.ask("Choose an option: ")? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            let flow = match MenuChoice::parse(&selection) {
                Some(MenuChoice::Exit) => {
                    self.prompter.say("Exiting the system.")?;
                    Flow::Stop
                }
                Some(choice) => self.handle(choice)?,
                None => {
                    self.prompter.say("Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                return Ok(());
            }
        }
    }

    /// Collect inputs for `choice`, run it and report the outcome
    fn handle(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        let outcome = match choice {
            MenuChoice::AddCourse => {
                let Some([course_id, name, fee]) = self.ask_all([
                    "Enter Course ID: ",
                    "Enter Course Name: ",
                    "Enter Course Fee: ",
                ])?
                else {
                    return Ok(Flow::Stop);
                };
                parse_amount(&fee)
                    .and_then(|fee| self.registry.add_course(&course_id, &name, fee))
                    .map(|course| display::format_course_added(&course))
            }
            MenuChoice::RegisterStudent => {
                let Some([student_id, name, email]) = self.ask_all([
                    "Enter Student ID: ",
                    "Enter Student Name: ",
                    "Enter Student Email: ",
                ])?
                else {
                    return Ok(Flow::Stop);
                };
                self.registry
                    .register_student(&student_id, &name, &email)
                    .map(|student| display::format_student_registered(&student))
            }
            MenuChoice::EnrollInCourse => {
                let Some([student_id, course_id]) =
                    self.ask_all(["Enter Student ID: ", "Enter Course ID: "])?
                else {
                    return Ok(Flow::Stop);
                };
                self.registry
                    .enroll_in_course(&student_id, &course_id)
                    .map(|enrollment| display::format_enrollment(&enrollment, self.settings))
            }
            MenuChoice::MakePayment => {
                let Some([student_id, amount]) =
                    self.ask_all(["Enter Student ID: ", "Enter Payment Amount: "])?
                else {
                    return Ok(Flow::Stop);
                };
                parse_amount(&amount)
                    .and_then(|amount| self.registry.calculate_payment(&student_id, amount))
                    .map(|receipt| display::format_payment_receipt(&receipt, self.settings))
            }
            MenuChoice::CheckStudentBalance => {
                let Some([student_id]) = self.ask_all(["Enter Student ID: "])? else {
                    return Ok(Flow::Stop);
                };
                self.registry
                    .check_student_balance(&student_id)
                    .map(|summary| display::format_balance(&summary, self.settings))
            }
            MenuChoice::ShowCourses => Ok(display::format_course_list(
                self.registry.show_courses(),
                self.settings,
            )),
            MenuChoice::ShowRegisteredStudents => Ok(display::format_student_list(
                self.registry.show_registered_students(),
                self.settings,
            )),
            MenuChoice::ShowStudentsInCourse => {
                let Some([course_id]) = self.ask_all(["Enter Course ID: "])? else {
                    return Ok(Flow::Stop);
                };
                self.registry
                    .show_students_in_course(&course_id)
                    .map(|roster| display::format_course_roster(&roster))
            }
            MenuChoice::Exit => return Ok(Flow::Stop),
        };

        match outcome {
            Ok(text) => self.prompter.say(&text)?,
            Err(e) => {
                debug!(choice = choice.label(), error = %e, "operation failed");
                self.prompter.say(&display::format_error(&e, self.settings))?;
            }
        }

        Ok(Flow::Continue)
    }

    /// Ask each prompt in turn; `None` if input ends part way through
    fn ask_all<const N: usize>(&mut self, labels: [&str; N]) -> io::Result<Option<[String; N]>> {
        let mut answers = Vec::with_capacity(N);
        for label in labels {
            match self.prompter.ask(label)? {
                Some(answer) => answers.push(answer),
                None => return Ok(None),
            }
        }
        Ok(answers.try_into().ok())
    }
}

fn parse_amount(text: &str) -> RegistrarResult<Money> {
    Money::parse(text).map_err(RegistrarError::from)
}
