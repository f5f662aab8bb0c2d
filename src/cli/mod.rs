//! Interactive front end
//!
//! A numbered text menu that reads operator input, converts amounts, calls
//! the registry and prints the outcome. Works over any `BufRead`/`Write`
//! pair so it can be driven by a terminal, a script file, or a test.

pub mod menu;
pub mod prompt;
pub mod session;

pub use menu::MenuChoice;
pub use prompt::Prompter;
pub use session::run_menu;
