//! Interactive shell around the roster.
//!
//! The shell talks to the user only through the [`Prompter`] trait, so the
//! same flows run behind the terminal front end, a scripted replay, or any
//! other UI that can ask for a choice, ask for text, and show text.

mod app;
mod context;
mod flows;
mod prompter;
mod scripted;
mod terminal;

pub use app::run;
pub use context::AppContext;
pub use flows::{
    Action, add_employee, display_employees, handle_action, remove_employee, render_roster,
};
pub use prompter::Prompter;
pub use scripted::{Answer, ScriptedPrompter};
pub use terminal::TerminalPrompter;
