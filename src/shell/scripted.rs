//! A [`Prompter`] that replays canned answers.
//!
//! Used to drive flows without a person at the keyboard. Everything the
//! shell shows is recorded so callers can inspect it afterwards.

use std::collections::VecDeque;

use tracing::warn;

use super::prompter::Prompter;

/// One canned reply to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Pick the option at this index.
    Choice(usize),
    /// Enter this text.
    Text(String),
    /// Dismiss the prompt.
    Cancel,
}

/// Replays [`Answer`]s in order and records prompts, messages, and renders.
///
/// Once the script runs out every prompt is treated as dismissed.
///
/// # Example
///
/// ```
/// use payroll_roster::config::ShellConfig;
/// use payroll_roster::shell::{AppContext, ScriptedPrompter, add_employee};
///
/// let mut ctx = AppContext::new(ShellConfig::default());
/// let mut ui = ScriptedPrompter::new().choice(0).text("Alice").text("1").text("3000");
///
/// add_employee(&mut ctx, &mut ui).unwrap();
/// assert_eq!(
///     ui.rendered(),
///     Some("Employee [Name: Alice, ID: 1, Salary: 3000.00]\n")
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    prompts: Vec<String>,
    messages: Vec<String>,
    rendered: Option<String>,
    render_count: usize,
}

impl ScriptedPrompter {
    /// Creates a prompter with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a choice.
    pub fn choice(mut self, index: usize) -> Self {
        self.answers.push_back(Answer::Choice(index));
        self
    }

    /// Queues a text answer.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.answers.push_back(Answer::Text(text.into()));
        self
    }

    /// Queues a dismissal.
    pub fn cancel(mut self) -> Self {
        self.answers.push_back(Answer::Cancel);
        self
    }

    /// Queues more answers after the ones already scripted.
    pub fn extend(&mut self, answers: impl IntoIterator<Item = Answer>) {
        self.answers.extend(answers);
    }

    /// Titles of every prompt shown, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every message shown, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The text currently rendered, if anything has been rendered.
    pub fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    /// How many times the display was rendered.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, title: &str) -> Option<Answer> {
        self.prompts.push(title.to_string());
        self.answers.pop_front()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_choice(&mut self, title: &str, options: &[String]) -> Option<usize> {
        match self.next_answer(title)? {
            Answer::Choice(index) => Some(index),
            Answer::Cancel => None,
            Answer::Text(text) => {
                let found = options.iter().position(|option| *option == text);
                if found.is_none() {
                    warn!(prompt = title, answer = %text, "Scripted text does not name an option");
                }
                found
            }
        }
    }

    fn prompt_text(&mut self, title: &str) -> Option<String> {
        match self.next_answer(title)? {
            Answer::Text(text) => Some(text),
            Answer::Cancel => None,
            Answer::Choice(index) => Some(index.to_string()),
        }
    }

    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn render_text(&mut self, full_text: &str) {
        self.rendered = Some(full_text.to_string());
        self.render_count += 1;
    }
}
