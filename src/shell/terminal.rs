//! Line-oriented terminal front end.
//!
//! Choices are printed as a numbered list and answered by number or by
//! label. An empty answer to a choice, or end of input at any prompt,
//! dismisses the prompt.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::warn;

use super::prompter::Prompter;

/// A [`Prompter`] over any line reader and writer, usually stdin and stdout.
#[derive(Debug)]
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
    title: String,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Creates a terminal front end; `title` heads every rendered block.
    pub fn new(input: R, output: W, title: impl Into<String>) -> Self {
        Self {
            input,
            output,
            title: title.into(),
        }
    }

    /// Consumes the prompter and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes and flushes; a failed write is logged and otherwise ignored.
    fn emit(&mut self, args: fmt::Arguments<'_>) -> bool {
        let written = self
            .output
            .write_fmt(args)
            .and_then(|()| self.output.flush());
        if let Err(err) = &written {
            warn!(error = %err, "Failed to write to terminal");
        }
        written.is_ok()
    }

    /// Reads one line without its terminator. `None` on end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(err) => {
                warn!(error = %err, "Failed to read from terminal");
                None
            }
        }
    }
}

fn parse_choice(answer: &str, options: &[String]) -> Option<usize> {
    if let Ok(number) = answer.parse::<usize>() {
        return (1..=options.len()).contains(&number).then(|| number - 1);
    }
    options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(answer))
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn prompt_choice(&mut self, title: &str, options: &[String]) -> Option<usize> {
        if !self.emit(format_args!("\n{}\n", title)) {
            return None;
        }
        for (index, option) in options.iter().enumerate() {
            self.emit(format_args!("  {}) {}\n", index + 1, option));
        }

        loop {
            if !self.emit(format_args!("> ")) {
                return None;
            }
            let line = self.read_line()?;
            let answer = line.trim();
            if answer.is_empty() {
                return None;
            }
            match parse_choice(answer, options) {
                Some(index) => return Some(index),
                None => {
                    self.emit(format_args!(
                        "Please choose 1-{} or type an option name.\n",
                        options.len()
                    ));
                }
            }
        }
    }

    fn prompt_text(&mut self, title: &str) -> Option<String> {
        if !self.emit(format_args!("{} ", title)) {
            return None;
        }
        self.read_line()
    }

    fn show_message(&mut self, text: &str) {
        self.emit(format_args!("{}\n", text));
    }

    fn render_text(&mut self, full_text: &str) {
        let title = self.title.clone();
        self.emit(format_args!("\n==== {} ====\n{}", title, full_text));
    }
}
