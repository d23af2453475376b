//! The UI capability the flows call into.

/// A front end that can ask the user for input and show output.
///
/// Prompts return `None` when the user dismisses them; the calling flow then
/// aborts without touching the roster.
pub trait Prompter {
    /// Asks the user to pick one of `options`, returning its index.
    fn prompt_choice(&mut self, title: &str, options: &[String]) -> Option<usize>;

    /// Asks the user for a line of text.
    fn prompt_text(&mut self, title: &str) -> Option<String>;

    /// Shows a short message, typically the reason a flow was rejected.
    fn show_message(&mut self, text: &str);

    /// Replaces the main display with `full_text`.
    fn render_text(&mut self, full_text: &str);
}
