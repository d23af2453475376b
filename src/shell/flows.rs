//! The add, remove, and display flows.
//!
//! A flow runs to completion or aborts. Every prompt and every check
//! happens before the single roster mutation, so an aborted flow leaves the
//! roster exactly as it found it.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeId, EmploymentType};
use crate::roster::Roster;
use crate::validation::{parse_hours, parse_id, parse_name, parse_rate, parse_salary};

use super::context::AppContext;
use super::prompter::Prompter;

const SELECT_TYPE_PROMPT: &str = "Select Employee Type";
const NAME_PROMPT: &str = "Enter Name:";
const ID_PROMPT: &str = "Enter ID:";
const SALARY_PROMPT: &str = "Enter Monthly Salary:";
const HOURS_PROMPT: &str = "Enter Hours Worked:";
const RATE_PROMPT: &str = "Enter Hourly Rate:";
const REMOVE_ID_PROMPT: &str = "Enter Employee ID to Remove:";

/// A user-triggered action offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run the add flow.
    Add,
    /// Run the remove flow.
    Remove,
    /// Render the roster.
    Display,
    /// Leave the application.
    Exit,
}

impl Action {
    /// Every action, in menu order.
    pub const ALL: [Action; 4] = [Action::Add, Action::Remove, Action::Display, Action::Exit];

    /// The menu label.
    pub fn label(self) -> &'static str {
        match self {
            Action::Add => "Add Employee",
            Action::Remove => "Remove Employee",
            Action::Display => "Display Employees",
            Action::Exit => "Exit",
        }
    }

    /// The message shown to the user when this action's flow fails.
    fn message_for(self, error: &PayrollError) -> String {
        match (self, error) {
            (Action::Remove, PayrollError::Format { .. }) => {
                "Please enter a valid numeric ID.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

/// Runs the flow behind `action`, reporting any failure to the user.
///
/// Errors are recovered here: the message is shown (nothing is shown for a
/// cancelled prompt) and the error is returned for the caller to inspect.
/// [`Action::Exit`] does nothing.
pub fn handle_action<P: Prompter + ?Sized>(
    ctx: &mut AppContext,
    ui: &mut P,
    action: Action,
) -> PayrollResult<()> {
    let correlation_id = Uuid::new_v4();
    debug!(correlation_id = %correlation_id, action = action.label(), "Starting flow");

    let result = match action {
        Action::Add => add_employee(ctx, ui).map(|id| {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                employees = ctx.roster().len(),
                "Employee added"
            );
        }),
        Action::Remove => remove_employee(ctx, ui).map(|id| {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                employees = ctx.roster().len(),
                "Employee removed"
            );
        }),
        Action::Display => {
            display_employees(ctx, ui);
            Ok(())
        }
        Action::Exit => Ok(()),
    };

    if let Err(err) = &result {
        if err.is_cancelled() {
            debug!(
                correlation_id = %correlation_id,
                action = action.label(),
                error = %err,
                "Flow cancelled"
            );
        } else {
            warn!(
                correlation_id = %correlation_id,
                action = action.label(),
                code = err.code(),
                error = ?err,
                "Flow rejected"
            );
            ui.show_message(&action.message_for(err));
        }
    }

    result
}

/// Prompts for a new employee and adds it to the roster.
///
/// Returns the new employee's id. On any error the roster is unchanged.
pub fn add_employee<P: Prompter + ?Sized>(
    ctx: &mut AppContext,
    ui: &mut P,
) -> PayrollResult<EmployeeId> {
    let options = ctx.config().labels.options();
    let employment_type = ui
        .prompt_choice(SELECT_TYPE_PROMPT, &options)
        .and_then(|choice| EmploymentType::ALL.get(choice).copied())
        .ok_or_else(|| cancelled(SELECT_TYPE_PROMPT))?;

    let name = parse_name(&prompt(ui, NAME_PROMPT)?)?;
    let id = parse_id(&prompt(ui, ID_PROMPT)?)?;

    if ctx.roster().exists(id) {
        return Err(PayrollError::DuplicateId { id });
    }

    let employee = match employment_type {
        EmploymentType::FullTime => {
            let salary = parse_salary(&prompt(ui, SALARY_PROMPT)?)?;
            Employee::full_time(name, id, salary)?
        }
        EmploymentType::PartTime => {
            let hours_input = prompt(ui, HOURS_PROMPT)?;
            let rate_input = prompt(ui, RATE_PROMPT)?;
            // Unparseable input wins over an out-of-range value.
            let (hours, rate) = match (parse_hours(&hours_input), parse_rate(&rate_input)) {
                (Ok(hours), Ok(rate)) => (hours, rate),
                (Err(err @ PayrollError::Format { .. }), _)
                | (_, Err(err @ PayrollError::Format { .. })) => return Err(err),
                (Err(err), _) | (_, Err(err)) => return Err(err),
            };
            Employee::part_time(name, id, hours, rate)?
        }
    };

    ctx.roster_mut().add(employee);
    display_employees(ctx, ui);
    Ok(id)
}

/// Prompts for an id and removes that employee from the roster.
///
/// Returns the removed id. On any error the roster is unchanged.
pub fn remove_employee<P: Prompter + ?Sized>(
    ctx: &mut AppContext,
    ui: &mut P,
) -> PayrollResult<EmployeeId> {
    let id = parse_id(&prompt(ui, REMOVE_ID_PROMPT)?)?;

    if !ctx.roster().exists(id) {
        return Err(PayrollError::NotFound { id });
    }

    ctx.roster_mut().remove(id);
    display_employees(ctx, ui);
    Ok(id)
}

/// Renders the whole roster, replacing whatever was displayed before.
pub fn display_employees<P: Prompter + ?Sized>(ctx: &AppContext, ui: &mut P) {
    ui.render_text(&render_roster(ctx.roster()));
}

/// One [`Employee::describe`] line per record, each ending in a newline.
pub fn render_roster(roster: &Roster) -> String {
    roster
        .list()
        .iter()
        .map(|employee| format!("{}\n", employee.describe()))
        .collect()
}

fn prompt<P: Prompter + ?Sized>(ui: &mut P, title: &str) -> PayrollResult<String> {
    ui.prompt_text(title).ok_or_else(|| cancelled(title))
}

fn cancelled(prompt: &str) -> PayrollError {
    PayrollError::Cancelled {
        prompt: prompt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use crate::shell::ScriptedPrompter;
    use rust_decimal::Decimal;

    fn context() -> AppContext {
        AppContext::new(ShellConfig::default())
    }

    #[test]
    fn test_render_empty_roster() {
        assert_eq!(render_roster(&Roster::new()), "");
    }

    #[test]
    fn test_render_roster_lines() {
        let mut roster = Roster::new();
        roster.add(Employee::full_time("Alice", 1, Decimal::new(3000, 0)).unwrap());
        roster.add(Employee::part_time("Bob", 2, 10, Decimal::new(155, 1)).unwrap());
        assert_eq!(
            render_roster(&roster),
            "Employee [Name: Alice, ID: 1, Salary: 3000.00]\n\
             Employee [Name: Bob, ID: 2, Salary: 155.00]\n"
        );
    }

    #[test]
    fn test_action_labels() {
        let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            vec!["Add Employee", "Remove Employee", "Display Employees", "Exit"]
        );
    }

    #[test]
    fn test_remove_format_error_message() {
        let error = PayrollError::format("id", "x");
        assert_eq!(
            Action::Remove.message_for(&error),
            "Please enter a valid numeric ID."
        );
        assert_eq!(
            Action::Add.message_for(&error),
            "Please enter valid numeric input."
        );
    }

    #[test]
    fn test_add_full_time_prompts_in_order() {
        let mut ctx = context();
        let mut ui = ScriptedPrompter::new()
            .choice(0)
            .text("Alice")
            .text("1")
            .text("3000");

        assert_eq!(add_employee(&mut ctx, &mut ui), Ok(1));
        assert_eq!(
            ui.prompts(),
            &[
                SELECT_TYPE_PROMPT.to_string(),
                NAME_PROMPT.to_string(),
                ID_PROMPT.to_string(),
                SALARY_PROMPT.to_string(),
            ]
        );
    }

    #[test]
    fn test_out_of_range_choice_is_cancellation() {
        let mut ctx = context();
        let mut ui = ScriptedPrompter::new().choice(5);

        let err = add_employee(&mut ctx, &mut ui).unwrap_err();
        assert!(err.is_cancelled());
        assert!(ctx.roster().is_empty());
    }

    #[test]
    fn test_part_time_format_error_beats_negative_hours() {
        let mut ctx = context();
        let mut ui = ScriptedPrompter::new()
            .choice(1)
            .text("Bob")
            .text("2")
            .text("-1")
            .text("abc");

        let err = add_employee(&mut ctx, &mut ui).unwrap_err();
        assert_eq!(err, PayrollError::format("hourly_rate", "abc"));
        assert!(ctx.roster().is_empty());
    }

    #[test]
    fn test_cancel_is_not_shown_to_user() {
        let mut ctx = context();
        let mut ui = ScriptedPrompter::new().choice(0).cancel();

        let result = handle_action(&mut ctx, &mut ui, Action::Add);
        assert!(result.unwrap_err().is_cancelled());
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn test_exit_action_is_noop() {
        let mut ctx = context();
        let mut ui = ScriptedPrompter::new();
        assert_eq!(handle_action(&mut ctx, &mut ui, Action::Exit), Ok(()));
        assert!(ui.prompts().is_empty());
        assert_eq!(ui.render_count(), 0);
    }
}
