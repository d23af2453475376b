//! The main menu loop.

use tracing::{debug, info, warn};

use super::context::AppContext;
use super::flows::{Action, handle_action};
use super::prompter::Prompter;

/// Offers the action menu until the user picks Exit or dismisses it.
///
/// Each selected flow runs to completion before the menu is shown again.
/// Flow failures are reported by [`handle_action`] and never end the loop.
pub fn run<P: Prompter + ?Sized>(ctx: &mut AppContext, ui: &mut P) {
    info!(title = %ctx.config().title, "Starting payroll shell");
    let options: Vec<String> = Action::ALL
        .iter()
        .map(|action| action.label().to_string())
        .collect();

    loop {
        let title = ctx.config().title.clone();
        let Some(choice) = ui.prompt_choice(&title, &options) else {
            break;
        };
        let Some(action) = Action::ALL.get(choice).copied() else {
            warn!(choice, "Ignoring unknown menu choice");
            continue;
        };
        if action == Action::Exit {
            break;
        }
        if let Err(err) = handle_action(ctx, ui, action) {
            // Already shown to the user; the menu carries on.
            debug!(
                action = action.label(),
                code = err.code(),
                "Returning to menu after failed flow"
            );
        }
    }

    info!(employees = ctx.roster().len(), "Payroll shell stopped");
}
