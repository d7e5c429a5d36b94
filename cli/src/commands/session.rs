//! The interactive session driver: prompt, validate, perform, refresh, loop.
//!
//! Re-prompting on invalid input is an explicit loop within each state, never
//! recursion, so a long run of operator mistakes cannot grow the stack.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{LifecycleCommandSink, OperatorPrompt, WorkspaceDirectorySource};
use crate::application::services::lifecycle::{self, PerformOutcome};
use crate::application::services::session::{ActionSelection, EntryRefusal, Session};
use crate::output::{OutputContext, table};

/// Pause after an invalid menu selection before re-prompting.
const INVALID_INPUT_PAUSE: Duration = Duration::from_secs(2);
/// Pause letting an action's outcome stay on screen before refreshing.
const OUTCOME_PAUSE: Duration = Duration::from_secs(5);
/// Pause after the goodbye message.
const GOODBYE_PAUSE: Duration = Duration::from_secs(1);

const RULE_WIDTH: usize = 40;

/// How the interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator chose the exit action.
    Exit,
    /// No directory is configured on the provider side.
    NoDirectory,
    /// A directory exists but holds no workspaces.
    NoWorkspaces,
}

impl SessionEnd {
    /// Process exit code for this end condition.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Exit => 0,
            Self::NoDirectory => 1,
            Self::NoWorkspaces => 2,
        }
    }
}

/// Drive the prompt loop until the operator exits or the entry guard fires.
///
/// The entry guard is re-evaluated at the top of every iteration, so a
/// session whose last workspace disappears terminates with the same distinct
/// end conditions as a fresh start.
///
/// # Errors
///
/// Returns an error only for infrastructure failures on the prompt itself
/// (e.g. EOF on stdin). Provider failures during perform or refresh are
/// logged and the session continues with stale state.
pub async fn run(
    ctx: &OutputContext,
    session: &mut Session,
    directory: &impl WorkspaceDirectorySource,
    sink: &impl LifecycleCommandSink,
    prompt: &impl OperatorPrompt,
) -> Result<SessionEnd> {
    prompt.clear_screen();

    loop {
        match session.entry_refusal() {
            Some(EntryRefusal::NoDirectory) => {
                println!("\nHello!, we have no directories.");
                println!("Please create a directory before using this tool.\n");
                return Ok(SessionEnd::NoDirectory);
            }
            Some(EntryRefusal::NoWorkspaces) => {
                println!("\nHello!, we have no workspaces.");
                println!("Please create a workspace before using this tool.\n");
                return Ok(SessionEnd::NoWorkspaces);
            }
            None => {}
        }

        // AwaitingAction
        let (label, workspace) = {
            let label = loop {
                print!("{}", table::workspace_table(&session.workspaces));
                print!("{}", table::action_menu(&session.catalog));
                let input = prompt.read_selection("Selection")?;
                match session.select_action(&input) {
                    Ok(ActionSelection::Exit) => {
                        println!("Good bye!");
                        prompt.settle(GOODBYE_PAUSE);
                        return Ok(SessionEnd::Exit);
                    }
                    Ok(ActionSelection::Chosen { label, .. }) => break label,
                    Err(error) => {
                        ctx.warn(&error.to_string());
                        prompt.settle(INVALID_INPUT_PAUSE);
                        prompt.clear_screen();
                    }
                }
            };

            // AwaitingWorkspace
            let index = loop {
                prompt.clear_screen();
                print!("{}", table::workspace_table(&session.workspaces));
                println!("\nRequested action: [{label}]");
                print!("{}", table::workspace_menu(&session.workspaces));
                let input = prompt.read_selection("Selection")?;
                match session.select_workspace(&input) {
                    Ok(index) => break index,
                    Err(error) => {
                        ctx.warn(&error.to_string());
                        prompt.settle(INVALID_INPUT_PAUSE);
                    }
                }
            };
            (label, session.workspaces[index].clone())
        };

        // Performing
        prompt.clear_screen();
        println!("\nAttempting your requested action ...\n");
        println!("{label} [{}]\n", workspace.id);
        match lifecycle::perform(sink, &label, &workspace).await {
            Ok(outcome) => render_outcome(ctx, &outcome, &workspace.id),
            Err(error) => {
                tracing::error!(%error, workspace = %workspace.id, "lifecycle command failed");
                ctx.error(&format!("Failed to reach the provider: {error}"));
            }
        }
        prompt.settle(OUTCOME_PAUSE);
        prompt.clear_screen();

        // Refreshing
        session.refresh(directory).await;
    }
}

fn render_outcome(ctx: &OutputContext, outcome: &PerformOutcome, workspace_id: &str) {
    let rule = "-".repeat(RULE_WIDTH);
    match outcome {
        PerformOutcome::Completed { verb } => {
            println!("{rule}");
            ctx.success(&format!("Successful request to {verb}: {workspace_id}"));
            println!("{rule}\n");
        }
        PerformOutcome::Failed { verb, failed } => {
            println!("{rule}");
            ctx.warn(&format!(
                "Request to {verb} {workspace_id} reported {failed} failed sub-request(s)."
            ));
            println!("{rule}\n");
        }
        PerformOutcome::Rejected(rejection) => {
            println!("{rule}");
            println!("Cannot perform your request ...");
            println!("{rule}\n");
            ctx.warn(&rejection.to_string());
        }
        PerformOutcome::Unimplemented { label } => {
            println!("{rule}");
            println!("Cannot perform your request ...");
            println!("{rule}\n");
            println!("Operation \"{label}\" has not been implemented.\n");
        }
    }
}
