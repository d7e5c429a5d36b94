//! Lifecycle engine: guard conditions evaluated before any provider call.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use crate::application::ports::LifecycleCommandSink;
use crate::domain::workspace::{check_start, check_stop, check_terminate};
use crate::domain::{ActionKind, CommandError, GuardRejection, Workspace};

/// How a requested action resolved.
///
/// Every variant except a [`CommandError`] keeps the session alive; the
/// caller refreshes and loops regardless of which one comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerformOutcome {
    /// The provider accepted the request with zero failed sub-requests.
    Completed { verb: &'static str },
    /// The provider accepted the call but reported failed sub-requests.
    Failed { verb: &'static str, failed: usize },
    /// A guard condition refused the operation; no provider call was made.
    Rejected(GuardRejection),
    /// The catalog label does not map to an implemented operation.
    Unimplemented { label: String },
}

/// Run the guard for `kind` against the workspace's last observed state,
/// then delegate to the sink when permitted.
///
/// Exactly one workspace id is submitted per call. The provider's response
/// is interpreted as a count of failed sub-requests; success means zero.
///
/// # Errors
///
/// Returns [`CommandError`] only for transport-level failures. Guard
/// rejections and unrecognized labels are ordinary outcomes, not errors.
pub async fn perform(
    sink: &impl LifecycleCommandSink,
    label: &str,
    workspace: &Workspace,
) -> Result<PerformOutcome, CommandError> {
    let kind = ActionKind::from_label(label);
    let failed = match kind {
        ActionKind::Start => match check_start(&workspace.state) {
            Ok(()) => sink.start(&workspace.id).await?,
            Err(rejection) => return Ok(PerformOutcome::Rejected(rejection)),
        },
        ActionKind::Stop => match check_stop(&workspace.state) {
            Ok(()) => sink.stop(&workspace.id).await?,
            Err(rejection) => return Ok(PerformOutcome::Rejected(rejection)),
        },
        ActionKind::Terminate => match check_terminate(&workspace.state) {
            Ok(()) => sink.terminate(&workspace.id).await?,
            Err(rejection) => return Ok(PerformOutcome::Rejected(rejection)),
        },
        ActionKind::Exit | ActionKind::Unrecognized => {
            return Ok(PerformOutcome::Unimplemented {
                label: label.to_string(),
            });
        }
    };
    if failed == 0 {
        Ok(PerformOutcome::Completed { verb: kind.verb() })
    } else {
        Ok(PerformOutcome::Failed {
            verb: kind.verb(),
            failed,
        })
    }
}
