//! Workspace identity, lifecycle states, and guard conditions.

use std::fmt;

use crate::domain::error::GuardRejection;

/// Lifecycle state of a workspace as last reported by the provider.
///
/// Parsed case-insensitively; anything outside the known set is carried as
/// [`WorkspaceState::Other`] and treated as opaque. The value may go stale
/// between refreshes and must never be assumed current beyond the latest
/// fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceState {
    Stopped,
    Starting,
    Available,
    Impaired,
    Unhealthy,
    Error,
    Stopping,
    Suspended,
    Terminating,
    Terminated,
    /// Provider-defined state outside the enumerated set.
    Other(String),
}

impl WorkspaceState {
    /// Parse a provider state string, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "stopped" => Self::Stopped,
            "starting" => Self::Starting,
            "available" => Self::Available,
            "impaired" => Self::Impaired,
            "unhealthy" => Self::Unhealthy,
            "error" => Self::Error,
            "stopping" => Self::Stopping,
            "suspended" => Self::Suspended,
            "terminating" => Self::Terminating,
            "terminated" => Self::Terminated,
            _ => Self::Other(raw.to_string()),
        }
    }
}

impl fmt::Display for WorkspaceState {
    /// Uppercase display form, matching the provider's own listings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Stopped => "STOPPED",
            Self::Starting => "STARTING",
            Self::Available => "AVAILABLE",
            Self::Impaired => "IMPAIRED",
            Self::Unhealthy => "UNHEALTHY",
            Self::Error => "ERROR",
            Self::Stopping => "STOPPING",
            Self::Suspended => "SUSPENDED",
            Self::Terminating => "TERMINATING",
            Self::Terminated => "TERMINATED",
            Self::Other(raw) => return write!(f, "{}", raw.to_ascii_uppercase()),
        };
        f.write_str(s)
    }
}

/// One virtual desktop as listed by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Opaque identifier, unique within a session, immutable once fetched.
    pub id: String,
    /// Owning user, display-only.
    pub user_name: String,
    /// Last observed lifecycle state.
    pub state: WorkspaceState,
    /// Running mode descriptor, display-only.
    pub running_mode: String,
    /// Compute type descriptor, display-only.
    pub compute_type: String,
}

/// The provider-side grouping construct workspaces belong to.
///
/// Only its presence or absence drives behavior; without a directory no
/// workspaces can exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryDescriptor {
    pub id: String,
    pub name: Option<String>,
}

// ── Guard conditions ──────────────────────────────────────────────────────────
//
// Local pre-call checks, evaluated before any provider request is issued.
// States outside the enumerated set pass the terminate guard but fail
// start/stop.

/// Start is only valid for a stopped workspace.
///
/// # Errors
///
/// Returns a [`GuardRejection`] for any state other than `Stopped`.
pub fn check_start(state: &WorkspaceState) -> Result<(), GuardRejection> {
    match state {
        WorkspaceState::Stopped => Ok(()),
        _ => Err(GuardRejection::StartRequiresStopped),
    }
}

/// Stop is only valid for a running (or degraded-but-running) workspace.
///
/// # Errors
///
/// Returns a [`GuardRejection`] for any state outside
/// `{available, impaired, unhealthy, error}`.
pub fn check_stop(state: &WorkspaceState) -> Result<(), GuardRejection> {
    match state {
        WorkspaceState::Available
        | WorkspaceState::Impaired
        | WorkspaceState::Unhealthy
        | WorkspaceState::Error => Ok(()),
        other => Err(GuardRejection::StopRequiresRunning {
            state: other.to_string(),
        }),
    }
}

/// Terminate is valid for every state except suspended.
///
/// # Errors
///
/// Returns a [`GuardRejection`] when the workspace is `Suspended`.
pub fn check_terminate(state: &WorkspaceState) -> Result<(), GuardRejection> {
    match state {
        WorkspaceState::Suspended => Err(GuardRejection::TerminateSuspended),
        _ => Ok(()),
    }
}
