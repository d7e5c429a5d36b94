//! Session state: bootstrap, refresh, and menu selection validation.
//!
//! The session is constructed once per run, populated by [`Session::bootstrap`],
//! mutated by each prompt/perform cycle, and discarded on exit. All capability
//! access goes through injected ports so the transitions here test without any
//! network.

use anyhow::{Context, Result};

use crate::application::ports::{ActionCatalogSource, WorkspaceDirectorySource};
use crate::domain::{
    ActionCatalog, ActionKind, DirectoryDescriptor, SelectionError, Workspace,
};

/// Position of the session in the interactive prompt loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    AwaitingAction,
    AwaitingWorkspace,
    Performing,
    Refreshing,
    /// Terminal; reachable only from `AwaitingAction` via the exit sentinel.
    Exited,
}

/// Why the prompt loop must not run (or must stop running).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRefusal {
    /// No directory is configured on the provider side.
    NoDirectory,
    /// A directory exists but holds no workspaces.
    NoWorkspaces,
}

/// Result of validating an action selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionSelection {
    /// A lifecycle (or unrecognized) action was chosen.
    Chosen { id: u32, label: String },
    /// The exit sentinel was chosen; the session is now `Exited`.
    Exit,
}

/// Process-scoped session state.
#[derive(Debug, Default)]
pub struct Session {
    /// Fetched once at bootstrap, never refreshed.
    pub catalog: ActionCatalog,
    /// Fetched once at bootstrap; absence means no workspaces can exist.
    pub directory: Option<DirectoryDescriptor>,
    /// Volatile: refreshed at startup and after every performed action.
    pub workspaces: Vec<Workspace>,
    /// Id of the currently selected catalog entry.
    pub selected_action: Option<u32>,
    /// Index into `workspaces` of the currently selected workspace.
    pub selected_workspace: Option<usize>,
    pub state: FlowState,
}

impl Default for FlowState {
    fn default() -> Self {
        Self::AwaitingAction
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the session: catalog first, then the directory, then — only
    /// when a directory exists — the workspace listing.
    ///
    /// Partially fetched state stays on the session when a later step fails;
    /// there is no rollback. The caller decides whether to abort.
    ///
    /// # Errors
    ///
    /// Returns the first remote failure, with call-site context attached.
    pub async fn bootstrap(
        &mut self,
        catalog: &impl ActionCatalogSource,
        directory: &impl WorkspaceDirectorySource,
    ) -> Result<()> {
        self.catalog = catalog
            .fetch_actions()
            .await
            .context("fetching the action catalog")?;

        self.directory = directory
            .fetch_directory()
            .await
            .context("fetching the workspace directory")?;

        if self.directory.is_some() {
            self.workspaces = directory
                .fetch_workspaces()
                .await
                .context("fetching the workspace listing")?;
        }

        self.state = FlowState::AwaitingAction;
        Ok(())
    }

    /// Re-fetch the workspace listing; the catalog and directory are never
    /// refreshed after bootstrap.
    ///
    /// A fetch failure is logged and leaves the previous listing untouched —
    /// stale-but-consistent beats erroring out of the session. Selections are
    /// cleared and the flow returns to `AwaitingAction` either way.
    pub async fn refresh(&mut self, directory: &impl WorkspaceDirectorySource) {
        self.state = FlowState::Refreshing;
        match directory.fetch_workspaces().await {
            Ok(workspaces) => self.workspaces = workspaces,
            Err(error) => {
                tracing::warn!(%error, "workspace refresh failed; keeping the previous listing");
            }
        }
        self.selected_action = None;
        self.selected_workspace = None;
        self.state = FlowState::AwaitingAction;
    }

    /// Guard evaluated before every pass through the prompt loop.
    #[must_use]
    pub fn entry_refusal(&self) -> Option<EntryRefusal> {
        if self.directory.is_none() {
            Some(EntryRefusal::NoDirectory)
        } else if self.workspaces.is_empty() {
            Some(EntryRefusal::NoWorkspaces)
        } else {
            None
        }
    }

    /// Validate a raw action selection against the catalog.
    ///
    /// Valid inputs are 1-based numerics within `[1, catalog.len()]` whose id
    /// exists in the catalog. The exit sentinel moves the session to `Exited`
    /// without recording a selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidAction`] for non-numeric, out-of-range,
    /// or gap ids; `selected_action` and the flow state are left untouched so
    /// the caller can re-prompt from the same state.
    pub fn select_action(&mut self, input: &str) -> Result<ActionSelection, SelectionError> {
        let id = parse_selection(input, self.catalog.len())
            .ok_or(SelectionError::InvalidAction)?;
        let label = self
            .catalog
            .label(id)
            .ok_or(SelectionError::InvalidAction)?
            .to_string();

        if ActionKind::from_label(&label) == ActionKind::Exit {
            self.state = FlowState::Exited;
            return Ok(ActionSelection::Exit);
        }

        self.selected_action = Some(id);
        self.state = FlowState::AwaitingWorkspace;
        Ok(ActionSelection::Chosen { id, label })
    }

    /// Validate a raw workspace selection against the current listing.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidWorkspace`] for non-numeric or
    /// out-of-range input, leaving `selected_workspace` and the flow state
    /// untouched.
    pub fn select_workspace(&mut self, input: &str) -> Result<usize, SelectionError> {
        let n = parse_selection(input, self.workspaces.len())
            .ok_or(SelectionError::InvalidWorkspace)?;
        let index = (n - 1) as usize;

        self.selected_workspace = Some(index);
        self.state = FlowState::Performing;
        Ok(index)
    }
}

/// Parse a 1-based menu selection, accepting only `1..=count`.
fn parse_selection(input: &str, count: usize) -> Option<u32> {
    let n: u32 = input.trim().parse().ok()?;
    if n >= 1 && (n as usize) <= count {
        Some(n)
    } else {
        None
    }
}
