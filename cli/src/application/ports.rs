//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::time::Duration;

use anyhow::Result;

use crate::domain::{
    ActionCatalog, CatalogError, CommandError, DirectoryDescriptor, DirectoryError, Workspace,
};

// ── Remote Capability Ports ───────────────────────────────────────────────────

/// The reference table of permitted operations, backed by a relational store.
#[allow(async_fn_in_trait)]
pub trait ActionCatalogSource {
    /// Fetch the full id→label mapping.
    async fn fetch_actions(&self) -> Result<ActionCatalog, CatalogError>;
}

/// The provider's workspace directory and listing service.
#[allow(async_fn_in_trait)]
pub trait WorkspaceDirectorySource {
    /// Fetch the session directory, `None` when no directory is configured.
    async fn fetch_directory(&self) -> Result<Option<DirectoryDescriptor>, DirectoryError>;
    /// Fetch all workspaces, in provider order.
    async fn fetch_workspaces(&self) -> Result<Vec<Workspace>, DirectoryError>;
}

/// The provider's lifecycle command endpoint.
///
/// Each call submits exactly one workspace id and returns the number of
/// failed sub-requests within the batch (0 = full success). A transport
/// failure surfaces as [`CommandError`]; guard rejections never reach this
/// interface.
#[allow(async_fn_in_trait)]
pub trait LifecycleCommandSink {
    async fn start(&self, id: &str) -> Result<usize, CommandError>;
    async fn stop(&self, id: &str) -> Result<usize, CommandError>;
    async fn terminate(&self, id: &str) -> Result<usize, CommandError>;
}

// ── Presentation Port ─────────────────────────────────────────────────────────

/// Raw terminal interaction, abstracted so the prompt loop can be driven by
/// scripted input in tests. Sync trait — no async needed.
pub trait OperatorPrompt {
    /// Read one line of operator input after printing `prompt`.
    ///
    /// # Errors
    ///
    /// Returns an error on EOF or any read failure; the session treats this
    /// like an infrastructure failure and aborts.
    fn read_selection(&self, prompt: &str) -> Result<String>;

    /// Clear the screen before a prompting state re-renders.
    fn clear_screen(&self);

    /// Let a message stay on screen for `duration` before moving on.
    fn settle(&self, duration: Duration);
}
