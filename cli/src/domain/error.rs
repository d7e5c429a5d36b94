//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::net`. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Guard rejections ──────────────────────────────────────────────────────────

/// An operation refused locally because of the workspace's current state.
///
/// Guard rejections are expected, operator-facing outcomes. They are never
/// escalated as errors and never reach the provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardRejection {
    #[error("Only STOPPED workspaces can be started.")]
    StartRequiresStopped,

    #[error("{state} workspaces cannot be stopped.")]
    StopRequiresRunning { state: String },

    #[error("SUSPENDED workspaces cannot be terminated.")]
    TerminateSuspended,
}

// ── Operator input errors ─────────────────────────────────────────────────────

/// A menu selection that does not resolve to an entry.
///
/// Recoverable by design: the caller re-prompts from the same state, with no
/// retry budget and no degradation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid action!")]
    InvalidAction,

    #[error("Invalid workspace!")]
    InvalidWorkspace,
}

// ── Remote capability errors ──────────────────────────────────────────────────

/// The action catalog store is unreachable or the query failed.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("action catalog unavailable: {0}")]
    Unavailable(String),
}

/// The workspace directory service is unreachable or refused the request.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("workspace directory unavailable: {0}")]
    Unavailable(String),
}

/// A lifecycle command failed at the transport level.
///
/// Distinct from a [`GuardRejection`], which never reaches the provider.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("lifecycle command rejected: {0}")]
    Rejected(String),
}
