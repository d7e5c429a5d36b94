//! Domain layer — pure types and rules, no I/O.
//!
//! Nothing in here touches the network, the terminal, or `tokio`. The guard
//! rules in [`workspace`] are the part of the tool that must be testable
//! without any provider access.

pub mod action;
pub mod error;
pub mod workspace;

pub use action::{Action, ActionCatalog, ActionKind};
pub use error::{CatalogError, CommandError, DirectoryError, GuardRejection, SelectionError};
pub use workspace::{DirectoryDescriptor, Workspace, WorkspaceState};
