//! Tabular workspace listing and menu rendering.
//!
//! Pure string builders so the prompt loop stays printable-agnostic and the
//! layout can be asserted in tests. The listing is a fixed 75-column table:
//! five centered 15-wide columns framed by `=` rules.

use std::fmt::Write as _;

use crate::domain::{ActionCatalog, Workspace};

const TABLE_WIDTH: usize = 75;

/// Render the greeting plus the workspace table.
///
/// An empty listing renders the greeting alone, with no table frame.
#[must_use]
pub fn workspace_table(workspaces: &[Workspace]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\nHello!, we have {} workspace(s): \n",
        workspaces.len()
    );
    if workspaces.is_empty() {
        return out;
    }

    let rule = "=".repeat(TABLE_WIDTH);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:^15}{:^15}{:^15}{:^15}{:^15}",
        "ID", "UserName", "State", "Mode", "Type"
    );
    let _ = writeln!(out, "{rule}");
    for ws in workspaces {
        let _ = writeln!(
            out,
            "{:^15}{:^15}{:^15}{:^15}{:^15}",
            ws.id,
            ws.user_name,
            ws.state.to_string(),
            ws.running_mode,
            ws.compute_type
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}

/// Render the numbered action menu, in catalog id order.
#[must_use]
pub fn action_menu(catalog: &ActionCatalog) -> String {
    let mut out = String::from("\nPlease select an action:\n\n");
    for action in catalog.iter() {
        let _ = writeln!(out, "[{}]: {}", action.id, action.label);
    }
    out
}

/// Render the numbered workspace menu, 1-based over the current listing.
#[must_use]
pub fn workspace_menu(workspaces: &[Workspace]) -> String {
    let mut out = String::from("\nPlease select a workspace:\n\n");
    for (index, ws) in workspaces.iter().enumerate() {
        let _ = writeln!(out, "[{}]: {}", index + 1, ws.id);
    }
    out
}
