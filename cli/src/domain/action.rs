//! The action catalog: permitted operations and their display labels.

use std::collections::BTreeMap;

/// What an action label means to the session.
///
/// Labels are matched case-insensitively. `"exit"` is the sentinel that ends
/// the session; the three lifecycle labels map to provider operations; any
/// other label is accepted into the catalog but has no implemented effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Start,
    Stop,
    Terminate,
    Exit,
    Unrecognized,
}

impl ActionKind {
    /// Classify a catalog label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "start workspace" => Self::Start,
            "stop workspace" => Self::Stop,
            "terminate workspace" => Self::Terminate,
            "exit" => Self::Exit,
            _ => Self::Unrecognized,
        }
    }

    /// The verb used in operator-facing request messages.
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Terminate => "terminate",
            Self::Exit => "exit",
            Self::Unrecognized => "perform",
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Positive, 1-based identifier, doubling as the menu index.
    pub id: u32,
    /// Human-readable label.
    pub label: String,
}

impl Action {
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        ActionKind::from_label(&self.label)
    }
}

/// The id→label reference table, ordered by id for menu rendering.
///
/// Fetched once at bootstrap and never refreshed: the catalog is a small,
/// rarely-changing reference table, unlike the volatile workspace listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionCatalog {
    entries: BTreeMap<u32, String>,
}

impl ActionCatalog {
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the label for an action id.
    #[must_use]
    pub fn label(&self, id: u32) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    /// Iterate entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.entries.iter().map(|(&id, label)| Action {
            id,
            label: label.clone(),
        })
    }
}
