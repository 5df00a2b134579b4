use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Panel Identity
// ============================================================================

/// Identifier of one panel inside an accordion.
///
/// Unique within a single controller; the frontend also uses it as the DOM
/// id of the panel's `<details>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PanelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// Panel State
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn from_open(open: bool) -> Self {
        if open {
            PanelState::Open
        } else {
            PanelState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PanelState::Open)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelState::Closed => "closed",
            PanelState::Open => "open",
        }
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
