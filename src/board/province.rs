//! Province identity and factory kinds.
//!
//! The board topology is supplied by an external provider, so provinces are
//! keyed by name rather than enumerated at compile time. The engine treats
//! the name as an opaque identifier; all terrain and ownership questions go
//! through the [`BoardQuery`](super::query::BoardQuery) trait.

use serde::{Deserialize, Serialize};

/// A province on the board, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Province(String);

impl Province {
    /// Creates a province identifier from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Province(name.into())
    }

    /// Returns the province name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Province {
    fn from(name: &str) -> Self {
        Province(name.to_string())
    }
}

impl std::fmt::Display for Province {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of factory a province hosts or can host.
///
/// Shipyards produce and import fleets; armaments factories produce and
/// import armies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactoryKind {
    Armaments,
    Shipyard,
}

impl FactoryKind {
    /// Returns the lowercase wire name of this factory kind.
    pub const fn name(self) -> &'static str {
        match self {
            FactoryKind::Armaments => "armaments",
            FactoryKind::Shipyard => "shipyard",
        }
    }
}
