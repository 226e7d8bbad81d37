//! Unit kinds and per-province stacks.
//!
//! Units are not tracked individually: the engine keeps one [`UnitStack`]
//! per (nation, province) pair with army and fleet counts. The `friendly`
//! flag records peaceful presence (treaty entry or coexistence) and exempts
//! the stack from occupation checks.

use serde::{Deserialize, Serialize};

/// The kind of a military unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Army,
    Fleet,
}

impl UnitKind {
    /// Returns the lowercase wire name of this unit kind.
    pub const fn name(self) -> &'static str {
        match self {
            UnitKind::Army => "army",
            UnitKind::Fleet => "fleet",
        }
    }
}

/// The units one nation has in one province.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStack {
    pub armies: u8,
    pub fleets: u8,
    /// Present by treaty or peaceful entry rather than conquest.
    pub friendly: bool,
}

impl UnitStack {
    /// Returns the total number of units in this stack.
    pub fn total(&self) -> u8 {
        self.armies + self.fleets
    }

    /// Returns true if the stack holds no units.
    pub fn is_empty(&self) -> bool {
        self.armies == 0 && self.fleets == 0
    }

    /// Returns the count of the given unit kind.
    pub fn count(&self, kind: UnitKind) -> u8 {
        match kind {
            UnitKind::Army => self.armies,
            UnitKind::Fleet => self.fleets,
        }
    }
}
