//! The six great powers and their fixed turn order.
//!
//! Turn order cycles Austria-Hungary -> Italy -> France -> Great Britain ->
//! Germany -> Russia and wraps. The two-letter tags are the wire identifiers
//! used in action payloads.

use serde::{Deserialize, Serialize};

/// The number of playable nations.
pub const NATION_COUNT: usize = 6;

/// One of the six great powers.
///
/// Variants are declared in turn order; the `#[repr(u8)]` attribute enables
/// use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nation {
    #[serde(rename = "AH")]
    AustriaHungary = 0,
    #[serde(rename = "IT")]
    Italy = 1,
    #[serde(rename = "FR")]
    France = 2,
    #[serde(rename = "GB")]
    GreatBritain = 3,
    #[serde(rename = "GE")]
    Germany = 4,
    #[serde(rename = "RU")]
    Russia = 5,
}

/// All six nations in turn order.
pub const ALL_NATIONS: [Nation; NATION_COUNT] = [
    Nation::AustriaHungary,
    Nation::Italy,
    Nation::France,
    Nation::GreatBritain,
    Nation::Germany,
    Nation::Russia,
];

impl Nation {
    /// Returns the two-letter wire tag for this nation.
    pub const fn tag(self) -> &'static str {
        match self {
            Nation::AustriaHungary => "AH",
            Nation::Italy => "IT",
            Nation::France => "FR",
            Nation::GreatBritain => "GB",
            Nation::Germany => "GE",
            Nation::Russia => "RU",
        }
    }

    /// Returns the full display name of this nation.
    pub const fn name(self) -> &'static str {
        match self {
            Nation::AustriaHungary => "Austria-Hungary",
            Nation::Italy => "Italy",
            Nation::France => "France",
            Nation::GreatBritain => "Great Britain",
            Nation::Germany => "Germany",
            Nation::Russia => "Russia",
        }
    }

    /// Parses a nation from its two-letter wire tag.
    pub fn from_tag(tag: &str) -> Option<Nation> {
        match tag {
            "AH" => Some(Nation::AustriaHungary),
            "IT" => Some(Nation::Italy),
            "FR" => Some(Nation::France),
            "GB" => Some(Nation::GreatBritain),
            "GE" => Some(Nation::Germany),
            "RU" => Some(Nation::Russia),
            _ => None,
        }
    }

    /// Returns the nation that acts after this one in the fixed cycle.
    pub const fn next(self) -> Nation {
        match self {
            Nation::AustriaHungary => Nation::Italy,
            Nation::Italy => Nation::France,
            Nation::France => Nation::GreatBritain,
            Nation::GreatBritain => Nation::Germany,
            Nation::Germany => Nation::Russia,
            Nation::Russia => Nation::AustriaHungary,
        }
    }
}

impl Default for Nation {
    /// Turn order starts with Austria-Hungary.
    fn default() -> Self {
        Nation::AustriaHungary
    }
}

impl std::fmt::Display for Nation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
