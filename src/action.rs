//! The closed set of game actions.
//!
//! Every state transition is one of these variants. Actions are immutable
//! once logged and serialize to the `{ "type": ..., "payload": ... }` wire
//! shape. Validation matches a proposed action structurally against the
//! current legal set via [`Action::matches`].

use serde::{Deserialize, Serialize};

use crate::board::nation::Nation;
use crate::board::province::Province;
use crate::board::unit::UnitKind;
use crate::rondel::RondelSlot;

/// One unit placement inside an `import` action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub province: Province,
    #[serde(rename = "type")]
    pub kind: UnitKind,
}

impl Placement {
    /// Creates a placement of the given kind in the given province.
    pub fn new(province: impl Into<Province>, kind: UnitKind) -> Self {
        Placement { province: province.into(), kind }
    }
}

/// A game action with its typed payload.
///
/// The serde representation is internally tagged: the variant name becomes
/// the `type` field and the payload fields the `payload` object, matching
/// the wire contract consumed by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    /// Starts a game from a seat list. Always accepted.
    #[serde(rename_all = "camelCase")]
    Initialize { players: Vec<String>, solo_mode: bool },

    /// Ends the game and resolves the winner. Always accepted.
    EndGame,

    /// Does nothing.
    Noop,

    /// Buys a bond denomination, outright or by trade-in.
    BondPurchase { player: String, nation: Nation, cost: u8 },

    /// Declines the offered bond purchase.
    SkipBondPurchase { player: String },

    /// Ends the maneuver phase with units still unmoved.
    EndManeuver,

    /// Resolves a conflict by battle against the chosen target kind.
    #[serde(rename_all = "camelCase")]
    Fight {
        province: Province,
        incumbent: Nation,
        challenger: Nation,
        target_type: UnitKind,
    },

    /// Resolves a conflict by peaceful coexistence.
    Coexist { province: Province, incumbent: Nation, challenger: Nation },

    /// Enters another nation's home province as a hostile force.
    UnfriendlyEntrance { incumbent: Nation, challenger: Nation, province: Province },

    /// Enters another nation's home province peacefully.
    FriendlyEntrance { incumbent: Nation, challenger: Nation, province: Province },

    /// A swiss-bank player forces the investor phase to run now.
    ForceInvestor { player: String },

    /// A swiss-bank player declines to force the investor phase.
    SkipForceInvestor { player: String },

    /// Builds a factory in an unoccupied home province.
    BuildFactory { province: Province },

    /// Destroys an occupied foreign factory at the cost of three armies.
    DestroyFactory { province: Province },

    /// Declines the offered factory destruction.
    SkipDestroyFactory { province: Province },

    /// Places imported units in home provinces, one treasury each.
    Import { placements: Vec<Placement> },

    /// Moves one unit from origin to destination.
    Maneuver { origin: Province, destination: Province },

    /// Advances a nation's rondel marker to a slot for a cash cost.
    Rondel { nation: Nation, cost: u8, slot: RondelSlot },
}

impl Action {
    /// Structural equality used to validate a proposed action against the
    /// legal set.
    ///
    /// Import placements are compared element by element on both fields;
    /// every other variant compares all payload fields by value.
    pub fn matches(&self, other: &Action) -> bool {
        match (self, other) {
            (Action::Import { placements: a }, Action::Import { placements: b }) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|(x, y)| x.province == y.province && x.kind == y.kind)
            }
            _ => self == other,
        }
    }

    /// Returns the wire name of this action's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::Initialize { .. } => "initialize",
            Action::EndGame => "endGame",
            Action::Noop => "noop",
            Action::BondPurchase { .. } => "bondPurchase",
            Action::SkipBondPurchase { .. } => "skipBondPurchase",
            Action::EndManeuver => "endManeuver",
            Action::Fight { .. } => "fight",
            Action::Coexist { .. } => "coexist",
            Action::UnfriendlyEntrance { .. } => "unfriendlyEntrance",
            Action::FriendlyEntrance { .. } => "friendlyEntrance",
            Action::ForceInvestor { .. } => "forceInvestor",
            Action::SkipForceInvestor { .. } => "skipForceInvestor",
            Action::BuildFactory { .. } => "buildFactory",
            Action::DestroyFactory { .. } => "destroyFactory",
            Action::SkipDestroyFactory { .. } => "skipDestroyFactory",
            Action::Import { .. } => "import",
            Action::Maneuver { .. } => "maneuver",
            Action::Rondel { .. } => "rondel",
        }
    }
}
