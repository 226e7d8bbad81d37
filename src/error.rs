//! Engine errors.
//!
//! Only the invariant-violation tier surfaces as an error: an action that
//! is merely not in the legal set is ignored without a signal, while these
//! failures abort the `apply` call and tell the caller its copy of the
//! legal set has desynchronized from the log.

use thiserror::Error;

use crate::board::nation::Nation;
use crate::board::province::Province;
use crate::board::unit::UnitKind;

/// Fatal rule violations raised while applying an accepted action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("no players supplied at initialization")]
    NoPlayers,

    #[error("game state touched before initialization")]
    Uninitialized,

    #[error("unknown player '{0}'")]
    UnknownPlayer(String),

    #[error("{player} holds no {nation} bond to trade in")]
    MissingTradeInBond { player: String, nation: Nation },

    #[error("bond {nation} {cost} is not in the bank")]
    BondUnavailable { nation: Nation, cost: u8 },

    #[error("no {kind:?} of {nation} present at {province}")]
    MissingUnit { nation: Nation, province: Province, kind: UnitKind },

    #[error("no maneuver route from {origin} to {destination}")]
    NoRoute { origin: Province, destination: Province },
}
