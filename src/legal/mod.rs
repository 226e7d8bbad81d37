//! Legal-action enumeration.
//!
//! Pure functions that compute the set of actions currently open to the
//! acting player. Handlers republish one of these sets before returning,
//! which is what keeps validation a simple structural match.

pub mod bonds;
pub mod imports;
pub mod maneuvers;
pub mod rondel;

pub use bonds::bond_offers;
pub use imports::import_actions;
pub use maneuvers::maneuver_actions;
pub use rondel::rondel_actions;
