//! The board query seam.
//!
//! The engine never owns topology: adjacency, terrain, home-province sets,
//! and buildable factory types all come from a [`BoardQuery`] implementation
//! supplied by the embedding application. [`MapBoard`](super::graph::MapBoard)
//! is the reference implementation used by the tests and the replay binary.

use std::collections::BTreeSet;

use super::nation::Nation;
use super::province::{FactoryKind, Province};

/// Parameters for a one-hop neighbor query.
///
/// For fleets the answer is the adjacent sea provinces. For armies it is
/// every land province reachable in one hop or through a chain of oceans
/// listed in `friendly_fleets` (each carrying fleet usable once per path).
/// When `is_occupied` is set the nation's units are confined to its own
/// home provinces.
#[derive(Debug, Clone)]
pub struct NeighborQuery {
    pub origin: Province,
    pub nation: Nation,
    pub is_fleet: bool,
    pub friendly_fleets: BTreeSet<Province>,
    pub is_occupied: bool,
}

/// Parameters for a multi-hop army path query.
#[derive(Debug, Clone)]
pub struct PathQuery {
    pub origin: Province,
    pub nation: Nation,
    pub friendly_fleets: BTreeSet<Province>,
    pub is_occupied: bool,
}

/// Read-only topology queries the engine consumes.
///
/// Implementations must be pure: the same query against the same board
/// always returns the same answer, and answers must be deterministically
/// ordered, or log replay will not reproduce state.
pub trait BoardQuery {
    /// Returns the nation whose homeland contains the province, if any.
    fn owner_of(&self, province: &Province) -> Option<Nation>;

    /// Returns true if the province is ocean.
    fn is_ocean(&self, province: &Province) -> bool;

    /// Returns the factory kind a factory in this province would have.
    fn factory_kind_of(&self, province: &Province) -> Option<FactoryKind>;

    /// Returns the nation's home provinces in deterministic order.
    fn home_provinces_of(&self, nation: Nation) -> Vec<Province>;

    /// Returns the full province-name universe in deterministic order.
    fn provinces(&self) -> Vec<Province>;

    /// Returns the legal one-hop destinations for a unit at the query origin.
    fn neighbors_for(&self, query: &NeighborQuery) -> Vec<Province>;

    /// Returns every path an army at the query origin can take, as full
    /// province sequences starting at the origin and ending on land.
    fn paths_from(&self, query: &PathQuery) -> Vec<Vec<Province>>;
}
