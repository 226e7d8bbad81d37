//! Bond denominations and the cost/interest table.
//!
//! Each nation issues nine bonds. A bond is identified by its nation and
//! purchase cost; the interest it pays every investor phase is a fixed
//! function of the cost. The bank starts with one bond of each denomination
//! per nation and a bond is owned by at most one player at a time.

use serde::{Deserialize, Serialize};

use super::nation::{Nation, ALL_NATIONS};

/// The nine bond purchase costs, in ascending order.
pub const BOND_COSTS: [u8; 9] = [2, 4, 6, 9, 12, 16, 20, 25, 30];

/// Returns the interest payment for a bond of the given purchase cost,
/// or None if the cost is not a listed denomination.
pub fn interest_for_cost(cost: u8) -> Option<u8> {
    BOND_COSTS
        .iter()
        .position(|&c| c == cost)
        .map(|i| i as u8 + 1)
}

/// Returns the purchase cost of the bond paying the given interest,
/// or None if out of range.
pub fn cost_for_interest(interest: u8) -> Option<u8> {
    if interest == 0 || interest as usize > BOND_COSTS.len() {
        return None;
    }
    Some(BOND_COSTS[interest as usize - 1])
}

/// A bond: a claim on one nation, identified by its purchase cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bond {
    pub nation: Nation,
    pub cost: u8,
}

impl Bond {
    /// Creates a bond of the given nation and denomination.
    pub const fn new(nation: Nation, cost: u8) -> Self {
        Bond { nation, cost }
    }

    /// Returns the interest this bond pays each investor phase.
    ///
    /// Returns 0 for a cost outside the denomination table; such bonds
    /// cannot be constructed through the engine.
    pub fn interest(&self) -> u8 {
        interest_for_cost(self.cost).unwrap_or(0)
    }
}

/// Builds the full bank: one bond of every denomination for every nation.
pub fn full_bank() -> std::collections::BTreeSet<Bond> {
    let mut bank = std::collections::BTreeSet::new();
    for nation in ALL_NATIONS {
        for cost in BOND_COSTS {
            bank.insert(Bond::new(nation, cost));
        }
    }
    bank
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_interest_is_a_bijection() {
        for (i, &cost) in BOND_COSTS.iter().enumerate() {
            let interest = i as u8 + 1;
            assert_eq!(interest_for_cost(cost), Some(interest));
            assert_eq!(cost_for_interest(interest), Some(cost));
        }
    }

    #[test]
    fn unlisted_costs_have_no_interest() {
        for cost in [0, 1, 3, 5, 7, 10, 31] {
            assert_eq!(interest_for_cost(cost), None);
        }
        assert_eq!(cost_for_interest(0), None);
        assert_eq!(cost_for_interest(10), None);
    }

    #[test]
    fn bond_interest_matches_table() {
        assert_eq!(Bond::new(Nation::Russia, 2).interest(), 1);
        assert_eq!(Bond::new(Nation::Russia, 9).interest(), 4);
        assert_eq!(Bond::new(Nation::Russia, 30).interest(), 9);
    }

    #[test]
    fn full_bank_has_nine_bonds_per_nation() {
        let bank = full_bank();
        assert_eq!(bank.len(), 54);
        for nation in ALL_NATIONS {
            assert_eq!(bank.iter().filter(|b| b.nation == nation).count(), 9);
        }
    }

    #[test]
    fn trade_in_charges_the_denomination_difference() {
        // Trading a 9 up to a 16 must net the difference exactly.
        let owned = Bond::new(Nation::Italy, 9);
        let bought = Bond::new(Nation::Italy, 16);
        assert_eq!(bought.cost - owned.cost, 7);
    }
}
