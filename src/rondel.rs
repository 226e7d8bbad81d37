//! The rondel: eight action slots on a circular track.
//!
//! A nation's marker advances clockwise each turn. The first three slots
//! ahead are free, the next three cost 2/4/6 from the acting player's cash,
//! and slots further than six ahead are unreachable in one move. A nation
//! that has never moved may enter any slot for free.

use serde::{Deserialize, Serialize};

/// The number of rondel slots.
pub const SLOT_COUNT: usize = 8;

/// One slot on the rondel, in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum RondelSlot {
    Factory = 0,
    Production1 = 1,
    Maneuver1 = 2,
    Investor = 3,
    Import = 4,
    Production2 = 5,
    Maneuver2 = 6,
    Taxation = 7,
}

/// All slots in clockwise order.
pub const ALL_SLOTS: [RondelSlot; SLOT_COUNT] = [
    RondelSlot::Factory,
    RondelSlot::Production1,
    RondelSlot::Maneuver1,
    RondelSlot::Investor,
    RondelSlot::Import,
    RondelSlot::Production2,
    RondelSlot::Maneuver2,
    RondelSlot::Taxation,
];

impl RondelSlot {
    /// Returns the lowercase wire name of this slot.
    pub const fn name(self) -> &'static str {
        match self {
            RondelSlot::Factory => "factory",
            RondelSlot::Production1 => "production1",
            RondelSlot::Maneuver1 => "maneuver1",
            RondelSlot::Investor => "investor",
            RondelSlot::Import => "import",
            RondelSlot::Production2 => "production2",
            RondelSlot::Maneuver2 => "maneuver2",
            RondelSlot::Taxation => "taxation",
        }
    }

    /// Parses a slot from its lowercase wire name.
    pub fn from_name(name: &str) -> Option<RondelSlot> {
        ALL_SLOTS.iter().copied().find(|s| s.name() == name)
    }

    /// Returns the slot `steps` positions clockwise from this one.
    pub const fn advanced(self, steps: usize) -> RondelSlot {
        ALL_SLOTS[(self as usize + steps) % SLOT_COUNT]
    }

    /// Returns the clockwise distance from this slot to `to` (1..=8).
    pub const fn distance_to(self, to: RondelSlot) -> usize {
        let d = (to as usize + SLOT_COUNT - self as usize) % SLOT_COUNT;
        if d == 0 {
            SLOT_COUNT
        } else {
            d
        }
    }
}

impl std::fmt::Display for RondelSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the cash cost of advancing `steps` slots clockwise.
///
/// Returns None for distances that cannot be travelled in one move.
pub const fn advance_cost(steps: usize) -> Option<u8> {
    match steps {
        1 | 2 | 3 => Some(0),
        4 => Some(2),
        5 => Some(4),
        6 => Some(6),
        _ => None,
    }
}

/// Returns true if moving from `from` to `to` passes over the investor slot.
///
/// This is the fixed from/to table of the reachable moves that cross
/// investor without landing on it; landing on investor itself is handled by
/// the slot effect, not by this predicate.
pub fn passes_investor(from: Option<RondelSlot>, to: RondelSlot) -> bool {
    use RondelSlot::*;
    let Some(from) = from else {
        return false;
    };
    match from {
        Maneuver1 => matches!(to, Import | Production2 | Maneuver2 | Taxation | Factory),
        Production1 => matches!(to, Import | Production2 | Maneuver2 | Taxation),
        Factory => matches!(to, Import | Production2 | Maneuver2),
        Taxation => matches!(to, Import | Production2),
        Maneuver2 => matches!(to, Import),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_indices_are_sequential() {
        for (i, s) in ALL_SLOTS.iter().enumerate() {
            assert_eq!(*s as usize, i, "slot {:?} has wrong index", s);
        }
    }

    #[test]
    fn name_roundtrip() {
        for s in ALL_SLOTS {
            assert_eq!(RondelSlot::from_name(s.name()), Some(s));
        }
        assert_eq!(RondelSlot::from_name("harbor"), None);
    }

    #[test]
    fn advanced_wraps() {
        assert_eq!(RondelSlot::Taxation.advanced(1), RondelSlot::Factory);
        assert_eq!(RondelSlot::Factory.advanced(8), RondelSlot::Factory);
        assert_eq!(RondelSlot::Maneuver1.advanced(3), RondelSlot::Production2);
    }

    #[test]
    fn distance_is_cyclic() {
        assert_eq!(RondelSlot::Factory.distance_to(RondelSlot::Production1), 1);
        assert_eq!(RondelSlot::Taxation.distance_to(RondelSlot::Factory), 1);
        assert_eq!(RondelSlot::Factory.distance_to(RondelSlot::Factory), 8);
    }

    #[test]
    fn cost_schedule() {
        assert_eq!(advance_cost(1), Some(0));
        assert_eq!(advance_cost(2), Some(0));
        assert_eq!(advance_cost(3), Some(0));
        assert_eq!(advance_cost(4), Some(2));
        assert_eq!(advance_cost(5), Some(4));
        assert_eq!(advance_cost(6), Some(6));
        assert_eq!(advance_cost(7), None);
        assert_eq!(advance_cost(8), None);
    }

    #[test]
    fn cost_schedule_is_cyclically_symmetric() {
        // From any slot: exactly three destinations cost 0, one costs 2,
        // one costs 4, one costs 6.
        for from in ALL_SLOTS {
            let mut free = 0;
            let mut paid = Vec::new();
            for steps in 1..=6 {
                let to = from.advanced(steps);
                let cost = advance_cost(from.distance_to(to)).unwrap();
                if cost == 0 {
                    free += 1;
                } else {
                    paid.push(cost);
                }
            }
            paid.sort_unstable();
            assert_eq!(free, 3, "from {:?}", from);
            assert_eq!(paid, vec![2, 4, 6], "from {:?}", from);
        }
    }

    #[test]
    fn investor_passing_table() {
        use RondelSlot::*;
        assert!(passes_investor(Some(Maneuver1), Import));
        assert!(passes_investor(Some(Maneuver1), Factory));
        assert!(passes_investor(Some(Production1), Taxation));
        assert!(passes_investor(Some(Factory), Maneuver2));
        assert!(passes_investor(Some(Taxation), Production2));
        assert!(passes_investor(Some(Maneuver2), Import));

        // Landing on investor is not "passing".
        assert!(!passes_investor(Some(Maneuver1), Investor));
        // Stopping short of investor does not pass it.
        assert!(!passes_investor(Some(Factory), Maneuver1));
        assert!(!passes_investor(Some(Taxation), Factory));
        // A nation that has never moved passes nothing.
        assert!(!passes_investor(None, Import));
    }

    #[test]
    fn slot_wire_names() {
        assert_eq!(
            serde_json::to_string(&RondelSlot::Production2).unwrap(),
            "\"production2\""
        );
        let slot: RondelSlot = serde_json::from_str("\"maneuver1\"").unwrap();
        assert_eq!(slot, RondelSlot::Maneuver1);
    }
}
