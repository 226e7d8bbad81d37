//! Maneuver destination enumeration.
//!
//! For every pending unit of the maneuver phase: fleets reach adjacent seas
//! in one hop; armies reach land one hop away or through chains of oceans
//! holding a friendly fleet with convoy capacity left this phase. Ending
//! the phase early is always on offer.

use std::collections::BTreeSet;

use crate::action::Action;
use crate::board::province::Province;
use crate::board::query::{BoardQuery, NeighborQuery};
use crate::board::unit::UnitKind;
use crate::state::GameState;

/// Returns the ocean provinces whose friendly fleets can still convoy.
pub fn available_convoy_fleets(state: &GameState) -> BTreeSet<Province> {
    let mut fleets = BTreeSet::new();
    if let Some(stacks) = state.units.get(&state.current_nation) {
        for (province, stack) in stacks {
            let used = state.fleet_convoy_count.get(province).copied().unwrap_or(0);
            if stack.fleets > used {
                fleets.insert(province.clone());
            }
        }
    }
    fleets
}

/// Enumerates the legal maneuvers for the pending-unit worklist.
pub fn maneuver_actions(state: &GameState, board: &dyn BoardQuery) -> Vec<Action> {
    let nation = state.current_nation;
    let is_occupied = state.is_occupied(nation, board);
    let friendly_fleets = available_convoy_fleets(state);

    let mut out = vec![Action::EndManeuver];
    let mut enumerated: BTreeSet<(Province, UnitKind)> = BTreeSet::new();

    for (origin, kind) in &state.units_to_move {
        if !enumerated.insert((origin.clone(), *kind)) {
            continue;
        }
        if state.stack(nation, origin).count(*kind) == 0 {
            continue;
        }
        let query = NeighborQuery {
            origin: origin.clone(),
            nation,
            is_fleet: *kind == UnitKind::Fleet,
            friendly_fleets: match kind {
                UnitKind::Fleet => BTreeSet::new(),
                UnitKind::Army => friendly_fleets.clone(),
            },
            is_occupied,
        };
        for destination in board.neighbors_for(&query) {
            let action = Action::Maneuver { origin: origin.clone(), destination };
            if !out.contains(&action) {
                out.push(action);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::graph::MapBoard;
    use crate::board::nation::Nation;
    use crate::board::province::FactoryKind;

    /// port -- sea1 -- sea2 -- island ; port -- plain
    fn coastal_board() -> MapBoard {
        let mut board = MapBoard::new();
        board.add_land("port", Some(Nation::Italy), Some(FactoryKind::Shipyard));
        board.add_land("plain", Some(Nation::Italy), Some(FactoryKind::Armaments));
        board.add_land("island", None, None);
        board.add_ocean("sea1");
        board.add_ocean("sea2");
        board.connect("port", "plain");
        board.connect("port", "sea1");
        board.connect("sea1", "sea2");
        board.connect("sea2", "island");
        board
    }

    fn maneuvering_state() -> GameState {
        let mut state = GameState::new();
        state.current_nation = Nation::Italy;
        state
    }

    #[test]
    fn end_maneuver_is_always_offered() {
        let board = coastal_board();
        let state = maneuvering_state();
        let actions = maneuver_actions(&state, &board);
        assert_eq!(actions, vec![Action::EndManeuver]);
    }

    #[test]
    fn fleet_gets_one_hop_sea_moves() {
        let board = coastal_board();
        let mut state = maneuvering_state();
        state.stack_mut(Nation::Italy, &Province::from("port")).fleets = 1;
        state.units_to_move.push((Province::from("port"), UnitKind::Fleet));

        let actions = maneuver_actions(&state, &board);
        assert!(actions.contains(&Action::Maneuver {
            origin: Province::from("port"),
            destination: Province::from("sea1"),
        }));
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn army_convoys_through_fleets_with_capacity() {
        let board = coastal_board();
        let mut state = maneuvering_state();
        state.stack_mut(Nation::Italy, &Province::from("port")).armies = 1;
        state.stack_mut(Nation::Italy, &Province::from("sea1")).fleets = 1;
        state.stack_mut(Nation::Italy, &Province::from("sea2")).fleets = 1;
        state.units_to_move.push((Province::from("port"), UnitKind::Army));

        let actions = maneuver_actions(&state, &board);
        assert!(actions.contains(&Action::Maneuver {
            origin: Province::from("port"),
            destination: Province::from("island"),
        }));
    }

    #[test]
    fn spent_convoy_fleets_carry_no_more_armies() {
        let board = coastal_board();
        let mut state = maneuvering_state();
        state.stack_mut(Nation::Italy, &Province::from("port")).armies = 1;
        state.stack_mut(Nation::Italy, &Province::from("sea1")).fleets = 1;
        state.stack_mut(Nation::Italy, &Province::from("sea2")).fleets = 1;
        state.units_to_move.push((Province::from("port"), UnitKind::Army));
        state.fleet_convoy_count.insert(Province::from("sea2"), 1);

        let actions = maneuver_actions(&state, &board);
        assert!(!actions.contains(&Action::Maneuver {
            origin: Province::from("port"),
            destination: Province::from("island"),
        }));
        // The land hop is untouched by convoy accounting.
        assert!(actions.contains(&Action::Maneuver {
            origin: Province::from("port"),
            destination: Province::from("plain"),
        }));
    }

    #[test]
    fn duplicate_pending_units_enumerate_once() {
        let board = coastal_board();
        let mut state = maneuvering_state();
        state.stack_mut(Nation::Italy, &Province::from("port")).fleets = 2;
        state.units_to_move.push((Province::from("port"), UnitKind::Fleet));
        state.units_to_move.push((Province::from("port"), UnitKind::Fleet));

        let actions = maneuver_actions(&state, &board);
        let fleet_moves = actions
            .iter()
            .filter(|a| matches!(a, Action::Maneuver { .. }))
            .count();
        assert_eq!(fleet_moves, 1);
    }

    #[test]
    fn stale_worklist_entries_are_skipped() {
        let board = coastal_board();
        let mut state = maneuvering_state();
        // Worklist says a fleet is pending but the stack has none left.
        state.units_to_move.push((Province::from("port"), UnitKind::Fleet));

        let actions = maneuver_actions(&state, &board);
        assert_eq!(actions, vec![Action::EndManeuver]);
    }
}
