//! Import bundle enumeration.
//!
//! Landing on the import slot offers every way to place up to three units
//! in the nation's unoccupied home provinces, one treasury each, fleets
//! only where the province's factory type is shipyard. Bundles are
//! generated as combinations with repetition over a canonically ordered
//! option list, so the legal set is duplicate-free and its size bounded.

use crate::action::{Action, Placement};
use crate::board::nation::Nation;
use crate::board::province::FactoryKind;
use crate::board::query::BoardQuery;
use crate::board::unit::UnitKind;
use crate::state::GameState;

/// The most units a single import may place.
pub const MAX_IMPORT_UNITS: u8 = 3;

/// Enumerates the import bundles the nation's treasury allows, including
/// the zero-cost empty import. Also returns the bundle size cap.
pub fn import_actions(
    state: &GameState,
    board: &dyn BoardQuery,
    nation: Nation,
) -> (Vec<Action>, u8) {
    let treasury = state.nations.get(&nation).map(|n| n.treasury).unwrap_or(0);
    let max_units = treasury.clamp(0, MAX_IMPORT_UNITS as i32) as u8;

    let mut options: Vec<Placement> = Vec::new();
    for province in board.home_provinces_of(nation) {
        if !state.nobody_is_occupying(&province, nation) {
            continue;
        }
        options.push(Placement::new(province.clone(), UnitKind::Army));
        if board.factory_kind_of(&province) == Some(FactoryKind::Shipyard) {
            options.push(Placement::new(province, UnitKind::Fleet));
        }
    }

    let mut out = vec![Action::Import { placements: Vec::new() }];
    let mut bundle = Vec::new();
    for size in 1..=max_units as usize {
        fill_bundles(&options, size, 0, &mut bundle, &mut out);
    }
    (out, max_units)
}

/// Combinations with repetition: option indices are non-decreasing along a
/// bundle, which canonicalizes placement order.
fn fill_bundles(
    options: &[Placement],
    size: usize,
    start: usize,
    bundle: &mut Vec<Placement>,
    out: &mut Vec<Action>,
) {
    if bundle.len() == size {
        out.push(Action::Import { placements: bundle.clone() });
        return;
    }
    for i in start..options.len() {
        bundle.push(options[i].clone());
        fill_bundles(options, size, i, bundle, out);
        bundle.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::graph::MapBoard;
    use crate::board::province::Province;
    use crate::state::NationState;

    fn harbor_board() -> MapBoard {
        let mut board = MapBoard::new();
        board.add_land("harbor", Some(Nation::Germany), Some(FactoryKind::Shipyard));
        board.add_land("fields", Some(Nation::Germany), Some(FactoryKind::Armaments));
        board
    }

    fn state_with_treasury(treasury: i32) -> GameState {
        let mut state = GameState::new();
        state
            .nations
            .insert(Nation::Germany, NationState { treasury, ..Default::default() });
        state
    }

    fn placements(action: &Action) -> &[Placement] {
        match action {
            Action::Import { placements } => placements,
            other => panic!("expected import, got {:?}", other),
        }
    }

    #[test]
    fn empty_import_is_always_offered() {
        let board = harbor_board();
        let (actions, max) = import_actions(&state_with_treasury(0), &board, Nation::Germany);
        assert_eq!(actions.len(), 1);
        assert!(placements(&actions[0]).is_empty());
        assert_eq!(max, 0);
    }

    #[test]
    fn single_placements_respect_factory_type() {
        let board = harbor_board();
        let (actions, max) = import_actions(&state_with_treasury(1), &board, Nation::Germany);
        assert_eq!(max, 1);
        let singles: Vec<&[Placement]> = actions
            .iter()
            .map(placements)
            .filter(|p| p.len() == 1)
            .collect();
        // fields: army only; harbor: army or fleet.
        assert_eq!(singles.len(), 3);
        assert!(!singles
            .iter()
            .any(|p| p[0].province == Province::from("fields") && p[0].kind == UnitKind::Fleet));
    }

    #[test]
    fn bundle_size_tracks_treasury() {
        let board = harbor_board();
        for (treasury, expected_max) in [(0, 0), (1, 1), (2, 2), (3, 3), (7, 3)] {
            let (actions, max) =
                import_actions(&state_with_treasury(treasury), &board, Nation::Germany);
            assert_eq!(max, expected_max, "treasury {}", treasury);
            let largest = actions.iter().map(|a| placements(a).len()).max().unwrap();
            assert_eq!(largest, expected_max as usize, "treasury {}", treasury);
        }
    }

    #[test]
    fn bundles_are_distinct() {
        let board = harbor_board();
        let (actions, _) = import_actions(&state_with_treasury(3), &board, Nation::Germany);
        for (i, a) in actions.iter().enumerate() {
            for b in &actions[i + 1..] {
                assert!(!a.matches(b), "duplicate bundle {:?}", a);
            }
        }
        // 3 options -> C(3,1) + C(4,2)... combinations with repetition:
        // sizes 1..=3 over 3 options: 3 + 6 + 10, plus the empty import.
        assert_eq!(actions.len(), 1 + 3 + 6 + 10);
    }

    #[test]
    fn occupied_provinces_take_no_imports() {
        let board = harbor_board();
        let mut state = state_with_treasury(3);
        state.stack_mut(Nation::France, &Province::from("harbor")).armies = 1;

        let (actions, _) = import_actions(&state, &board, Nation::Germany);
        for action in &actions {
            for placement in placements(action) {
                assert_ne!(placement.province, Province::from("harbor"));
            }
        }
    }

    #[test]
    fn own_armies_do_not_block_imports() {
        let board = harbor_board();
        let mut state = state_with_treasury(1);
        state.stack_mut(Nation::Germany, &Province::from("fields")).armies = 2;

        let (actions, _) = import_actions(&state, &board, Nation::Germany);
        assert!(actions
            .iter()
            .any(|a| placements(a).first().map(|p| p.province == Province::from("fields"))
                == Some(true)));
    }
}
