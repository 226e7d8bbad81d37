//! Initial game state.
//!
//! Builds the starting position from the seat list and the board's
//! province universe: round-robin nation assignment, the initial bond
//! deal, treasuries, starting factories and units, and the first rondel
//! choices for Austria-Hungary.

use crate::board::bond::{full_bank, Bond};
use crate::board::nation::{Nation, ALL_NATIONS};
use crate::board::province::{FactoryKind, Province};
use crate::board::query::BoardQuery;
use crate::error::RuleError;
use crate::legal::rondel::rondel_actions;
use crate::state::{GameState, NationState, PlayerState, ProvinceState};

/// Denomination of the controlling bond dealt to each nation's controller.
const CONTROLLING_BOND: u8 = 9;

/// Denomination of the minor bond dealt to the next seat.
const MINOR_BOND: u8 = 2;

/// Treasury each nation opens with: the proceeds of its two dealt bonds.
const STARTING_TREASURY: i32 = (CONTROLLING_BOND + MINOR_BOND) as i32;

/// Cash a player keeps per controlled nation after buying the dealt bonds.
const STARTING_CASH_PER_NATION: i32 = 2;

/// Starting factories; each holds one unit at setup, a fleet for
/// shipyards and an army otherwise.
const STARTING_FACTORIES: &[(Nation, &str, FactoryKind)] = &[
    (Nation::AustriaHungary, "vienna", FactoryKind::Armaments),
    (Nation::AustriaHungary, "budapest", FactoryKind::Armaments),
    (Nation::Italy, "rome", FactoryKind::Armaments),
    (Nation::Italy, "naples", FactoryKind::Shipyard),
    (Nation::France, "paris", FactoryKind::Armaments),
    (Nation::France, "bordeaux", FactoryKind::Shipyard),
    (Nation::GreatBritain, "london", FactoryKind::Shipyard),
    (Nation::GreatBritain, "liverpool", FactoryKind::Shipyard),
    (Nation::Germany, "berlin", FactoryKind::Armaments),
    (Nation::Germany, "hamburg", FactoryKind::Shipyard),
    (Nation::Russia, "moscow", FactoryKind::Armaments),
    (Nation::Russia, "odessa", FactoryKind::Shipyard),
];

/// Initializes the game state in place from the seat list.
pub fn initialize(
    state: &mut GameState,
    board: &dyn BoardQuery,
    players: &[String],
    solo_mode: bool,
) -> Result<(), RuleError> {
    if players.is_empty() {
        return Err(RuleError::NoPlayers);
    }

    state.order = players.to_vec();
    state.solo_mode = solo_mode;
    for player in players {
        state.players.insert(player.clone(), PlayerState::default());
    }

    for province in board.provinces() {
        state.provinces.insert(province, ProvinceState::default());
    }

    // Nations dealt round-robin in turn order; the controlling bond goes to
    // the assigned seat and the minor bond to the seat after it.
    let mut bank = full_bank();
    for (index, nation) in ALL_NATIONS.iter().enumerate() {
        let controller = &players[index % players.len()];
        let minor_holder = &players[(index + 1) % players.len()];

        state.nations.insert(
            *nation,
            NationState {
                controller: Some(controller.clone()),
                treasury: STARTING_TREASURY,
                ..Default::default()
            },
        );

        let controlling = Bond::new(*nation, CONTROLLING_BOND);
        bank.remove(&controlling);
        if let Some(p) = state.players.get_mut(controller) {
            p.bonds.insert(controlling);
            p.cash += STARTING_CASH_PER_NATION;
        }
        let minor = Bond::new(*nation, MINOR_BOND);
        bank.remove(&minor);
        if let Some(p) = state.players.get_mut(minor_holder) {
            p.bonds.insert(minor);
        }
    }
    state.available_bonds = bank;

    for nation in ALL_NATIONS {
        state.units.entry(nation).or_default();
    }
    for (nation, name, kind) in STARTING_FACTORIES {
        let province = Province::from(*name);
        if !state.provinces.contains_key(&province) {
            continue;
        }
        state.provinces.entry(province.clone()).or_default().factory = Some(*kind);
        let stack = state.stack_mut(*nation, &province);
        match kind {
            FactoryKind::Shipyard => stack.fleets += 1,
            FactoryKind::Armaments => stack.armies += 1,
        }
        // Home garrisons are friendly by definition.
        stack.friendly = true;
    }

    // The investor card starts one seat right of the first player.
    state.investor_card_holder = players[players.len() - 1].clone();

    state.current_nation = Nation::AustriaHungary;
    state.current_player = players[0].clone();
    state.update_raw_scores();
    let actions = rondel_actions(state, state.current_nation);
    state.available_actions = actions;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::board::standard::standard_map;

    fn seats(n: usize) -> Vec<String> {
        ["ada", "grace", "vera", "edith", "joan", "mary"][..n]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn six_player_deal_gives_each_seat_one_nation() {
        let board = standard_map();
        let mut state = GameState::new();
        initialize(&mut state, &board, &seats(6), false).unwrap();

        for (index, nation) in ALL_NATIONS.iter().enumerate() {
            let controller = state.nations[nation].controller.clone().unwrap();
            assert_eq!(controller, seats(6)[index]);
            assert_eq!(state.nations[nation].treasury, 11);
            assert!(state.nations[nation].rondel_position.is_none());
        }
        // Each player: a 9-bond of their nation, a 2-bond of the previous
        // nation, and 2 cash.
        for player in seats(6) {
            let p = &state.players[&player];
            assert_eq!(p.bonds.len(), 2);
            assert_eq!(p.cash, 2);
        }
        // 54 bonds minus 12 dealt.
        assert_eq!(state.available_bonds.len(), 42);
    }

    #[test]
    fn three_player_deal_doubles_holdings() {
        let board = standard_map();
        let mut state = GameState::new();
        initialize(&mut state, &board, &seats(3), false).unwrap();

        // ada controls AH and GB.
        assert_eq!(
            state.nations[&Nation::AustriaHungary].controller.as_deref(),
            Some("ada")
        );
        assert_eq!(
            state.nations[&Nation::GreatBritain].controller.as_deref(),
            Some("ada")
        );
        assert_eq!(state.players["ada"].cash, 4);
        assert_eq!(state.players["ada"].bonds.len(), 4);
    }

    #[test]
    fn starting_units_match_factory_kinds() {
        let board = standard_map();
        let mut state = GameState::new();
        initialize(&mut state, &board, &seats(2), false).unwrap();

        let vienna = Province::from("vienna");
        assert_eq!(state.stack(Nation::AustriaHungary, &vienna).armies, 1);
        assert!(state.stack(Nation::AustriaHungary, &vienna).friendly);
        assert_eq!(state.provinces[&vienna].factory, Some(FactoryKind::Armaments));

        let london = Province::from("london");
        assert_eq!(state.stack(Nation::GreatBritain, &london).fleets, 1);
        assert_eq!(state.provinces[&london].factory, Some(FactoryKind::Shipyard));

        assert_eq!(state.unit_count(Nation::Germany), 2);
    }

    #[test]
    fn austria_opens_with_all_eight_slots() {
        let board = standard_map();
        let mut state = GameState::new();
        initialize(&mut state, &board, &seats(4), false).unwrap();

        assert_eq!(state.current_nation, Nation::AustriaHungary);
        assert_eq!(state.current_player, "ada");
        assert_eq!(state.investor_card_holder, "edith");
        assert_eq!(state.available_actions.len(), 8);
        assert!(state
            .available_actions
            .iter()
            .all(|a| matches!(a, Action::Rondel { cost: 0, .. })));
    }

    #[test]
    fn empty_seat_list_is_rejected() {
        let board = standard_map();
        let mut state = GameState::new();
        let err = initialize(&mut state, &board, &[], false).unwrap_err();
        assert_eq!(err, RuleError::NoPlayers);
    }

    #[test]
    fn solo_mode_controls_every_nation() {
        let board = standard_map();
        let mut state = GameState::new();
        initialize(&mut state, &board, &["ada".to_string()], true).unwrap();

        assert!(state.solo_mode);
        for nation in ALL_NATIONS {
            assert_eq!(state.nations[&nation].controller.as_deref(), Some("ada"));
        }
        assert_eq!(state.players["ada"].cash, 12);
        assert_eq!(state.players["ada"].bonds.len(), 12);
    }
}
