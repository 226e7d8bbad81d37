//! Replay determinism and the swiss-bank investor flows.
//!
//! The stored action log is the persisted-state format: folding it through
//! `apply` must reproduce the live game exactly, including logs that
//! contain engine-synthesized entries (a resumed rondel move, a triggered
//! game end).

use std::sync::Arc;

use imperium::action::Action;
use imperium::board::nation::Nation;
use imperium::board::province::Province;
use imperium::board::standard::standard_map;
use imperium::engine::Game;
use imperium::rondel::RondelSlot;

fn rondel(nation: Nation, cost: u8, slot: RondelSlot) -> Action {
    Action::Rondel { nation, cost, slot }
}

fn seven_seats() -> Vec<String> {
    ["ada", "grace", "vera", "edith", "joan", "mary", "olga"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Plays up to the point where Italy's import move crosses the investor
/// slot with a swiss bank (olga) enrolled, leaving the force/skip choice
/// open.
fn game_at_swiss_bank_interrupt() -> Game {
    let mut game = Game::new(Arc::new(standard_map()));
    game.apply(Action::Initialize { players: seven_seats(), solo_mode: false }).unwrap();

    // Austria lands investor; olga (no nation) skips her bond offer and is
    // enrolled as a swiss bank when the sub-turn closes.
    game.apply(rondel(Nation::AustriaHungary, 0, RondelSlot::Investor)).unwrap();
    game.apply(Action::SkipBondPurchase { player: "olga".into() }).unwrap();
    assert_eq!(game.state().swiss_banks, vec!["olga".to_string()]);

    // One lap of cheap production moves brings the turn back to Austria.
    for nation in [
        Nation::Italy,
        Nation::France,
        Nation::GreatBritain,
        Nation::Germany,
        Nation::Russia,
    ] {
        game.apply(rondel(nation, 0, RondelSlot::Production1)).unwrap();
    }
    game.apply(rondel(Nation::AustriaHungary, 0, RondelSlot::Production2)).unwrap();

    // Italy's move from production1 to import crosses the investor slot;
    // the treasury covers all interest, so olga may interrupt.
    game.apply(rondel(Nation::Italy, 0, RondelSlot::Import)).unwrap();
    assert_eq!(
        game.available_actions(),
        &[
            Action::ForceInvestor { player: "olga".into() },
            Action::SkipForceInvestor { player: "olga".into() },
        ]
    );
    game
}

#[test]
fn forced_investor_replaces_the_interrupted_move() {
    let mut game = game_at_swiss_bank_interrupt();
    game.apply(Action::ForceInvestor { player: "olga".into() }).unwrap();

    // Italy's marker landed on investor instead of import and paid its
    // bond-holders: vera's 2-bond (1) and grace's own 9-bond (4). grace
    // sits at 7: 2 from setup, 1 of Austrian interest, 4 of her own.
    let state = game.state();
    assert_eq!(
        state.nations[&Nation::Italy].rondel_position,
        Some(RondelSlot::Investor)
    );
    assert_eq!(state.nations[&Nation::Italy].treasury, 6);
    assert_eq!(state.players["grace"].cash, 7);

    // The card holder acts first, then the swiss bank gets her offer.
    assert_eq!(state.current_player, "mary");
    game.apply(Action::SkipBondPurchase { player: "mary".into() }).unwrap();
    assert_eq!(game.state().current_player, "olga");
    game.apply(Action::SkipBondPurchase { player: "olga".into() }).unwrap();

    // Everyone has acted: the turn advances past Italy and the card moves
    // one seat right.
    let state = game.state();
    assert_eq!(state.current_nation, Nation::France);
    assert_eq!(state.investor_card_holder, "joan");
}

#[test]
fn skipped_interrupt_resumes_the_rondel_move() {
    let mut game = game_at_swiss_bank_interrupt();
    let rondel_entries_before = game
        .state()
        .log
        .iter()
        .filter(|a| matches!(a, Action::Rondel { nation: Nation::Italy, slot: RondelSlot::Import, .. }))
        .count();
    assert_eq!(rondel_entries_before, 1);

    game.apply(Action::SkipForceInvestor { player: "olga".into() }).unwrap();

    // The interrupted move re-entered the log and completed: Italy sits on
    // import with its bundles on offer.
    let state = game.state();
    let rondel_entries = state
        .log
        .iter()
        .filter(|a| matches!(a, Action::Rondel { nation: Nation::Italy, slot: RondelSlot::Import, .. }))
        .count();
    assert_eq!(rondel_entries, 2);
    assert_eq!(state.nations[&Nation::Italy].rondel_position, Some(RondelSlot::Import));
    assert!(state.importing);

    // Completing the import runs the deferred investor card turn.
    game.apply(Action::Import { placements: vec![] }).unwrap();
    assert_eq!(game.state().current_player, "mary");
    assert!(!game.state().importing);
}

#[test]
fn replaying_a_log_with_synthesized_entries_is_lossless() {
    let mut game = game_at_swiss_bank_interrupt();
    game.apply(Action::SkipForceInvestor { player: "olga".into() }).unwrap();
    game.apply(Action::Import { placements: vec![] }).unwrap();
    game.apply(Action::SkipBondPurchase { player: "mary".into() }).unwrap();
    game.apply(Action::SkipBondPurchase { player: "olga".into() }).unwrap();

    let log = game.state().log.clone();
    let replayed = Game::from_log(Arc::new(standard_map()), &log).unwrap();
    assert_eq!(replayed.state(), game.state());
}

#[test]
fn replaying_twice_from_empty_state_is_identical() {
    let mut game = Game::new(Arc::new(standard_map()));
    game.apply(Action::Initialize {
        players: vec!["ada".into(), "grace".into()],
        solo_mode: false,
    })
    .unwrap();
    let script = vec![
        rondel(Nation::AustriaHungary, 0, RondelSlot::Maneuver1),
        Action::Maneuver {
            origin: Province::from("vienna"),
            destination: Province::from("trieste"),
        },
        Action::EndManeuver,
        rondel(Nation::Italy, 0, RondelSlot::Maneuver1),
        Action::Maneuver {
            origin: Province::from("naples"),
            destination: Province::from("ionian sea"),
        },
        Action::Maneuver {
            origin: Province::from("rome"),
            destination: Province::from("trieste"),
        },
        Action::Fight {
            province: Province::from("trieste"),
            incumbent: Nation::AustriaHungary,
            challenger: Nation::Italy,
            target_type: imperium::board::unit::UnitKind::Army,
        },
        rondel(Nation::France, 0, RondelSlot::Taxation),
        rondel(Nation::GreatBritain, 0, RondelSlot::Investor),
        Action::SkipBondPurchase { player: "grace".into() },
        rondel(Nation::Germany, 0, RondelSlot::Import),
        Action::Import { placements: vec![] },
        rondel(Nation::Russia, 0, RondelSlot::Production1),
        Action::EndGame,
    ];
    for action in script {
        game.apply(action).unwrap();
    }
    assert!(game.state().game_over);

    let log = game.state().log.clone();
    let first = Game::from_log(Arc::new(standard_map()), &log).unwrap();
    let second = Game::from_log(Arc::new(standard_map()), &log).unwrap();
    assert_eq!(first.state(), second.state());
    assert_eq!(first.state(), game.state());
}

#[test]
fn every_log_prefix_replays_cleanly() {
    let mut game = Game::new(Arc::new(standard_map()));
    game.apply(Action::Initialize {
        players: vec!["ada".into(), "grace".into()],
        solo_mode: false,
    })
    .unwrap();
    game.apply(rondel(Nation::AustriaHungary, 0, RondelSlot::Taxation)).unwrap();
    game.apply(rondel(Nation::Italy, 0, RondelSlot::Investor)).unwrap();
    game.apply(Action::SkipBondPurchase { player: "grace".into() }).unwrap();

    let log = game.state().log.clone();
    for prefix_len in 0..=log.len() {
        let replayed = Game::from_log(Arc::new(standard_map()), &log[..prefix_len]).unwrap();
        assert_eq!(replayed.state().log, &log[..prefix_len]);
    }
}
