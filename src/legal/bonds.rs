//! Investor bond offers.
//!
//! During an investor sub-turn the acting player may buy any bank bond they
//! can pay for outright, or trade their highest bond of the same nation up
//! to a dearer denomination by paying the difference. Skipping is always
//! allowed.

use crate::action::Action;
use crate::state::GameState;

/// Enumerates the bond purchases open to the player, plus the skip.
pub fn bond_offers(state: &GameState, player: &str) -> Vec<Action> {
    let cash = state.players.get(player).map(|p| p.cash).unwrap_or(0);

    let mut out = Vec::new();
    for bond in &state.available_bonds {
        let top_owned = state
            .player_bonds_of_nation(player, bond.nation)
            .iter()
            .map(|b| b.cost as i32)
            .max()
            .unwrap_or(0);
        let cost = bond.cost as i32;
        let outright = cost <= cash;
        // Trading up: pay the difference, never trade down.
        let trade_up = cost > top_owned && cost <= cash + top_owned;
        if outright || trade_up {
            out.push(Action::BondPurchase {
                nation: bond.nation,
                player: player.to_string(),
                cost: bond.cost,
            });
        }
    }
    out.push(Action::SkipBondPurchase { player: player.to_string() });
    out
}
