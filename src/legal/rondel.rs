//! Rondel move candidates.
//!
//! From an occupied slot the next three slots are free and the following
//! three cost 2/4/6; a nation that has never moved may enter any slot for
//! free. Candidates the acting player cannot pay for are removed, and the
//! factory slot is withheld when the nation's treasury cannot fund a
//! factory.

use crate::action::Action;
use crate::board::nation::Nation;
use crate::rondel::{advance_cost, RondelSlot, ALL_SLOTS};
use crate::state::GameState;

/// The treasury a nation needs before the factory slot is offered.
pub const FACTORY_COST: i32 = 5;

/// Enumerates the nation's legal rondel moves for the acting player.
pub fn rondel_actions(state: &GameState, nation: Nation) -> Vec<Action> {
    let Some(nation_state) = state.nations.get(&nation) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    match nation_state.rondel_position {
        Some(position) => {
            for steps in 1..=6 {
                let slot = position.advanced(steps);
                if let Some(cost) = advance_cost(steps) {
                    out.push(Action::Rondel { nation, cost, slot });
                }
            }
        }
        None => {
            for slot in ALL_SLOTS {
                out.push(Action::Rondel { nation, cost: 0, slot });
            }
        }
    }

    let cash = state
        .players
        .get(&state.current_player)
        .map(|p| p.cash)
        .unwrap_or(0);
    out.retain(|action| match action {
        Action::Rondel { cost, .. } => (*cost as i32) <= cash,
        _ => true,
    });

    if nation_state.treasury < FACTORY_COST {
        out.retain(|action| {
            !matches!(action, Action::Rondel { slot: RondelSlot::Factory, .. })
        });
    }

    out
}
