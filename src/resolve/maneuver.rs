//! Maneuver resolution.
//!
//! Executes unit moves with convoy accounting, then walks the interrupt
//! ladder in priority order: conflict with foreign units, entrance into a
//! foreign home province, factory destruction, flag planting. Conflict
//! choices resolve here too. Every path out of the maneuver phase funnels
//! through [`end_maneuver_phase`] so a pending investor passage is honored.

use log::trace;

use crate::action::Action;
use crate::board::nation::{Nation, ALL_NATIONS};
use crate::board::province::Province;
use crate::board::query::{BoardQuery, PathQuery};
use crate::board::unit::UnitKind;
use crate::error::RuleError;
use crate::legal::maneuvers::{available_convoy_fleets, maneuver_actions};
use crate::resolve::economy::advance_or_run_investor;
use crate::state::GameState;

/// Armies a nation must have in place to destroy a foreign factory.
pub const FACTORY_DESTRUCTION_ARMIES: u8 = 3;

/// Fills the pending-move worklist with every unit of the nation,
/// fleets before armies per province.
pub fn collect_units_to_move(state: &mut GameState, nation: Nation) {
    let mut pending = Vec::new();
    if let Some(stacks) = state.units.get(&nation) {
        for (province, stack) in stacks {
            for _ in 0..stack.fleets {
                pending.push((province.clone(), UnitKind::Fleet));
            }
            for _ in 0..stack.armies {
                pending.push((province.clone(), UnitKind::Army));
            }
        }
    }
    state.units_to_move = pending;
}

/// Executes one maneuver and publishes the follow-up choices.
pub fn execute_move(
    state: &mut GameState,
    board: &dyn BoardQuery,
    origin: &Province,
    destination: &Province,
) -> Result<(), RuleError> {
    let nation = state.current_nation;
    let kind = if board.is_ocean(destination) { UnitKind::Fleet } else { UnitKind::Army };

    match kind {
        UnitKind::Fleet => {
            let stack = state.stack_mut(nation, origin);
            if stack.fleets == 0 {
                return Err(RuleError::MissingUnit {
                    nation,
                    province: origin.clone(),
                    kind,
                });
            }
            stack.fleets -= 1;
            state.stack_mut(nation, destination).fleets += 1;
        }
        UnitKind::Army => {
            // Choose the valid path with the fewest ocean hops; each ocean
            // hop consumes one convoy from that province's fleets.
            let friendly_fleets = available_convoy_fleets(state);
            let path = board
                .paths_from(&PathQuery {
                    origin: origin.clone(),
                    nation,
                    friendly_fleets,
                    is_occupied: false,
                })
                .into_iter()
                .filter(|p| p.last() == Some(destination))
                .min_by_key(|p| p.iter().filter(|hop| board.is_ocean(hop)).count())
                .ok_or_else(|| RuleError::NoRoute {
                    origin: origin.clone(),
                    destination: destination.clone(),
                })?;

            let stack = state.stack_mut(nation, origin);
            if stack.armies == 0 {
                return Err(RuleError::MissingUnit {
                    nation,
                    province: origin.clone(),
                    kind,
                });
            }
            stack.armies -= 1;
            state.stack_mut(nation, destination).armies += 1;

            let ocean_hops: Vec<Province> =
                path.into_iter().filter(|hop| board.is_ocean(hop)).collect();
            for hop in &ocean_hops {
                *state.fleet_convoy_count.entry(hop.clone()).or_insert(0) += 1;
            }
            if !ocean_hops.is_empty() {
                // Fleets move before the armies they convoy, or not at all.
                state.units_to_move.retain(|(_, k)| *k == UnitKind::Army);
            }
        }
    }

    if let Some(index) = state
        .units_to_move
        .iter()
        .position(|(p, k)| p == origin && *k == kind)
    {
        state.units_to_move.remove(index);
    }
    trace!("{} moved {} {} -> {}", nation, kind.name(), origin, destination);

    // 1. Foreign units at the destination force a conflict choice.
    for other in ALL_NATIONS {
        if other == nation {
            continue;
        }
        let stack = state.stack(other, destination);
        if stack.is_empty() {
            continue;
        }
        let mut actions = Vec::new();
        if stack.armies > 0 {
            actions.push(Action::Fight {
                province: destination.clone(),
                incumbent: other,
                challenger: nation,
                target_type: UnitKind::Army,
            });
        }
        if stack.fleets > 0 {
            actions.push(Action::Fight {
                province: destination.clone(),
                incumbent: other,
                challenger: nation,
                target_type: UnitKind::Fleet,
            });
        }
        actions.push(Action::Coexist {
            province: destination.clone(),
            incumbent: other,
            challenger: nation,
        });
        state.handling_conflict = true;
        state.available_actions = actions;
        return Ok(());
    }

    // 2. Entering another nation's home province.
    if let Some(owner) = board.owner_of(destination) {
        if owner != nation {
            state.handling_conflict = true;
            state.available_actions = vec![
                Action::UnfriendlyEntrance {
                    incumbent: owner,
                    challenger: nation,
                    province: destination.clone(),
                },
                Action::FriendlyEntrance {
                    incumbent: owner,
                    challenger: nation,
                    province: destination.clone(),
                },
            ];
            return Ok(());
        }
    }

    // 3. A foreign factory under three armies may be destroyed.
    if destroy_factory_offer_due(state, board, destination) {
        state.available_actions = vec![
            Action::DestroyFactory { province: destination.clone() },
            Action::SkipDestroyFactory { province: destination.clone() },
        ];
        return Ok(());
    }

    // 4. Outside every homeland, the mover plants its flag.
    if board.owner_of(destination).is_none() {
        state.provinces.entry(destination.clone()).or_default().flag = Some(nation);
    }

    continue_or_finish(state, board)
}

/// True when the destination holds a destroyable foreign factory and the
/// immediately preceding logged action was not a destruction skip.
fn destroy_factory_offer_due(
    state: &GameState,
    board: &dyn BoardQuery,
    province: &Province,
) -> bool {
    let nation = state.current_nation;
    let has_factory = state
        .provinces
        .get(province)
        .map(|p| p.factory.is_some())
        .unwrap_or(false);
    let just_skipped = state.log.len() >= 2
        && matches!(
            state.log[state.log.len() - 2],
            Action::SkipDestroyFactory { .. }
        );
    has_factory
        && board.owner_of(province) != Some(nation)
        && state.stack(nation, province).armies >= FACTORY_DESTRUCTION_ARMIES
        && !just_skipped
}

/// Resolves a fight at the province.
///
/// The defender's fleet falls first when one is present; the attacker then
/// loses a fleet unless it has exactly one army there, which is lost
/// instead. Without defending fleets both sides lose an army. The flag
/// transfers when the challenger ends up strictly stronger on a province
/// outside every homeland.
pub fn fight(
    state: &mut GameState,
    board: &dyn BoardQuery,
    province: &Province,
    incumbent: Nation,
    challenger: Nation,
    target_type: UnitKind,
) -> Result<(), RuleError> {
    let defender = state.stack(incumbent, province);
    if defender.fleets > 0 {
        if target_type == UnitKind::Army {
            let stack = state.stack_mut(incumbent, province);
            stack.armies = stack.armies.saturating_sub(1);
            let stack = state.stack_mut(challenger, province);
            stack.armies = stack.armies.saturating_sub(1);
        } else {
            state.stack_mut(incumbent, province).fleets -= 1;
            if state.stack(challenger, province).armies == 1 {
                state.stack_mut(challenger, province).armies -= 1;
            } else {
                let stack = state.stack_mut(challenger, province);
                stack.fleets = stack.fleets.saturating_sub(1);
            }
        }
    } else if defender.armies > 0 {
        state.stack_mut(incumbent, province).armies -= 1;
        let stack = state.stack_mut(challenger, province);
        stack.armies = stack.armies.saturating_sub(1);
    }

    let incumbent_total = state.stack(incumbent, province).total();
    let challenger_total = state.stack(challenger, province).total();
    if challenger_total > incumbent_total && board.owner_of(province).is_none() {
        state.provinces.entry(province.clone()).or_default().flag = Some(challenger);
    }

    state.handling_conflict = false;
    continue_or_finish(state, board)
}

/// Resolves a conflict peacefully: the entering stack becomes friendly.
pub fn coexist(
    state: &mut GameState,
    board: &dyn BoardQuery,
    province: &Province,
    challenger: Nation,
) -> Result<(), RuleError> {
    state.handling_conflict = false;
    state.stack_mut(challenger, province).friendly = true;
    continue_or_finish(state, board)
}

/// Enters a foreign home province as a hostile force. May first offer the
/// destruction of a factory held under three armies.
pub fn unfriendly_entrance(
    state: &mut GameState,
    board: &dyn BoardQuery,
    province: &Province,
) -> Result<(), RuleError> {
    if destroy_factory_offer_due(state, board, province) {
        state.available_actions = vec![
            Action::DestroyFactory { province: province.clone() },
            Action::SkipDestroyFactory { province: province.clone() },
        ];
        return Ok(());
    }
    state.handling_conflict = false;
    continue_or_finish(state, board)
}

/// Enters a foreign home province peacefully.
pub fn friendly_entrance(
    state: &mut GameState,
    board: &dyn BoardQuery,
    province: &Province,
    challenger: Nation,
) -> Result<(), RuleError> {
    state.handling_conflict = false;
    state.stack_mut(challenger, province).friendly = true;
    continue_or_finish(state, board)
}

/// Destroys the factory at the province for three of the mover's armies.
pub fn destroy_factory(
    state: &mut GameState,
    board: &dyn BoardQuery,
    province: &Province,
) -> Result<(), RuleError> {
    let nation = state.current_nation;
    if state.stack(nation, province).armies < FACTORY_DESTRUCTION_ARMIES {
        return Err(RuleError::MissingUnit {
            nation,
            province: province.clone(),
            kind: UnitKind::Army,
        });
    }
    state.provinces.entry(province.clone()).or_default().factory = None;
    state.stack_mut(nation, province).armies -= FACTORY_DESTRUCTION_ARMIES;
    state.handling_conflict = false;
    continue_or_finish(state, board)
}

/// Declines the offered factory destruction.
pub fn skip_destroy_factory(
    state: &mut GameState,
    board: &dyn BoardQuery,
) -> Result<(), RuleError> {
    state.handling_conflict = false;
    continue_or_finish(state, board)
}

/// Republishes maneuvers for the remaining worklist, or ends the phase.
pub fn continue_or_finish(
    state: &mut GameState,
    board: &dyn BoardQuery,
) -> Result<(), RuleError> {
    if state.units_to_move.is_empty() {
        end_maneuver_phase(state)
    } else {
        let actions = maneuver_actions(state, board);
        state.available_actions = actions;
        Ok(())
    }
}

/// Ends the maneuver phase: clears the worklist and convoy counters, then
/// runs a deferred investor phase or advances the turn.
pub fn end_maneuver_phase(state: &mut GameState) -> Result<(), RuleError> {
    state.units_to_move.clear();
    state.fleet_convoy_count.clear();
    state.maneuvering = false;
    advance_or_run_investor(state)
}
