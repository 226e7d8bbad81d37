//! Economic resolution: bonds, the investor phase, imports, and taxation.

use log::debug;

use crate::action::Placement;
use crate::board::bond::Bond;
use crate::board::nation::Nation;
use crate::board::query::BoardQuery;
use crate::board::unit::UnitKind;
use crate::error::RuleError;
use crate::legal::bonds::bond_offers;
use crate::legal::rondel::rondel_actions;
use crate::state::{GameState, Note};

/// Cash the investor-card holder receives when any investor phase runs.
const INVESTOR_CARD_BONUS: i32 = 2;

/// Taxes are capped at 20 million.
const TAX_CAP: i32 = 20;

/// The tax chart tops out at position 15.
const TAX_CHART_CAP: u8 = 15;

/// Power points cap at 25 and end the game.
const POWER_POINT_CAP: u8 = 25;

/// Resumes normal turn flow after a slot effect: runs the deferred
/// investor phase if this move passed over the investor slot, otherwise
/// advances to the next nation's rondel choices.
pub fn advance_or_run_investor(state: &mut GameState) -> Result<(), RuleError> {
    if state.passing_through_investor {
        state.passing_through_investor = false;
        middle_of_investor_turn(state)
    } else {
        state.advance_player();
        let actions = rondel_actions(state, state.current_nation);
        state.available_actions = actions;
        Ok(())
    }
}

/// Runs the investor phase for a nation: pays bond interest, then hands
/// the sub-turn to the investor-card holder.
///
/// Other players' bonds are paid from the nation's treasury, falling back
/// to the acting player's cash down to zero. The acting player's own bonds
/// are paid from treasury only, up to the treasury balance.
pub fn run_investor_phase(state: &mut GameState, nation: Nation) -> Result<(), RuleError> {
    let acting = state.current_player.clone();
    for player in state.order.clone() {
        if player == acting {
            continue;
        }
        for bond in state.player_bonds_of_nation(&player, nation) {
            let mut payment = bond.interest() as i32;
            if state.nation(nation)?.treasury >= payment {
                state.nation_mut(nation)?.treasury -= payment;
            } else if state.player(&acting)?.cash >= payment {
                state.player_mut(&acting)?.cash -= payment;
            } else {
                payment = state.player(&acting)?.cash;
                state.player_mut(&acting)?.cash = 0;
            }
            state.player_mut(&player)?.cash += payment;
        }
    }

    let owed: i32 = state
        .player_bonds_of_nation(&acting, nation)
        .iter()
        .map(|b| b.interest() as i32)
        .sum();
    let treasury = state.nation(nation)?.treasury;
    let self_payment = if treasury > owed { owed } else { treasury };
    state.player_mut(&acting)?.cash += self_payment;
    state.nation_mut(nation)?.treasury -= self_payment;
    debug!("{} paid investors; controller received {}", nation, self_payment);

    state.investor_card_active = true;
    middle_of_investor_turn(state)?;
    state.passing_through_investor = false;
    Ok(())
}

/// Gives the investor-card holder the bonus and their bond offer.
pub fn middle_of_investor_turn(state: &mut GameState) -> Result<(), RuleError> {
    let holder = state.investor_card_holder.clone();
    state.current_player = holder.clone();
    state.player_mut(&holder)?.cash += INVESTOR_CARD_BONUS;
    state.note(Note::PlayerInvests { player: holder.clone() });
    end_of_investor_turn(state, &holder);
    Ok(())
}

/// Hands an investor sub-turn to a player: they may buy one bond or skip.
pub fn end_of_investor_turn(state: &mut GameState, investor: &str) {
    state.current_player = investor.to_string();
    let offers = bond_offers(state, investor);
    state.available_actions = offers;
}

/// Resolves a bond purchase, outright or by trading in the player's
/// highest bond of the same nation for the cost difference.
pub fn bond_purchase(
    state: &mut GameState,
    player: &str,
    nation: Nation,
    cost: u8,
) -> Result<(), RuleError> {
    let new_bond = Bond::new(nation, cost);
    if !state.available_bonds.contains(&new_bond) {
        return Err(RuleError::BondUnavailable { nation, cost });
    }

    let cash = state.player(player)?.cash;
    if (cost as i32) > cash {
        let traded = state
            .player_bonds_of_nation(player, nation)
            .into_iter()
            .max_by_key(|b| b.cost)
            .ok_or_else(|| RuleError::MissingTradeInBond {
                player: player.to_string(),
                nation,
            })?;
        let net_cost = cost as i32 - traded.cost as i32;
        state.nation_mut(nation)?.treasury += net_cost;
        state.player_mut(player)?.cash -= net_cost;
        state.player_mut(player)?.bonds.remove(&traded);
        state.available_bonds.insert(traded);
        state.note(Note::PlayerTradedInForABond {
            player: player.to_string(),
            bond_nation: nation,
            bond_cost: traded.cost,
        });
    } else {
        state.nation_mut(nation)?.treasury += cost as i32;
        state.player_mut(player)?.cash -= cost as i32;
    }

    state.available_bonds.remove(&new_bond);
    state.player_mut(player)?.bonds.insert(new_bond);

    // Control goes to the largest cumulative investor; an incumbent keeps
    // it unless strictly exceeded.
    if state.nation(nation)?.controller.is_none() {
        state.nation_mut(nation)?.controller = Some(player.to_string());
    }
    let incumbent = state.nation(nation)?.controller.clone();
    if let Some(incumbent) = incumbent {
        if state.total_investment(player, nation)
            > state.total_investment(&incumbent, nation)
        {
            state.nation_mut(nation)?.controller = Some(player.to_string());
        }
    }

    state.investor_card_active = false;
    state.update_raw_scores();
    finish_investor_purchase(state);
    Ok(())
}

/// Closes an investor sub-turn after a purchase or skip: swiss banks that
/// have not yet acted since the last rondel move each get a bond offer;
/// once all have, membership is refreshed and the turn advances.
pub fn finish_investor_purchase(state: &mut GameState) {
    let holder = state.investor_card_holder.clone();
    let pending: Vec<String> = state
        .swiss_banks
        .iter()
        .filter(|bank| **bank != holder && state.has_not_bought_bond_this_turn(bank))
        .cloned()
        .collect();
    if !pending.is_empty() {
        for bank in pending {
            end_of_investor_turn(state, &bank);
        }
    } else {
        state.refresh_swiss_banks();
        state.advance_player();
        state.advance_investor_card();
        let actions = rondel_actions(state, state.current_nation);
        state.available_actions = actions;
    }
}

/// Resolves an import: places each unit and charges one treasury apiece.
pub fn resolve_import(
    state: &mut GameState,
    board: &dyn BoardQuery,
    placements: &[Placement],
) -> Result<(), RuleError> {
    for placement in placements {
        let nation = board
            .owner_of(&placement.province)
            .unwrap_or(state.current_nation);
        match placement.kind {
            UnitKind::Army => state.stack_mut(nation, &placement.province).armies += 1,
            UnitKind::Fleet => state.stack_mut(nation, &placement.province).fleets += 1,
        }
        state.nation_mut(nation)?.treasury -= 1;
    }
    state.importing = false;
    advance_or_run_investor(state)
}

/// Resolves a taxation landing. Returns true when the resulting power
/// points end the game.
pub fn taxation(
    state: &mut GameState,
    board: &dyn BoardQuery,
    nation: Nation,
) -> Result<bool, RuleError> {
    let taxes = (2 * state.unoccupied_factory_count(nation, board) as i32
        + state.flag_count(nation) as i32)
        .min(TAX_CAP);

    // Success bonus: the acting player pockets growth past the tax chart.
    let chart = state.nation(nation)?.tax_chart_position as i32;
    let excess = (taxes - chart).max(0);
    let acting = state.current_player.clone();
    state.player_mut(&acting)?.cash += excess;
    state.note(Note::PlayerGainsCash { player: acting, amount: excess });
    {
        let nation_state = state.nation_mut(nation)?;
        nation_state.tax_chart_position =
            ((chart + excess) as u8).min(TAX_CHART_CAP);
    }

    // Collection: the treasury keeps what unit upkeep does not consume.
    let payment = (taxes - state.unit_count(nation) as i32).max(0);
    state.nation_mut(nation)?.treasury += payment;
    state.note(Note::NationGainsTreasury { nation, amount: payment });

    let power_gain = (taxes - 5).max(0) as u8;
    state.nation_mut(nation)?.power_points += power_gain;

    if state.nation(nation)?.power_points as i32 + taxes >= POWER_POINT_CAP as i32 {
        state.nation_mut(nation)?.power_points = POWER_POINT_CAP;
        state.update_raw_scores();
        debug!("{} reached {} power points; game ends", nation, POWER_POINT_CAP);
        return Ok(true);
    }

    state.note(Note::NationGainsPowerPoints { nation, power_points: power_gain });
    advance_or_run_investor(state)?;
    state.update_raw_scores();
    Ok(false)
}
