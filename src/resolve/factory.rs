//! Factory construction.
//!
//! Landing the factory slot offers a build in every unoccupied home
//! province without one; building costs the nation 5 treasury and takes
//! the factory type the board assigns to that province.

use crate::action::Action;
use crate::board::nation::Nation;
use crate::board::province::Province;
use crate::board::query::BoardQuery;
use crate::error::RuleError;
use crate::legal::rondel::FACTORY_COST;
use crate::resolve::economy::advance_or_run_investor;
use crate::state::GameState;

/// Enumerates the buildable home provinces for the factory slot.
pub fn build_factory_offers(
    state: &GameState,
    board: &dyn BoardQuery,
    nation: Nation,
) -> Vec<Action> {
    board
        .home_provinces_of(nation)
        .into_iter()
        .filter(|province| {
            state.provinces.get(province).map(|p| p.factory.is_none()).unwrap_or(true)
                && state.nobody_is_occupying(province, nation)
        })
        .map(|province| Action::BuildFactory { province })
        .collect()
}

/// Resolves a factory build in the given province.
pub fn build_factory(
    state: &mut GameState,
    board: &dyn BoardQuery,
    province: &Province,
) -> Result<(), RuleError> {
    let kind = board.factory_kind_of(province);
    state.provinces.entry(province.clone()).or_default().factory = kind;
    let nation = state.current_nation;
    state.nation_mut(nation)?.treasury -= FACTORY_COST;
    state.building_factory = false;
    advance_or_run_investor(state)
}
