//! The game state machine.
//!
//! [`Game`] owns the full state of one game instance and a handle to the
//! board topology. `apply` is the sole mutator: it validates the proposed
//! action against the legal set, appends it to both logs, dispatches to the
//! per-type handler, and loops on any follow-up action a handler synthesizes
//! (a resumed rondel move, the taxation-triggered game end) so no handler
//! ever re-enters the public entry point.

use std::sync::Arc;

use log::{debug, trace};

use crate::action::Action;
use crate::board::nation::Nation;
use crate::board::province::FactoryKind;
use crate::board::query::BoardQuery;
use crate::error::RuleError;
use crate::legal::imports::import_actions;
use crate::legal::maneuvers::maneuver_actions;
use crate::legal::rondel::FACTORY_COST;
use crate::resolve::factory::build_factory_offers;
use crate::resolve::{economy, factory, maneuver};
use crate::rondel::{passes_investor, RondelSlot};
use crate::setup;
use crate::state::{AnnotatedEntry, GameState, Note};

/// One game instance: board handle plus the full mutable state tree.
pub struct Game {
    board: Arc<dyn BoardQuery>,
    state: GameState,
}

impl Game {
    /// Creates an empty game awaiting an `initialize` action.
    pub fn new(board: Arc<dyn BoardQuery>) -> Self {
        Game { board, state: GameState::new() }
    }

    /// Rebuilds a game by folding a stored log through `apply`.
    ///
    /// Entries the replayed engine synthesizes itself arrive again from the
    /// stored log and are ignored as no longer legal, so the reconstructed
    /// log matches the stored one exactly.
    pub fn from_log(board: Arc<dyn BoardQuery>, log: &[Action]) -> Result<Game, RuleError> {
        let mut game = Game::new(board);
        for action in log {
            game.apply(action.clone())?;
        }
        Ok(game)
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current legal-action set.
    pub fn available_actions(&self) -> &[Action] {
        &self.state.available_actions
    }

    /// Returns the winner once the game has ended.
    pub fn winner(&self) -> Option<&str> {
        self.state.winner.as_deref()
    }

    /// Applies one proposed action.
    ///
    /// An action outside the legal set is silently ignored. A [`RuleError`]
    /// means the caller's view of the legal set has desynchronized; the
    /// canonical log is left without the failed entry.
    pub fn apply(&mut self, action: Action) -> Result<(), RuleError> {
        let mut next = Some(action);
        while let Some(action) = next {
            next = self.step(action)?;
        }
        Ok(())
    }

    /// Validates, logs, and dispatches one action; returns a follow-up
    /// action for the outer loop when a handler synthesizes one.
    fn step(&mut self, action: Action) -> Result<Option<Action>, RuleError> {
        if self.state.game_over {
            trace!("ignoring {} after game end", action.type_name());
            return Ok(None);
        }

        match &action {
            Action::Initialize { players, solo_mode } => {
                let players = players.clone();
                let solo_mode = *solo_mode;
                self.log_action(action.clone());
                let board = Arc::clone(&self.board);
                setup::initialize(&mut self.state, board.as_ref(), &players, solo_mode)?;
                return Ok(None);
            }
            Action::EndGame => {
                self.log_action(action.clone());
                self.end_game();
                return Ok(None);
            }
            _ => {}
        }

        if !self.state.available_actions.iter().any(|a| a.matches(&action)) {
            debug!("rejected {}: not in the legal set", action.type_name());
            return Ok(None);
        }

        self.log_action(action.clone());
        let log_len = self.state.log.len();
        let annotated_len = self.state.annotated_log.len();
        match self.dispatch(&action) {
            Ok(next) => Ok(next),
            Err(err) => {
                // A failed action never becomes part of the canonical log.
                self.state.log.truncate(log_len - 1);
                self.state.annotated_log.truncate(annotated_len - 1);
                Err(err)
            }
        }
    }

    fn log_action(&mut self, action: Action) {
        self.state.log.push(action.clone());
        self.state.annotated_log.push(AnnotatedEntry::Action(action));
    }

    fn dispatch(&mut self, action: &Action) -> Result<Option<Action>, RuleError> {
        let board = Arc::clone(&self.board);
        let board = board.as_ref();
        let state = &mut self.state;
        match action {
            Action::Noop => Ok(None),
            Action::BondPurchase { player, nation, cost } => {
                economy::bond_purchase(state, player, *nation, *cost)?;
                Ok(None)
            }
            Action::SkipBondPurchase { .. } => {
                economy::finish_investor_purchase(state);
                Ok(None)
            }
            Action::EndManeuver => {
                maneuver::end_maneuver_phase(state)?;
                Ok(None)
            }
            Action::Fight { province, incumbent, challenger, target_type } => {
                maneuver::fight(state, board, province, *incumbent, *challenger, *target_type)?;
                Ok(None)
            }
            Action::Coexist { province, challenger, .. } => {
                maneuver::coexist(state, board, province, *challenger)?;
                Ok(None)
            }
            Action::UnfriendlyEntrance { province, .. } => {
                maneuver::unfriendly_entrance(state, board, province)?;
                Ok(None)
            }
            Action::FriendlyEntrance { province, challenger, .. } => {
                maneuver::friendly_entrance(state, board, province, *challenger)?;
                Ok(None)
            }
            Action::ForceInvestor { .. } => {
                // The forced phase replaces the interrupted move: the
                // nation's marker lands on investor.
                let nation = state.current_nation;
                state.nation_mut(nation)?.rondel_position = Some(RondelSlot::Investor);
                economy::run_investor_phase(state, nation)?;
                Ok(None)
            }
            Action::SkipForceInvestor { .. } => {
                // Resume the interrupted rondel move through the normal
                // dispatch loop.
                let resumed = state
                    .log
                    .iter()
                    .rev()
                    .find(|a| matches!(a, Action::Rondel { .. }))
                    .cloned();
                match resumed {
                    Some(rondel) => {
                        state.available_actions = vec![rondel.clone()];
                        Ok(Some(rondel))
                    }
                    None => Ok(None),
                }
            }
            Action::BuildFactory { province } => {
                factory::build_factory(state, board, province)?;
                Ok(None)
            }
            Action::DestroyFactory { province } => {
                maneuver::destroy_factory(state, board, province)?;
                Ok(None)
            }
            Action::SkipDestroyFactory { .. } => {
                maneuver::skip_destroy_factory(state, board)?;
                Ok(None)
            }
            Action::Import { placements } => {
                economy::resolve_import(state, board, placements)?;
                Ok(None)
            }
            Action::Maneuver { origin, destination } => {
                maneuver::execute_move(state, board, origin, destination)?;
                Ok(None)
            }
            Action::Rondel { nation, cost, slot } => self.handle_rondel(*nation, *cost, *slot),
            // Handled before validation in `step`.
            Action::Initialize { .. } | Action::EndGame => Ok(None),
        }
    }

    /// Moves a nation's rondel marker and runs the slot effect.
    fn handle_rondel(
        &mut self,
        nation: Nation,
        cost: u8,
        slot: RondelSlot,
    ) -> Result<Option<Action>, RuleError> {
        let board = Arc::clone(&self.board);
        let board = board.as_ref();
        let state = &mut self.state;

        state.current_nation = nation;
        let from = state.nation(nation)?.rondel_position;

        // Crossing the investor slot lets swiss banks interrupt before the
        // marker moves, provided the nation could pay its bond-holders.
        if passes_investor(from, slot) && !state.passing_through_investor {
            state.passing_through_investor = true;
            if state.can_afford_to_pay_investors(nation) {
                let mut interrupts = Vec::new();
                for bank in &state.swiss_banks {
                    interrupts.push(Action::ForceInvestor { player: bank.clone() });
                    interrupts.push(Action::SkipForceInvestor { player: bank.clone() });
                }
                if !interrupts.is_empty() {
                    state.available_actions = interrupts;
                    return Ok(None);
                }
            }
        }

        {
            let nation_state = state.nation_mut(nation)?;
            nation_state.previous_rondel_position = nation_state.rondel_position;
            nation_state.rondel_position = Some(slot);
        }
        let payer = state.current_player.clone();
        state.player_mut(&payer)?.cash -= cost as i32;
        if cost > 0 {
            state.note(Note::PlayerPaysForRondel { player: payer, cost, slot });
        }

        match slot {
            RondelSlot::Investor => {
                economy::run_investor_phase(state, nation)?;
                Ok(None)
            }
            RondelSlot::Import => {
                let (actions, max_units) = import_actions(state, board, nation);
                state.available_actions = actions;
                state.max_imports = max_units;
                state.importing = true;
                Ok(None)
            }
            RondelSlot::Production1 | RondelSlot::Production2 => {
                for province in board.home_provinces_of(nation) {
                    let kind = state.provinces.get(&province).and_then(|p| p.factory);
                    let Some(kind) = kind else { continue };
                    if state.nobody_is_occupying(&province, nation) {
                        match kind {
                            FactoryKind::Shipyard => {
                                state.stack_mut(nation, &province).fleets += 1;
                            }
                            FactoryKind::Armaments => {
                                state.stack_mut(nation, &province).armies += 1;
                            }
                        }
                    }
                }
                economy::advance_or_run_investor(state)?;
                Ok(None)
            }
            RondelSlot::Taxation => {
                if economy::taxation(state, board, nation)? {
                    Ok(Some(Action::EndGame))
                } else {
                    Ok(None)
                }
            }
            RondelSlot::Maneuver1 | RondelSlot::Maneuver2 => {
                state.maneuvering = true;
                maneuver::collect_units_to_move(state, nation);
                let actions = maneuver_actions(state, board);
                state.available_actions = actions;
                Ok(None)
            }
            RondelSlot::Factory => {
                let offers = if state.nation(nation)?.treasury < FACTORY_COST {
                    Vec::new()
                } else {
                    build_factory_offers(state, board, nation)
                };
                if offers.is_empty() {
                    // Nothing to build: the turn moves on without leaving
                    // the legal set drained.
                    economy::advance_or_run_investor(state)?;
                } else {
                    state.available_actions = offers;
                    state.building_factory = true;
                }
                Ok(None)
            }
        }
    }

    /// Finalizes scores and resolves the winner; afterwards no action is
    /// accepted and the legal set stays empty.
    fn end_game(&mut self) {
        let state = &mut self.state;
        let scores: Vec<(String, i32)> = state
            .order
            .iter()
            .map(|player| {
                let score = state
                    .players
                    .get(player)
                    .map(|p| p.raw_score as i32 + p.cash)
                    .unwrap_or(0);
                (player.clone(), score)
            })
            .collect();

        if let Some(top) = scores.iter().map(|(_, s)| *s).max() {
            let winners: Vec<&String> = scores
                .iter()
                .filter(|(_, s)| *s == top)
                .map(|(p, _)| p)
                .collect();
            if winners.len() == 1 {
                state.winner = Some(winners[0].clone());
            } else {
                // Tie-break: greatest investment in the nation that reached
                // 25 power points, scanning seats in order with strict >.
                let triggering = state
                    .nations
                    .iter()
                    .find(|(_, s)| s.power_points == 25)
                    .map(|(n, _)| *n);
                let mut best: Option<(String, u32)> = None;
                if let Some(nation) = triggering {
                    for winner in winners {
                        let investment = state.total_investment(winner, nation);
                        if investment > best.as_ref().map(|(_, b)| *b).unwrap_or(0) {
                            best = Some((winner.clone(), investment));
                        }
                    }
                }
                state.winner = best.map(|(p, _)| p);
            }
        }

        state.available_actions.clear();
        state.game_over = true;
        debug!("game over; winner {:?}", state.winner);
    }
}
