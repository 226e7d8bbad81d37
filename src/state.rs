//! Game state.
//!
//! [`GameState`] is the single owner of every mutable collection: all
//! handler mutation goes through it, so there is no aliasing between the
//! nation, province, and unit tables. It also carries the canonical action
//! log, the display-only annotated log, and the live legal-action set.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::action::Action;
use crate::board::bond::Bond;
use crate::board::nation::{Nation, ALL_NATIONS, NATION_COUNT};
use crate::board::province::{FactoryKind, Province};
use crate::board::query::BoardQuery;
use crate::board::unit::{UnitKind, UnitStack};
use crate::error::RuleError;
use crate::rondel::RondelSlot;

/// A player's holdings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerState {
    pub cash: i32,
    pub bonds: BTreeSet<Bond>,
    /// Bond score excluding cash; recomputed after score-affecting events.
    pub raw_score: u32,
}

/// A nation's mutable attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NationState {
    pub controller: Option<String>,
    pub treasury: i32,
    pub rondel_position: Option<RondelSlot>,
    pub previous_rondel_position: Option<RondelSlot>,
    /// 0..=15; never decreases.
    pub tax_chart_position: u8,
    /// 0..=25; never decreases. Reaching 25 ends the game.
    pub power_points: u8,
}

/// A province's mutable attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProvinceState {
    /// Occupying/claiming nation of a non-home province.
    pub flag: Option<Nation>,
    pub factory: Option<FactoryKind>,
}

/// Synthetic bookkeeping entries for the annotated log. Display-only;
/// never replayed for state derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Note {
    #[serde(rename_all = "camelCase")]
    PlayerPaysForRondel { player: String, cost: u8, slot: RondelSlot },
    #[serde(rename_all = "camelCase")]
    PlayerTradedInForABond { player: String, bond_nation: Nation, bond_cost: u8 },
    PlayerGainsCash { player: String, amount: i32 },
    NationGainsTreasury { nation: Nation, amount: i32 },
    #[serde(rename_all = "camelCase")]
    NationGainsPowerPoints { nation: Nation, power_points: u8 },
    PlayerInvests { player: String },
}

/// One entry of the annotated log: a logged action or a bookkeeping note.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnnotatedEntry {
    Action(Action),
    Note(Note),
}

/// The complete state of one game instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameState {
    /// The canonical log from which state is derived.
    pub log: Vec<Action>,
    /// The canonical log plus display-only bookkeeping entries.
    pub annotated_log: Vec<AnnotatedEntry>,

    /// Seat order; also the canonical player iteration order.
    pub order: Vec<String>,
    pub players: BTreeMap<String, PlayerState>,
    pub nations: BTreeMap<Nation, NationState>,
    pub provinces: BTreeMap<Province, ProvinceState>,
    pub units: BTreeMap<Nation, BTreeMap<Province, UnitStack>>,
    pub available_bonds: BTreeSet<Bond>,

    pub current_nation: Nation,
    pub current_player: String,
    pub investor_card_holder: String,
    /// Players controlling no nation, in the order they were enrolled.
    pub swiss_banks: Vec<String>,

    /// The legal-action set; recomputed before every `apply` returns.
    pub available_actions: Vec<Action>,

    /// Units of the active maneuver phase still waiting to move.
    pub units_to_move: Vec<(Province, UnitKind)>,
    /// Convoy uses per ocean province in the active maneuver phase.
    pub fleet_convoy_count: BTreeMap<Province, u8>,

    pub maneuvering: bool,
    pub handling_conflict: bool,
    pub passing_through_investor: bool,
    pub importing: bool,
    pub building_factory: bool,
    pub investor_card_active: bool,
    pub solo_mode: bool,
    pub max_imports: u8,

    pub winner: Option<String>,
    pub game_over: bool,
}

impl GameState {
    /// Creates the empty pre-initialization state. Nothing is legal until
    /// an `initialize` action is applied.
    pub fn new() -> Self {
        GameState { current_nation: Nation::AustriaHungary, ..GameState::default() }
    }

    /// Looks up a player, failing with the invariant-violation tier.
    pub fn player(&self, name: &str) -> Result<&PlayerState, RuleError> {
        self.players
            .get(name)
            .ok_or_else(|| RuleError::UnknownPlayer(name.to_string()))
    }

    /// Mutable player lookup.
    pub fn player_mut(&mut self, name: &str) -> Result<&mut PlayerState, RuleError> {
        self.players
            .get_mut(name)
            .ok_or_else(|| RuleError::UnknownPlayer(name.to_string()))
    }

    /// Looks up a nation's state, failing if the game is uninitialized.
    pub fn nation(&self, nation: Nation) -> Result<&NationState, RuleError> {
        self.nations.get(&nation).ok_or(RuleError::Uninitialized)
    }

    /// Mutable nation lookup.
    pub fn nation_mut(&mut self, nation: Nation) -> Result<&mut NationState, RuleError> {
        self.nations.get_mut(&nation).ok_or(RuleError::Uninitialized)
    }

    /// Returns a nation's stack at a province (zero stack if none recorded).
    pub fn stack(&self, nation: Nation, province: &Province) -> UnitStack {
        self.units
            .get(&nation)
            .and_then(|m| m.get(province))
            .copied()
            .unwrap_or_default()
    }

    /// Mutable stack access, creating a zero stack on first touch.
    pub fn stack_mut(&mut self, nation: Nation, province: &Province) -> &mut UnitStack {
        self.units
            .entry(nation)
            .or_default()
            .entry(province.clone())
            .or_default()
    }

    /// Appends a bookkeeping note to the annotated log.
    pub fn note(&mut self, note: Note) {
        self.annotated_log.push(AnnotatedEntry::Note(note));
    }

    /// Counts the provinces flying the nation's flag.
    pub fn flag_count(&self, nation: Nation) -> u32 {
        self.provinces
            .values()
            .filter(|p| p.flag == Some(nation))
            .count() as u32
    }

    /// Counts the nation's units everywhere on the board.
    pub fn unit_count(&self, nation: Nation) -> u32 {
        self.units
            .get(&nation)
            .map(|m| m.values().map(|s| s.total() as u32).sum())
            .unwrap_or(0)
    }

    /// Returns true if no other nation has armies in the province.
    pub fn nobody_is_occupying(&self, province: &Province, owning_nation: Nation) -> bool {
        self.units.iter().all(|(nation, stacks)| {
            *nation == owning_nation
                || stacks.get(province).map(|s| s.armies == 0).unwrap_or(true)
        })
    }

    /// Counts the nation's home factories free of foreign armies.
    pub fn unoccupied_factory_count(&self, nation: Nation, board: &dyn BoardQuery) -> u32 {
        board
            .home_provinces_of(nation)
            .iter()
            .filter(|p| {
                self.provinces
                    .get(p)
                    .and_then(|s| s.factory)
                    .is_some()
                    && self.nobody_is_occupying(p, nation)
            })
            .count() as u32
    }

    /// Returns true if hostile foreign armies sit in any home province.
    /// Stacks marked friendly do not occupy.
    pub fn is_occupied(&self, nation: Nation, board: &dyn BoardQuery) -> bool {
        board.home_provinces_of(nation).iter().any(|province| {
            self.units.iter().any(|(other, stacks)| {
                *other != nation
                    && stacks
                        .get(province)
                        .map(|s| s.armies > 0 && !s.friendly)
                        .unwrap_or(false)
            })
        })
    }

    /// Returns the nations the player currently controls.
    pub fn nations_under_control(&self, player: &str) -> Vec<Nation> {
        self.nations
            .iter()
            .filter(|(_, s)| s.controller.as_deref() == Some(player))
            .map(|(n, _)| *n)
            .collect()
    }

    /// Returns the player's bonds in the given nation.
    pub fn player_bonds_of_nation(&self, player: &str, nation: Nation) -> Vec<Bond> {
        self.players
            .get(player)
            .map(|p| p.bonds.iter().filter(|b| b.nation == nation).copied().collect())
            .unwrap_or_default()
    }

    /// Sums the purchase costs of the player's bonds in the nation.
    pub fn total_investment(&self, player: &str, nation: Nation) -> u32 {
        self.player_bonds_of_nation(player, nation)
            .iter()
            .map(|b| b.cost as u32)
            .sum()
    }

    /// Returns true if the nation's treasury covers every bond-holder's
    /// interest for one investor phase.
    pub fn can_afford_to_pay_investors(&self, nation: Nation) -> bool {
        let owed: i32 = self
            .order
            .iter()
            .map(|player| {
                self.player_bonds_of_nation(player, nation)
                    .iter()
                    .map(|b| b.interest() as i32)
                    .sum::<i32>()
            })
            .sum();
        let treasury = self.nations.get(&nation).map(|n| n.treasury).unwrap_or(0);
        owed <= treasury
    }

    /// Scans the log back to the most recent rondel move: has the player
    /// neither bought nor skipped a bond since?
    pub fn has_not_bought_bond_this_turn(&self, player: &str) -> bool {
        for action in self.log.iter().rev() {
            match action {
                Action::Rondel { .. } => break,
                Action::BondPurchase { player: p, .. }
                | Action::SkipBondPurchase { player: p } => {
                    if p == player {
                        return false;
                    }
                }
                _ => {}
            }
        }
        true
    }

    /// Advances to the next nation with a controller and makes its
    /// controller the acting player.
    pub fn advance_player(&mut self) {
        let mut nation = self.current_nation.next();
        for _ in 0..NATION_COUNT {
            if let Some(state) = self.nations.get(&nation) {
                if let Some(controller) = &state.controller {
                    self.current_nation = nation;
                    self.current_player = controller.clone();
                    return;
                }
            }
            nation = nation.next();
        }
        // No nation has a controller; leave the turn where it is.
    }

    /// Passes the investor card one seat to the right.
    pub fn advance_investor_card(&mut self) {
        if self.investor_card_holder.is_empty() {
            return;
        }
        if let Some(index) = self.order.iter().position(|p| *p == self.investor_card_holder) {
            let prev = if index == 0 { self.order.len() - 1 } else { index - 1 };
            self.investor_card_holder = self.order[prev].clone();
        }
    }

    /// Re-derives swiss-bank membership: players controlling no nation are
    /// enrolled in seat order, controllers are struck off.
    pub fn refresh_swiss_banks(&mut self) {
        for player in self.order.clone() {
            if self.nations_under_control(&player).is_empty() {
                if !self.swiss_banks.contains(&player) {
                    self.swiss_banks.push(player);
                }
            } else {
                self.swiss_banks.retain(|p| *p != player);
            }
        }
    }

    /// Recomputes every player's raw score:
    /// sum over bonds of interest * floor(power points / 5).
    pub fn update_raw_scores(&mut self) {
        let power: BTreeMap<Nation, u8> = ALL_NATIONS
            .iter()
            .map(|n| (*n, self.nations.get(n).map(|s| s.power_points).unwrap_or(0)))
            .collect();
        for player in self.players.values_mut() {
            player.raw_score = player
                .bonds
                .iter()
                .map(|b| b.interest() as u32 * (power[&b.nation] / 5) as u32)
                .sum();
        }
    }
}
