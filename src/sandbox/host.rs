//! Sandbox board and its `MatchApi` implementation.

use im::{OrdMap, Vector};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::api::{MatchApi, UnitState};
use crate::cards::{Catalog, ResistanceProfile};
use crate::core::{GameRng, GameRngState, Lane, Side, UnitId};
use crate::effects::StatusKind;

use super::SandboxConfig;

/// Per-side state outside the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SideState {
    pub leader_health: i32,
    pub leader_max_health: i32,
    pub shares: u32,
    /// Draw pile, top first.
    pub deck: Vector<String>,
    pub hand: Vector<String>,
}

impl SideState {
    fn new(leader_health: i32) -> Self {
        Self {
            leader_health,
            leader_max_health: leader_health,
            ..Self::default()
        }
    }
}

/// An in-memory match.
///
/// Cloning is cheap: units and card piles live in persistent collections.
#[derive(Clone, Debug)]
pub struct SandboxMatch {
    units: OrdMap<UnitId, UnitState>,
    resistances: FxHashMap<UnitId, ResistanceProfile>,
    status_sources: FxHashMap<(UnitId, StatusKind), String>,
    sides: [SideState; 2],
    rng: GameRng,
    next_unit: u32,
    turn: u32,
    log: Vec<String>,
}

impl SandboxMatch {
    /// Create an empty board at turn 1.
    #[must_use]
    pub fn new(config: SandboxConfig) -> Self {
        Self {
            units: OrdMap::new(),
            resistances: FxHashMap::default(),
            status_sources: FxHashMap::default(),
            sides: [
                SideState::new(config.leader_health),
                SideState::new(config.leader_health),
            ],
            rng: GameRng::new(config.seed),
            next_unit: 1,
            turn: 1,
            log: Vec::new(),
        }
    }

    // === Board setup ===

    /// Put a fresh unit of `card_id` on the board for `side`.
    ///
    /// Applies the card's `shield_on_summon` and remembers its resistances.
    /// Returns `None` if the catalog has no unit card with that id. Does not
    /// fire triggers; that is the runtime's job.
    pub fn summon(&mut self, catalog: &Catalog, card_id: &str, side: Side) -> Option<UnitId> {
        let card = catalog.get_unit(card_id)?;
        let stats = card.stats()?;
        let lane = card.lane().unwrap_or(Lane::Both);

        let id = UnitId::new(self.next_unit);
        self.next_unit = self.next_unit.saturating_add(1);

        let mut unit = UnitState::new(id, &card.id, &card.name, side, lane, stats.attack, stats.health);
        unit.shield = card.summon_shield();
        self.units.insert(id, unit);
        self.resistances.insert(id, card.resistance());

        trace!(unit = %id, card = card_id, %side, "sandbox summon");
        Some(id)
    }

    /// Insert a prepared unit, replacing any unit with the same id.
    pub fn insert_unit(&mut self, unit: UnitState) {
        self.next_unit = self.next_unit.max(unit.id.raw().saturating_add(1));
        self.units.insert(unit.id, unit);
    }

    /// Mutable access for test setup (damage, statuses).
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut UnitState> {
        self.units.get_mut(&id)
    }

    /// Replace a side's draw pile. The first card is drawn first.
    pub fn set_deck<I, S>(&mut self, side: Side, cards: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sides[side.index()].deck = cards.into_iter().map(Into::into).collect();
    }

    /// Set a leader's current health (clamped to its maximum).
    pub fn set_leader_health(&mut self, side: Side, health: i32) {
        let state = &mut self.sides[side.index()];
        state.leader_health = health.min(state.leader_max_health);
    }

    /// Move to the next turn.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.saturating_add(1);
    }

    // === Queries ===

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn side(&self, side: Side) -> &SideState {
        &self.sides[side.index()]
    }

    #[must_use]
    pub fn shares(&self, side: Side) -> u32 {
        self.side(side).shares
    }

    #[must_use]
    pub fn leader_health(&self, side: Side) -> i32 {
        self.side(side).leader_health
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Vector<String> {
        &self.side(side).hand
    }

    /// Player-facing log lines, oldest first.
    #[must_use]
    pub fn log_lines(&self) -> &[String] {
        &self.log
    }

    /// Who applied the currently recorded `status` to a unit.
    #[must_use]
    pub fn status_source(&self, id: UnitId, status: StatusKind) -> Option<&str> {
        self.status_sources.get(&(id, status)).map(String::as_str)
    }

    /// RNG checkpoint, for replaying a sandbox from the same point.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Whether a status lands on `id` after its resistance roll.
    fn lands(&mut self, id: UnitId, status: StatusKind) -> bool {
        let chance = self
            .resistances
            .get(&id)
            .map_or(0.0, |profile| profile.against(status));
        if chance <= 0.0 {
            return true;
        }
        let label = format!("resist:{}:{}", status, id.raw());
        let resisted = self.rng.roll(&label, chance);
        if resisted {
            trace!(unit = %id, %status, chance, "status resisted");
        }
        !resisted
    }
}

impl MatchApi for SandboxMatch {
    fn unit_ids(&self, side: Side, lane: Option<Lane>) -> Vec<UnitId> {
        self.units
            .values()
            .filter(|u| u.side == side && lane.map_or(true, |l| u.lane.accepts(l)))
            .map(|u| u.id)
            .collect()
    }

    fn unit(&self, id: UnitId) -> Option<UnitState> {
        self.units.get(&id).cloned()
    }

    fn pick_random(&mut self, candidates: &[UnitId], label: &str) -> Option<UnitId> {
        self.rng.pick(label, candidates)
    }

    fn pick_lowest_health(&mut self, candidates: &[UnitId]) -> Option<UnitId> {
        candidates
            .iter()
            .filter_map(|id| self.units.get(id))
            .min_by_key(|u| (u.health, u.id))
            .map(|u| u.id)
    }

    fn heal_unit(&mut self, id: UnitId, amount: u32) -> u32 {
        let Some(unit) = self.units.get_mut(&id) else {
            return 0;
        };
        let missing = (unit.max_health - unit.health).max(0).unsigned_abs();
        let healed = amount.min(missing);
        unit.health += healed as i32;
        healed
    }

    fn add_shield(&mut self, id: UnitId, amount: u32) {
        if let Some(unit) = self.units.get_mut(&id) {
            unit.shield = unit.shield.saturating_add(amount);
        }
    }

    fn cleanse(&mut self, id: UnitId, statuses: &[StatusKind]) -> u32 {
        let turn = self.turn;
        let Some(unit) = self.units.get_mut(&id) else {
            return 0;
        };
        let mut removed = 0;
        for &status in statuses {
            if !unit.has_status(status, turn) {
                continue;
            }
            match status {
                StatusKind::Stun => unit.stun_until = None,
                StatusKind::Exposed => unit.exposed_until = None,
                StatusKind::AtkDown => {
                    unit.attack_penalty = 0;
                    unit.attack_penalty_until = None;
                }
            }
            self.status_sources.remove(&(id, status));
            removed += 1;
        }
        removed
    }

    fn apply_stun(&mut self, id: UnitId, until_turn: u32, source: &str) -> bool {
        if !self.units.contains_key(&id) || !self.lands(id, StatusKind::Stun) {
            return false;
        }
        if let Some(unit) = self.units.get_mut(&id) {
            unit.stun_until = unit.stun_until.max(Some(until_turn));
        }
        self.status_sources.insert((id, StatusKind::Stun), source.to_string());
        true
    }

    fn apply_exposed(&mut self, id: UnitId, until_turn: u32, source: &str) -> bool {
        if !self.units.contains_key(&id) || !self.lands(id, StatusKind::Exposed) {
            return false;
        }
        if let Some(unit) = self.units.get_mut(&id) {
            unit.exposed_until = unit.exposed_until.max(Some(until_turn));
        }
        self.status_sources.insert((id, StatusKind::Exposed), source.to_string());
        true
    }

    fn apply_attack_penalty(&mut self, id: UnitId, magnitude: u32, until_turn: u32, source: &str) {
        if !self.units.contains_key(&id) || !self.lands(id, StatusKind::AtkDown) {
            return;
        }
        if let Some(unit) = self.units.get_mut(&id) {
            unit.attack_penalty = unit.attack_penalty.max(magnitude);
            unit.attack_penalty_until = unit.attack_penalty_until.max(Some(until_turn));
        }
        self.status_sources.insert((id, StatusKind::AtkDown), source.to_string());
    }

    fn modify_attack(&mut self, id: UnitId, delta: i32) -> i32 {
        let Some(unit) = self.units.get_mut(&id) else {
            return 0;
        };
        let before = unit.attack;
        unit.attack = before.saturating_add(delta).max(0);
        unit.attack - before
    }

    fn gain_shares(&mut self, side: Side, amount: u32) {
        let state = &mut self.sides[side.index()];
        state.shares = state.shares.saturating_add(amount);
    }

    fn heal_leader(&mut self, side: Side, amount: u32) -> u32 {
        let state = &mut self.sides[side.index()];
        let missing = (state.leader_max_health - state.leader_health).max(0).unsigned_abs();
        let healed = amount.min(missing);
        state.leader_health += healed as i32;
        healed
    }

    fn draw_card(&mut self, side: Side) -> Option<String> {
        let state = &mut self.sides[side.index()];
        let card = state.deck.pop_front()?;
        state.hand.push_back(card.clone());
        Some(card)
    }

    fn log(&mut self, line: String) {
        self.log.push(line);
    }
}
