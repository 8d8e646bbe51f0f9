//! Recording stub of the capability API for unit tests.
//!
//! Deliberately dumb: random picks take the first candidate, every mutating
//! call is recorded as a short string, and clamping mirrors the sandbox.

use crate::api::{MatchApi, UnitState};
use crate::core::{Lane, Side, UnitId};
use crate::effects::StatusKind;

#[derive(Debug, Default)]
pub(crate) struct StubApi {
    pub units: Vec<UnitState>,
    pub random_labels: Vec<String>,
    pub calls: Vec<String>,
    pub logs: Vec<String>,
    pub deck: u32,
    pub leader_missing: u32,
    pub resist_all: bool,
    /// Unit removed from the board on the next `log` call.
    pub despawn_on_log: Option<u32>,
}

impl StubApi {
    /// Player-side units given as `(id, health, max_health)`.
    pub fn with_allies(allies: &[(u32, i32, i32)]) -> Self {
        let mut api = Self::default();
        for &(id, health, max) in allies {
            api.units.push(unit(id, Side::Player, health, max));
        }
        api
    }

    pub fn add_enemy(&mut self, id: u32, health: i32, max: i32) {
        self.units.push(unit(id, Side::Enemy, health, max));
    }

    pub fn unit_mut(&mut self, id: u32) -> &mut UnitState {
        self.units
            .iter_mut()
            .find(|u| u.id == UnitId::new(id))
            .expect("unknown stub unit")
    }

    fn find_mut(&mut self, id: UnitId) -> Option<&mut UnitState> {
        self.units.iter_mut().find(|u| u.id == id)
    }
}

fn unit(id: u32, side: Side, health: i32, max: i32) -> UnitState {
    let mut u = UnitState::new(UnitId::new(id), format!("u{id}"), format!("U{id}"), side, Lane::Front, 2, max);
    u.health = health;
    u
}

impl MatchApi for StubApi {
    fn unit_ids(&self, side: Side, lane: Option<Lane>) -> Vec<UnitId> {
        self.units
            .iter()
            .filter(|u| u.side == side && lane.is_none_or(|l| u.lane.accepts(l)))
            .map(|u| u.id)
            .collect()
    }

    fn unit(&self, id: UnitId) -> Option<UnitState> {
        self.units.iter().find(|u| u.id == id).cloned()
    }

    fn pick_random(&mut self, candidates: &[UnitId], label: &str) -> Option<UnitId> {
        self.random_labels.push(label.to_string());
        candidates.first().copied()
    }

    fn pick_lowest_health(&mut self, candidates: &[UnitId]) -> Option<UnitId> {
        candidates
            .iter()
            .filter_map(|id| self.unit(*id))
            .min_by_key(|u| (u.health, u.id))
            .map(|u| u.id)
    }

    fn heal_unit(&mut self, id: UnitId, amount: u32) -> u32 {
        let Some(u) = self.find_mut(id) else { return 0 };
        let healed = (u.max_health - u.health).clamp(0, amount as i32);
        u.health += healed;
        self.calls.push(format!("heal {} {}", id.raw(), healed));
        healed as u32
    }

    fn add_shield(&mut self, id: UnitId, amount: u32) {
        if let Some(u) = self.find_mut(id) {
            u.shield += amount;
        }
        self.calls.push(format!("shield {} {}", id.raw(), amount));
    }

    fn cleanse(&mut self, id: UnitId, statuses: &[StatusKind]) -> u32 {
        let Some(u) = self.find_mut(id) else { return 0 };
        let mut removed = 0;
        for status in statuses {
            let slot = match status {
                StatusKind::Stun => &mut u.stun_until,
                StatusKind::Exposed => &mut u.exposed_until,
                StatusKind::AtkDown => &mut u.attack_penalty_until,
            };
            if slot.take().is_some() {
                removed += 1;
            }
        }
        self.calls.push(format!("cleanse {} {}", id.raw(), removed));
        removed
    }

    fn apply_stun(&mut self, id: UnitId, until_turn: u32, source: &str) -> bool {
        self.calls.push(format!("stun {} {} {}", id.raw(), until_turn, source));
        if self.resist_all {
            return false;
        }
        if let Some(u) = self.find_mut(id) {
            u.stun_until = Some(until_turn);
        }
        true
    }

    fn apply_exposed(&mut self, id: UnitId, until_turn: u32, source: &str) -> bool {
        self.calls.push(format!("exposed {} {} {}", id.raw(), until_turn, source));
        if self.resist_all {
            return false;
        }
        if let Some(u) = self.find_mut(id) {
            u.exposed_until = Some(until_turn);
        }
        true
    }

    fn apply_attack_penalty(&mut self, id: UnitId, magnitude: u32, until_turn: u32, source: &str) {
        self.calls.push(format!("atk_down {} {} {} {}", id.raw(), magnitude, until_turn, source));
    }

    fn modify_attack(&mut self, id: UnitId, delta: i32) -> i32 {
        let Some(u) = self.find_mut(id) else { return 0 };
        let before = u.attack;
        u.attack = (u.attack + delta).max(0);
        let applied = u.attack - before;
        self.calls.push(format!("attack {} {}", id.raw(), applied));
        applied
    }

    fn gain_shares(&mut self, side: Side, amount: u32) {
        self.calls.push(format!("shares {side} {amount}"));
    }

    fn heal_leader(&mut self, side: Side, amount: u32) -> u32 {
        let healed = amount.min(self.leader_missing);
        self.leader_missing -= healed;
        self.calls.push(format!("leader {side} {healed}"));
        healed
    }

    fn draw_card(&mut self, side: Side) -> Option<String> {
        if self.deck == 0 {
            return None;
        }
        self.deck -= 1;
        self.calls.push(format!("draw {side}"));
        Some(format!("card{}", self.deck))
    }

    fn log(&mut self, line: String) {
        self.logs.push(line);
        if let Some(id) = self.despawn_on_log.take() {
            self.units.retain(|u| u.id != UnitId::new(id));
        }
    }
}
