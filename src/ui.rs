//! HUD model for the UI sink
//!
//! The UI layer displays integers; this module truncates the simulation's
//! float resources the same way every frame and reports only the values
//! that actually changed, so the sink repaints nothing redundantly.

use crate::sim::GameState;

/// Health at or below this reads as critical (red) in the HUD
pub const HEALTH_WARN_THRESHOLD: u32 = 20;
/// Weapon heat at or above this reads as overheating
pub const HEAT_WARN_THRESHOLD: u32 = 80;

/// One HUD value that changed this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudChange {
    Score(u64),
    Health(u32),
    Shield(u32),
    WeaponHeat(u32),
}

/// Displayed HUD values, truncated from simulation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudSnapshot {
    pub score: u64,
    pub health: u32,
    pub shield: u32,
    pub weapon_heat: u32,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            health: state.craft.health as u32,
            shield: state.craft.shield as u32,
            weapon_heat: state.craft.weapon_heat as u32,
        }
    }

    pub fn health_is_critical(&self) -> bool {
        self.health <= HEALTH_WARN_THRESHOLD
    }

    pub fn heat_is_critical(&self) -> bool {
        self.weapon_heat >= HEAT_WARN_THRESHOLD
    }

    pub fn shield_is_down(&self) -> bool {
        self.shield == 0
    }
}

/// Retains the last snapshot and diffs against the live state each frame
///
/// Construct with [`Hud::new`] so the baseline comes from the live state;
/// a zeroed baseline would report every field as changed on the first
/// frame.
#[derive(Debug)]
pub struct Hud {
    last: HudSnapshot,
}

impl Hud {
    pub fn new(state: &GameState) -> Self {
        Self {
            last: HudSnapshot::from_state(state),
        }
    }

    /// Current snapshot as of the last `update`
    pub fn snapshot(&self) -> HudSnapshot {
        self.last
    }

    /// Compare against the state and return the values that changed
    pub fn update(&mut self, state: &GameState) -> Vec<HudChange> {
        let next = HudSnapshot::from_state(state);
        let mut changes = Vec::new();
        if next.score != self.last.score {
            changes.push(HudChange::Score(next.score));
        }
        if next.health != self.last.health {
            changes.push(HudChange::Health(next.health));
        }
        if next.shield != self.last.shield {
            changes.push(HudChange::Shield(next.shield));
        }
        if next.weapon_heat != self.last.weapon_heat {
            changes.push(HudChange::WeaponHeat(next.weapon_heat));
        }
        self.last = next;
        changes
    }
}
