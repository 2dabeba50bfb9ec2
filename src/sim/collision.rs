//! Axis-aligned bounding boxes and the per-frame collision pass
//!
//! Runs once per frame after every entity has integrated. Bounding
//! volumes are rebuilt from current transforms each pass, never cached
//! across frames. Removals are deferred behind flag arrays so that a hit
//! resolved mid-iteration can never skip or double-count a pair.

use glam::Vec3;

use super::state::{Asteroid, GameEvent, GamePhase, GameState, PowerUp, Projectile};
use crate::consts::*;

/// An axis-aligned box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Non-empty overlap on all three axes (touching counts as overlap)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

impl super::Spacecraft {
    /// Bounding volume around the shield bubble
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, Vec3::splat(CRAFT_HALF_EXTENT))
    }
}

impl Asteroid {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, Vec3::splat(self.radius))
    }
}

impl PowerUp {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, Vec3::splat(POWER_UP_RADIUS))
    }
}

impl Projectile {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, Vec3::splat(PROJECTILE_RADIUS))
    }
}

/// Resolve all category pairs for this frame
///
/// Order matches entity iteration order: asteroids against the craft,
/// then against projectiles, then power-ups against the craft. Each
/// asteroid dies at most once; a dead projectile cannot kill a second
/// asteroid in the same frame.
pub fn resolve_collisions(state: &mut GameState) {
    let GameState {
        craft,
        asteroids,
        power_ups,
        projectiles,
        events,
        score,
        score_multiplier,
        difficulty,
        phase,
        ..
    } = state;

    let craft_bb = craft.bounds();
    let mut asteroid_dead = vec![false; asteroids.len()];
    let mut projectile_dead = vec![false; projectiles.len()];
    let mut craft_destroyed = false;

    for (ai, asteroid) in asteroids.iter().enumerate() {
        let asteroid_bb = asteroid.bounds();

        if asteroid_bb.intersects(&craft_bb) {
            craft.take_damage(ASTEROID_DAMAGE);
            asteroid_dead[ai] = true;
            events.push(GameEvent::Explosion {
                position: asteroid.position,
            });
            events.push(GameEvent::CraftDamaged {
                health: craft.health,
                shield: craft.shield,
            });
            events.push(GameEvent::EntityRemoved { id: asteroid.id });
            if craft.health <= 0.0 {
                craft_destroyed = true;
            }
            continue;
        }

        for (pi, projectile) in projectiles.iter().enumerate() {
            if projectile_dead[pi] {
                continue;
            }
            if asteroid_bb.intersects(&projectile.bounds()) {
                asteroid_dead[ai] = true;
                projectile_dead[pi] = true;
                *score += (KILL_SCORE_BASE * *difficulty * *score_multiplier).floor() as u64;
                *score_multiplier += MULTIPLIER_PER_KILL;
                events.push(GameEvent::Explosion {
                    position: asteroid.position,
                });
                events.push(GameEvent::EntityRemoved { id: asteroid.id });
                events.push(GameEvent::EntityRemoved { id: projectile.id });
                break;
            }
        }
    }

    let mut i = 0;
    asteroids.retain(|_| {
        let keep = !asteroid_dead[i];
        i += 1;
        keep
    });
    let mut i = 0;
    projectiles.retain(|_| {
        let keep = !projectile_dead[i];
        i += 1;
        keep
    });

    power_ups.retain(|power_up| {
        if power_up.bounds().intersects(&craft_bb) {
            craft.apply_power_up(power_up.kind);
            events.push(GameEvent::PowerUpCollected { kind: power_up.kind });
            events.push(GameEvent::EntityRemoved { id: power_up.id });
            false
        } else {
            true
        }
    });

    if craft_destroyed && *phase == GamePhase::Active {
        *phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver { score: *score });
        events.push(GameEvent::BackgroundMusic { playing: false });
        log::info!("game over, final score {}", score);
    }
}
