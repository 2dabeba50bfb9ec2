//! Per-frame simulation step
//!
//! Frame order: spawner, craft integration, weapon fire, pool
//! integration + out-of-bounds culling, collision resolution, then
//! score/difficulty bookkeeping. The caller drains the event queue after
//! each step; nothing observable changes mid-frame.

use super::collision::resolve_collisions;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState, Projectile};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal thrust axis, digital {-1, 0, 1}
    pub thrust_x: f32,
    /// Vertical thrust axis, digital {-1, 0, 1}
    pub thrust_y: f32,
    /// Fire key state this frame
    pub fire: bool,
    /// Start (or restart after game over)
    pub start: bool,
    /// Demo mode: the tick steers and fires by itself
    pub autopilot: bool,
}

/// Advance the game state by one variable timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.start {
        state.start();
    }

    // Inactive and game-over states are frozen until start()/reset()
    if state.phase != GamePhase::Active {
        return;
    }

    // Guard against tab-stall dt spikes
    let dt = dt.clamp(0.0, MAX_FRAME_DT);
    state.elapsed += f64::from(dt);

    let mut input = input.clone();
    if input.autopilot {
        autopilot(state, &mut input);
    }
    let input = &input;

    spawn::advance(state, dt);

    state.craft.set_input_axis(input.thrust_x, input.thrust_y);
    state.craft.integrate(dt);

    if input.fire && state.craft.can_fire() {
        let mounts = state.craft.fire();
        for mount in mounts {
            let id = state.next_entity_id();
            state.projectiles.push(Projectile::new(id, mount));
        }
        state.events.push(GameEvent::Shoot);
    }

    // Integrate pools and cull members that left the play volume
    {
        let GameState {
            asteroids,
            power_ups,
            projectiles,
            events,
            ..
        } = state;
        asteroids.retain_mut(|a| {
            a.integrate(dt);
            if a.is_out_of_bounds() {
                events.push(GameEvent::EntityRemoved { id: a.id });
                false
            } else {
                true
            }
        });
        power_ups.retain_mut(|p| {
            p.integrate(dt);
            if p.is_out_of_bounds() {
                events.push(GameEvent::EntityRemoved { id: p.id });
                false
            } else {
                true
            }
        });
        projectiles.retain_mut(|p| {
            p.integrate(dt);
            if p.is_out_of_bounds() {
                events.push(GameEvent::EntityRemoved { id: p.id });
                false
            } else {
                true
            }
        });
    }

    resolve_collisions(state);

    // A lethal hit above freezes scoring from this point on
    if state.phase == GamePhase::Active {
        state.score += f64::from(dt * state.score_multiplier * state.difficulty).floor() as u64;
        state.score_multiplier = (state.score_multiplier - MULTIPLIER_DECAY * dt).max(1.0);
        state.difficulty = (state.difficulty + DIFFICULTY_RAMP * dt).max(1.0);
    }
}

/// Demo-mode steering: dodge the nearest threatening asteroid, otherwise
/// drift toward the nearest power-up, and fire at anything ahead.
fn autopilot(state: &GameState, input: &mut TickInput) {
    let craft = &state.craft;

    // The most urgent threat is the asteroid closest to the craft plane
    // that is also close laterally
    let threat = state
        .asteroids
        .iter()
        .filter(|a| {
            (a.position.x - craft.position.x).abs() < 2.0
                && (a.position.y - craft.position.y).abs() < 2.0
        })
        .max_by(|a, b| {
            a.position
                .z
                .partial_cmp(&b.position.z)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(threat) = threat {
        let dx = craft.position.x - threat.position.x;
        let dy = craft.position.y - threat.position.y;
        // Dodge along the axis with more room; break ties toward center
        input.thrust_x = if dx.abs() > 0.2 {
            dx.signum()
        } else if craft.position.x > 0.0 {
            -1.0
        } else {
            1.0
        };
        input.thrust_y = if dy.abs() > 0.2 { dy.signum() } else { 0.0 };
    } else if let Some(target) = state.power_ups.iter().min_by(|a, b| {
        let da = (a.position - craft.position).length_squared();
        let db = (b.position - craft.position).length_squared();
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    }) {
        let dx = target.position.x - craft.position.x;
        let dy = target.position.y - craft.position.y;
        input.thrust_x = if dx.abs() > 0.2 { dx.signum() } else { 0.0 };
        input.thrust_y = if dy.abs() > 0.2 { dy.signum() } else { 0.0 };
    } else {
        input.thrust_x = 0.0;
        input.thrust_y = 0.0;
    }

    // Fire whenever an asteroid sits roughly in front of a mount
    input.fire = state.asteroids.iter().any(|a| {
        (a.position.x - craft.position.x).abs() < 1.0
            && (a.position.y - craft.position.y).abs() < 1.0
            && a.position.z < craft.position.z
    });
}
