//! Time- and probability-driven entity spawning
//!
//! Asteroid inter-arrival time is `BASE_SPAWN_INTERVAL / difficulty`
//! seconds, so the spawn rate climbs linearly as difficulty ramps.
//! Power-ups roll an independent per-frame Bernoulli trial of
//! `POWER_UP_CHANCE * difficulty`. The per-frame (rather than per-second)
//! trial is kept deliberately: it matches the original game's feel.

use rand::Rng;

use super::state::{Asteroid, GameState, PowerUp};
use crate::consts::*;

/// Spawn one asteroid on the far plane
pub fn spawn_asteroid(state: &mut GameState) {
    let id = state.next_entity_id();
    let asteroid = Asteroid::new(id, &mut state.rng);
    log::debug!(
        "asteroid {} spawned at ({:.2}, {:.2})",
        id,
        asteroid.position.x,
        asteroid.position.y
    );
    state.asteroids.push(asteroid);
}

/// Spawn one power-up of a uniformly random kind
pub fn spawn_power_up(state: &mut GameState) {
    let id = state.next_entity_id();
    let power_up = PowerUp::new(id, &mut state.rng);
    log::debug!("power-up {} spawned ({:?})", id, power_up.kind);
    state.power_ups.push(power_up);
}

/// Advance the spawner by one frame
pub fn advance(state: &mut GameState, dt: f32) {
    state.spawn_timer += dt;
    if state.spawn_timer > BASE_SPAWN_INTERVAL / state.difficulty {
        spawn_asteroid(state);
        state.spawn_timer = 0.0;
    }

    if state.rng.random::<f32>() < POWER_UP_CHANCE * state.difficulty {
        spawn_power_up(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    /// Frames until the first asteroid appears at a given difficulty
    fn frames_to_first_spawn(difficulty: f32) -> u32 {
        let mut state = GameState::new(11);
        state.difficulty = difficulty;
        let mut frames = 0;
        while state.asteroids.is_empty() {
            advance(&mut state, DT);
            frames += 1;
            assert!(frames < 10_000, "spawner never fired");
        }
        frames
    }

    #[test]
    fn asteroid_interval_shrinks_with_difficulty() {
        let slow = frames_to_first_spawn(1.0);
        let fast = frames_to_first_spawn(4.0);
        // 2s at difficulty 1, 0.5s at difficulty 4
        assert!(slow > 2 * fast);
        assert!(slow >= (BASE_SPAWN_INTERVAL / DT) as u32);
    }

    #[test]
    fn timer_resets_after_each_spawn() {
        let mut state = GameState::new(5);
        for _ in 0..1000 {
            advance(&mut state, DT);
        }
        // ~16.7 seconds at difficulty 1: expect 8 spawns, timer mid-cycle
        assert_eq!(state.asteroids.len(), 8);
        assert!(state.spawn_timer < BASE_SPAWN_INTERVAL);
    }

    #[test]
    fn power_up_trial_scales_with_difficulty() {
        // At difficulty 1000 the per-frame probability saturates at 1.0
        let mut state = GameState::new(2);
        state.difficulty = 1000.0;
        advance(&mut state, DT);
        assert_eq!(state.power_ups.len(), 1);

        // At difficulty 1 a single frame almost never spawns one; run a
        // long stretch and expect a plausible count for p = 0.001
        let mut state = GameState::new(2);
        let mut spawned = 0;
        for _ in 0..20_000 {
            let before = state.power_ups.len();
            advance(&mut state, DT);
            spawned += state.power_ups.len() - before;
            state.power_ups.clear();
            state.asteroids.clear();
        }
        assert!((1..100).contains(&spawned), "got {spawned}");
    }
}
