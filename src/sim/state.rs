//! Game state and core simulation types
//!
//! The whole simulation is owned by [`GameState`]: the craft, the three
//! entity pools, difficulty/score tracking and the seeded RNG. Frontends
//! never mutate it directly; they call [`super::tick`] and drain events.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::craft::Spacecraft;
use crate::consts::*;

/// Unique entity identifier, monotone per game state
pub type EntityId = u32;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Menu / not yet started, simulation frozen
    Inactive,
    /// Active gameplay
    Active,
    /// Run ended, simulation frozen until reset
    GameOver,
}

/// Power-up categories, chosen uniformly at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Heals the craft by 25
    Health,
    /// Recharges the shield by 50
    Shield,
    /// Resets weapon heat to zero
    Weapon,
}

/// Notification emitted during a tick for the render/audio/UI sinks
///
/// Events are queued on the state and drained by the frontend after the
/// step completes, so no intermediate state is ever observable mid-frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A projectile pair was fired
    Shoot,
    /// An asteroid was destroyed (by projectile or craft impact)
    Explosion { position: Vec3 },
    /// The craft collected a power-up
    PowerUpCollected { kind: PowerUpKind },
    /// The craft was hit; carries post-hit resources for the UI
    CraftDamaged { health: f32, shield: f32 },
    /// An entity left the pool; the render sink drops its visual
    EntityRemoved { id: EntityId },
    /// Health reached zero, emitted exactly once per run
    GameOver { score: u64 },
    /// Background music loop should start or stop
    BackgroundMusic { playing: bool },
}

/// A tumbling asteroid, spawned on the far plane and drifting toward the camera
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub id: EntityId,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Euler rotation for the render sink, integrated each frame
    pub rotation: Vec3,
    pub rotation_speed: Vec3,
    /// Visual radius, also the collision half-extent
    pub radius: f32,
}

impl Asteroid {
    pub fn new(id: EntityId, rng: &mut Pcg32) -> Self {
        Self {
            id,
            position: Vec3::new(
                (rng.random::<f32>() - 0.5) * FIELD_HALF_WIDTH * 2.0,
                (rng.random::<f32>() - 0.5) * FIELD_HALF_HEIGHT * 2.0,
                SPAWN_DEPTH,
            ),
            velocity: Vec3::new(
                (rng.random::<f32>() - 0.5) * 2.0,
                (rng.random::<f32>() - 0.5) * 2.0,
                rng.random::<f32>() * 2.0 + 3.0,
            ),
            rotation: Vec3::ZERO,
            rotation_speed: Vec3::new(
                rng.random::<f32>() - 0.5,
                rng.random::<f32>() - 0.5,
                rng.random::<f32>() - 0.5,
            ) * 0.02,
            radius: rng.random_range(ASTEROID_MIN_RADIUS..ASTEROID_MAX_RADIUS),
        }
    }

    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.rotation += self.rotation_speed * dt;
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.position.z > DESPAWN_DEPTH
    }
}

/// A collectible power-up drifting toward the camera
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub id: EntityId,
    pub kind: PowerUpKind,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Spin for the render sink
    pub rotation: Vec3,
}

impl PowerUp {
    pub fn new(id: EntityId, rng: &mut Pcg32) -> Self {
        let kind = match rng.random_range(0..3) {
            0 => PowerUpKind::Health,
            1 => PowerUpKind::Shield,
            _ => PowerUpKind::Weapon,
        };
        Self {
            id,
            kind,
            position: Vec3::new(
                (rng.random::<f32>() - 0.5) * FIELD_HALF_WIDTH * 2.0,
                (rng.random::<f32>() - 0.5) * FIELD_HALF_HEIGHT * 2.0,
                SPAWN_DEPTH,
            ),
            velocity: Vec3::new(0.0, 0.0, POWER_UP_FORWARD_SPEED),
            rotation: Vec3::ZERO,
        }
    }

    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.rotation.x += POWER_UP_SPIN_RATE * dt;
        self.rotation.y += POWER_UP_SPIN_RATE * dt;
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.position.z > DESPAWN_DEPTH
    }
}

/// A projectile with fixed forward velocity
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: EntityId,
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Projectile {
    pub fn new(id: EntityId, position: Vec3) -> Self {
        Self {
            id,
            position,
            velocity: Vec3::new(0.0, 0.0, -PROJECTILE_SPEED),
        }
    }

    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.position.z < PROJECTILE_DESPAWN_DEPTH
    }
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; all randomness flows through here
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulated seconds since the run started
    pub elapsed: f64,
    /// Seconds accumulated toward the next asteroid spawn
    pub spawn_timer: f32,
    /// Monotone difficulty scalar, clamped >= 1.0 at all times
    pub difficulty: f32,
    /// Total score
    pub score: u64,
    /// Transient kill multiplier, decays toward 1.0
    pub score_multiplier: f32,
    /// The player craft (never destroyed during a session)
    pub craft: Spacecraft,
    /// Active asteroids, in spawn order
    pub asteroids: Vec<Asteroid>,
    /// Active power-ups, in spawn order
    pub power_ups: Vec<PowerUp>,
    /// Active projectiles, in spawn order
    pub projectiles: Vec<Projectile>,
    /// Sink notifications queued during the current tick
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: EntityId,
}

impl GameState {
    /// Create a fresh, inactive game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Inactive,
            elapsed: 0.0,
            spawn_timer: 0.0,
            difficulty: 1.0,
            score: 0,
            score_multiplier: 1.0,
            craft: Spacecraft::new(),
            asteroids: Vec::new(),
            power_ups: Vec::new(),
            projectiles: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Begin (or restart after game over) a run
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Inactive | GamePhase::GameOver => {
                self.phase = GamePhase::Active;
                self.events.push(GameEvent::BackgroundMusic { playing: true });
                log::info!("run started (seed {})", self.seed);
            }
            GamePhase::Active => {}
        }
    }

    /// Return to the inactive state and restore all defaults
    ///
    /// Calling this twice in a row yields the same state as calling it once.
    pub fn reset(&mut self) {
        self.craft.reset();
        for a in self.asteroids.drain(..) {
            self.events.push(GameEvent::EntityRemoved { id: a.id });
        }
        for p in self.power_ups.drain(..) {
            self.events.push(GameEvent::EntityRemoved { id: p.id });
        }
        for p in self.projectiles.drain(..) {
            self.events.push(GameEvent::EntityRemoved { id: p.id });
        }
        self.elapsed = 0.0;
        self.spawn_timer = 0.0;
        self.difficulty = 1.0;
        self.score = 0;
        self.score_multiplier = 1.0;
        self.phase = GamePhase::Inactive;
        self.events.push(GameEvent::BackgroundMusic { playing: false });
    }

    /// Drain the events queued since the last call (frontend sink boundary)
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
