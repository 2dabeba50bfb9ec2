//! Void Strike - an arcade space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, kinematics, collisions, game state)
//! - `audio`: Sound cue mapping for the external audio backend
//! - `ui`: HUD snapshot and change detection for the UI layer
//! - `highscores`: Top-10 leaderboard with JSON persistence
//!
//! Rendering, audio playback and input polling live outside this crate.
//! They observe the simulation through [`sim::GameEvent`]s and the public
//! state, and drive it through [`sim::TickInput`].

pub mod audio;
pub mod highscores;
pub mod sim;
pub mod ui;

pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Maximum dt accepted by a single tick (guards against tab-stall spikes)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield half-extents (craft position is clamped to this box)
    pub const FIELD_HALF_WIDTH: f32 = 5.0;
    pub const FIELD_HALF_HEIGHT: f32 = 3.0;

    /// Entities spawn on this z plane and despawn past the camera
    pub const SPAWN_DEPTH: f32 = -20.0;
    pub const DESPAWN_DEPTH: f32 = 5.0;
    /// Projectiles despawn once they fly past the spawn plane
    pub const PROJECTILE_DESPAWN_DEPTH: f32 = -20.0;

    /// Craft movement
    pub const CRAFT_MAX_SPEED: f32 = 5.0;
    pub const CRAFT_FRICTION: f32 = 0.99;

    /// Craft resources
    pub const MAX_HEALTH: f32 = 100.0;
    pub const MAX_SHIELD: f32 = 100.0;
    pub const SHIELD_REGEN_AMOUNT: f32 = 5.0;
    pub const SHIELD_REGEN_INTERVAL: f32 = 1.0;
    pub const MAX_WEAPON_HEAT: f32 = 100.0;
    pub const WEAPON_HEAT_PER_SHOT: f32 = 10.0;
    pub const WEAPON_COOL_RATE: f32 = 20.0;
    /// Seconds the hull flashes after taking a hit
    pub const HIT_FLASH_DURATION: f32 = 0.2;

    /// Asteroids
    pub const ASTEROID_DAMAGE: f32 = 10.0;
    pub const ASTEROID_MIN_RADIUS: f32 = 0.3;
    pub const ASTEROID_MAX_RADIUS: f32 = 0.8;

    /// Projectiles
    pub const PROJECTILE_SPEED: f32 = 20.0;
    pub const PROJECTILE_RADIUS: f32 = 0.05;

    /// Power-ups
    pub const POWER_UP_RADIUS: f32 = 0.3;
    pub const POWER_UP_FORWARD_SPEED: f32 = 3.0;
    pub const POWER_UP_SPIN_RATE: f32 = 1.0;
    pub const POWER_UP_HEAL: f32 = 25.0;
    pub const POWER_UP_SHIELD: f32 = 50.0;

    /// Spawner: asteroid inter-arrival time is BASE_SPAWN_INTERVAL / difficulty
    pub const BASE_SPAWN_INTERVAL: f32 = 2.0;
    /// Per-frame power-up spawn probability is POWER_UP_CHANCE * difficulty
    pub const POWER_UP_CHANCE: f32 = 0.001;

    /// Difficulty grows linearly with elapsed time
    pub const DIFFICULTY_RAMP: f32 = 0.01;
    /// Score awarded per kill before difficulty/multiplier scaling
    pub const KILL_SCORE_BASE: f32 = 100.0;
    /// Multiplier gained per kill and lost per second
    pub const MULTIPLIER_PER_KILL: f32 = 0.1;
    pub const MULTIPLIER_DECAY: f32 = 0.1;

    /// Craft bounding half-extents (matches the shield bubble radius)
    pub const CRAFT_HALF_EXTENT: f32 = 1.2;
}
