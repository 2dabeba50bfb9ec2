//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Variable timestep, clamped to a maximum step
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod craft;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, resolve_collisions};
pub use craft::Spacecraft;
pub use state::{
    Asteroid, EntityId, GameEvent, GamePhase, GameState, PowerUp, PowerUpKind, Projectile,
};
pub use tick::{TickInput, tick};
