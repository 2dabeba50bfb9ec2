//! Sound cue mapping for the external audio backend
//!
//! The simulation never plays audio itself; it emits [`GameEvent`]s and
//! this module translates them into discrete cues. Whatever backend the
//! frontend wires up (or none at all) can fail freely without ever
//! touching a frame.

use crate::sim::GameEvent;

/// Discrete sound cues the backend knows how to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Projectile pair fired
    Shoot,
    /// Asteroid destroyed or craft hit
    Explosion,
    /// Power-up collected
    PowerUp,
    /// Run ended
    GameOver,
    /// Background loop control
    BackgroundStart,
    BackgroundStop,
}

/// Map a simulation event to its sound cue, if it has one
pub fn cue_for_event(event: &GameEvent) -> Option<SoundCue> {
    match event {
        GameEvent::Shoot => Some(SoundCue::Shoot),
        GameEvent::Explosion { .. } => Some(SoundCue::Explosion),
        GameEvent::PowerUpCollected { .. } => Some(SoundCue::PowerUp),
        GameEvent::GameOver { .. } => Some(SoundCue::GameOver),
        GameEvent::BackgroundMusic { playing: true } => Some(SoundCue::BackgroundStart),
        GameEvent::BackgroundMusic { playing: false } => Some(SoundCue::BackgroundStop),
        // Pure render/UI notifications carry no audio
        GameEvent::CraftDamaged { .. } | GameEvent::EntityRemoved { .. } => None,
    }
}
