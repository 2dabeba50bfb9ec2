//! Player craft controller
//!
//! Integrates input into motion, and owns the three gameplay resources:
//! health, shield and weapon heat. All resource math clamps to the
//! documented ranges no matter what dt or damage sequence it sees.

use glam::{EulerRot, Mat3, Vec3};

use crate::consts::*;

/// Weapon mount offsets relative to the craft, rotated by the current roll
const MOUNT_OFFSETS: [Vec3; 2] = [Vec3::new(-0.5, 0.2, -0.5), Vec3::new(0.5, 0.2, -0.5)];

/// The player's craft (singleton, owned by the simulation)
#[derive(Debug, Clone)]
pub struct Spacecraft {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Set from input each frame, consumed by `integrate`
    pub acceleration: Vec3,
    /// Hull integrity in [0, 100]; 0 means game over
    pub health: f32,
    /// Damage absorber in [0, 100], regenerates over time
    pub shield: f32,
    /// Fire-rate gate in [0, ~110); firing adds heat, time removes it
    pub weapon_heat: f32,
    /// Seconds accumulated toward the next shield regen grant
    shield_regen_timer: f32,
    /// Hull-flash countdown after a hit, for the render sink
    pub hit_flash: f32,
}

impl Default for Spacecraft {
    fn default() -> Self {
        Self::new()
    }
}

impl Spacecraft {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            health: MAX_HEALTH,
            shield: MAX_SHIELD,
            weapon_heat: 0.0,
            shield_regen_timer: 0.0,
            hit_flash: 0.0,
        }
    }

    /// Restore all fields to their session defaults
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Record the desired acceleration direction for this frame
    ///
    /// Each axis is a digital input in {-1, 0, 1}; anything else is clamped.
    pub fn set_input_axis(&mut self, x: f32, y: f32) {
        self.acceleration = Vec3::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0), 0.0);
    }

    /// Advance motion and resources by dt
    pub fn integrate(&mut self, dt: f32) {
        // Thrust and friction are applied per call (arcade feel, not scaled by dt)
        self.velocity += self.acceleration;
        self.velocity *= CRAFT_FRICTION;
        self.velocity = self.velocity.clamp_length_max(CRAFT_MAX_SPEED);
        self.position += self.velocity * dt;
        self.acceleration = Vec3::ZERO;

        self.position.x = self.position.x.clamp(-FIELD_HALF_WIDTH, FIELD_HALF_WIDTH);
        self.position.y = self.position.y.clamp(-FIELD_HALF_HEIGHT, FIELD_HALF_HEIGHT);

        // Shield regen: +5 per full elapsed second, possibly several after a stall
        self.shield_regen_timer += dt;
        while self.shield_regen_timer >= SHIELD_REGEN_INTERVAL {
            self.shield = (self.shield + SHIELD_REGEN_AMOUNT).min(MAX_SHIELD);
            self.shield_regen_timer -= SHIELD_REGEN_INTERVAL;
        }

        self.weapon_heat = (self.weapon_heat - WEAPON_COOL_RATE * dt).max(0.0);
        self.hit_flash = (self.hit_flash - dt).max(0.0);
    }

    /// Banking orientation for the render sink: (pitch, yaw, roll)
    pub fn orientation(&self) -> Vec3 {
        Vec3::new(-self.velocity.y * 0.2, 0.0, self.velocity.x * 0.2)
    }

    /// Whether the weapon is cool enough to fire
    pub fn can_fire(&self) -> bool {
        self.weapon_heat < MAX_WEAPON_HEAT
    }

    /// Add heat and return the two world-space muzzle positions
    ///
    /// Heat is deliberately not clamped here: `can_fire` gates at 100, so
    /// the last shot can push heat just past the limit before decay.
    pub fn fire(&mut self) -> [Vec3; 2] {
        self.weapon_heat += WEAPON_HEAT_PER_SHOT;
        let bank = self.orientation();
        let attitude = Mat3::from_euler(EulerRot::XYZ, bank.x, bank.y, bank.z);
        MOUNT_OFFSETS.map(|offset| self.position + attitude * offset)
    }

    /// Apply damage, shield first; the remainder past the shield hits the hull
    pub fn take_damage(&mut self, amount: f32) {
        let shield_before = self.shield;
        self.shield = (self.shield - amount).max(0.0);
        let spill = (amount - shield_before).max(0.0);
        self.health = (self.health - spill).max(0.0);
        self.hit_flash = HIT_FLASH_DURATION;
    }

    /// Heal the hull, capped at full health
    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(MAX_HEALTH);
    }

    /// Apply a collected power-up
    pub fn apply_power_up(&mut self, kind: super::PowerUpKind) {
        use super::PowerUpKind;
        match kind {
            PowerUpKind::Health => self.heal(POWER_UP_HEAL),
            PowerUpKind::Shield => self.shield = (self.shield + POWER_UP_SHIELD).min(MAX_SHIELD),
            PowerUpKind::Weapon => self.weapon_heat = 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PowerUpKind;
    use proptest::prelude::*;

    #[test]
    fn damage_spills_past_shield_into_health() {
        let mut craft = Spacecraft::new();
        craft.shield = 5.0;
        craft.take_damage(20.0);
        assert_eq!(craft.shield, 0.0);
        assert_eq!(craft.health, 85.0);
    }

    #[test]
    fn full_shield_absorbs_damage_entirely() {
        let mut craft = Spacecraft::new();
        craft.take_damage(10.0);
        assert_eq!(craft.shield, 90.0);
        assert_eq!(craft.health, 100.0);
    }

    #[test]
    fn damage_sets_hit_flash_that_decays() {
        let mut craft = Spacecraft::new();
        craft.take_damage(10.0);
        assert_eq!(craft.hit_flash, HIT_FLASH_DURATION);
        craft.integrate(HIT_FLASH_DURATION / 2.0);
        assert!(craft.hit_flash > 0.0);
        craft.integrate(HIT_FLASH_DURATION);
        assert_eq!(craft.hit_flash, 0.0);
    }

    #[test]
    fn shield_regenerates_once_per_second() {
        let mut craft = Spacecraft::new();
        craft.shield = 0.0;
        // Just under a second: no regen yet
        craft.integrate(0.9);
        assert_eq!(craft.shield, 0.0);
        craft.integrate(0.2);
        assert_eq!(craft.shield, SHIELD_REGEN_AMOUNT);
        // A long stall grants several ticks at once
        craft.integrate(3.0);
        assert_eq!(craft.shield, SHIELD_REGEN_AMOUNT * 4.0);
    }

    #[test]
    fn can_fire_iff_heat_below_limit() {
        let mut craft = Spacecraft::new();
        assert!(craft.can_fire());
        craft.weapon_heat = MAX_WEAPON_HEAT - 0.001;
        assert!(craft.can_fire());
        craft.weapon_heat = MAX_WEAPON_HEAT;
        assert!(!craft.can_fire());
    }

    #[test]
    fn fire_adds_exactly_ten_heat_unclamped() {
        let mut craft = Spacecraft::new();
        craft.weapon_heat = 95.0;
        craft.fire();
        assert_eq!(craft.weapon_heat, 105.0);
        assert!(!craft.can_fire());
        // Decay brings it back under the limit
        craft.integrate(1.0);
        assert!(craft.can_fire());
    }

    #[test]
    fn fire_returns_two_distinct_mounts() {
        let mut craft = Spacecraft::new();
        craft.position = Vec3::new(1.0, -0.5, 0.0);
        let [left, right] = craft.fire();
        assert_ne!(left, right);
        assert!(left.x < right.x);
        // Mounts sit ahead of the craft
        assert!(left.z < craft.position.z);
    }

    #[test]
    fn mounts_track_the_pitch_bank() {
        let mut craft = Spacecraft::new();
        // Climbing hard: pitch bank is -vel.y * 0.2 = -1.0 rad, no roll
        craft.velocity = Vec3::new(0.0, 5.0, 0.0);
        let [left, right] = craft.fire();
        assert_eq!(left.y, right.y);
        assert_eq!(left.z, right.z);
        // The unpitched mount sits at y=0.2, z=-0.5; the bank must move both
        assert!(left.y < 0.2);
        assert!((left.z - (-0.5)).abs() > 0.01);
        // Hand-rotated offset about x by -1.0 rad
        let (sin, cos) = (-1.0f32).sin_cos();
        let expected_y = 0.2 * cos - (-0.5) * sin;
        let expected_z = 0.2 * sin + (-0.5) * cos;
        assert!((left.y - expected_y).abs() < 1e-5);
        assert!((left.z - expected_z).abs() < 1e-5);
    }

    #[test]
    fn weapon_power_up_clears_heat() {
        let mut craft = Spacecraft::new();
        craft.weapon_heat = 80.0;
        craft.apply_power_up(PowerUpKind::Weapon);
        assert_eq!(craft.weapon_heat, 0.0);
    }

    #[test]
    fn heal_and_shield_power_ups_cap_at_full() {
        let mut craft = Spacecraft::new();
        craft.health = 90.0;
        craft.apply_power_up(PowerUpKind::Health);
        assert_eq!(craft.health, MAX_HEALTH);

        craft.shield = 70.0;
        craft.apply_power_up(PowerUpKind::Shield);
        assert_eq!(craft.shield, MAX_SHIELD);
    }

    #[test]
    fn position_clamped_to_playfield() {
        let mut craft = Spacecraft::new();
        craft.velocity = Vec3::new(CRAFT_MAX_SPEED, CRAFT_MAX_SPEED, 0.0);
        for _ in 0..600 {
            craft.set_input_axis(1.0, 1.0);
            craft.integrate(1.0 / 60.0);
        }
        assert_eq!(craft.position.x, FIELD_HALF_WIDTH);
        assert_eq!(craft.position.y, FIELD_HALF_HEIGHT);
        assert!(craft.velocity.length() <= CRAFT_MAX_SPEED + 1e-4);
    }

    proptest! {
        /// For any damage/integrate sequence, health and shield stay in range
        #[test]
        fn resources_stay_in_range(
            steps in proptest::collection::vec((0.0f32..500.0, 0.0f32..2.0), 0..64)
        ) {
            let mut craft = Spacecraft::new();
            for (damage, dt) in steps {
                craft.take_damage(damage);
                prop_assert!((0.0..=MAX_HEALTH).contains(&craft.health));
                prop_assert!((0.0..=MAX_SHIELD).contains(&craft.shield));
                craft.integrate(dt);
                prop_assert!((0.0..=MAX_HEALTH).contains(&craft.health));
                prop_assert!((0.0..=MAX_SHIELD).contains(&craft.shield));
                prop_assert!(craft.weapon_heat >= 0.0);
            }
        }
    }
}
