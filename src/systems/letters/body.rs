use serde::Serialize;

use crate::core::math::Vec2;
use crate::core::utils::RandomSource;
use crate::domain::{AngularKick, GlyphExtent, PhysicsConfig};
use crate::systems::hands::ClockHand;

/// Smallest collision radius a glyph can get (px)
pub const MIN_EFFECTIVE_RADIUS: f32 = 0.5;

/// Letter Body - one character of the dial text.
///
/// Translation uses Verlet integration: velocity is implicit in
/// `position - prev_position`. Every collision response that changes velocity
/// goes through `set_velocity`, which rewrites `prev_position`.
#[derive(Clone, Debug, Serialize)]
pub struct LetterBody {
    // === Identity ===
    /// Glyph to render
    character: char,

    // === Verlet State ===
    pub(crate) position: Vec2,
    pub(crate) prev_position: Vec2,
    /// Force accumulator (divided by mass), cleared after each integration
    pub(crate) acceleration: Vec2,

    // === Rotation ===
    /// Display angle while resting on the ring
    rest_angle: f32,
    /// Display angle once falling (radians)
    pub(crate) rotation: f32,
    /// Radians per second
    pub(crate) angular_velocity: f32,
    /// One-way RESTING -> FALLING flag
    falling: bool,

    // === Derived Constants ===
    /// Circle approximation of the glyph box
    radius: f32,
    mass: f32,
    moment_of_inertia: f32,
}

impl LetterBody {
    /// Create a resting letter sized from its rendered glyph box
    pub fn new(
        character: char,
        position: Vec2,
        rest_angle: f32,
        extent: GlyphExtent,
        physics: &PhysicsConfig,
    ) -> Self {
        let mut radius = extent.width.max(extent.height) / 2.0 * physics.radius_scale;
        if !radius.is_finite() || radius < MIN_EFFECTIVE_RADIUS {
            radius = MIN_EFFECTIVE_RADIUS;
        }

        let mass = physics.letter_mass;

        // Thin-rod style approximation: I = m * 2r² / 12
        let mut moment_of_inertia = mass * (radius * radius * 2.0) / 12.0;
        if !moment_of_inertia.is_finite() || moment_of_inertia < physics.min_inertia {
            moment_of_inertia = physics.min_inertia;
        }

        Self {
            character,
            position,
            prev_position: position,
            acceleration: Vec2::zero(),
            rest_angle,
            rotation: 0.0,
            angular_velocity: 0.0,
            falling: false,
            radius,
            mass,
            moment_of_inertia,
        }
    }

    /// Implicit velocity over a step of `dt` seconds
    #[inline]
    pub fn velocity(&self, dt: f32) -> Vec2 {
        (self.position - self.prev_position) / dt
    }

    /// Make the next Verlet step read `velocity`
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec2, dt: f32) {
        self.prev_position = self.position - velocity * dt;
    }

    /// Teleport to `position` at rest
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.prev_position = position;
    }

    /// Accumulate a force for the next integration
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force * (1.0 / self.mass);
    }

    pub fn apply_gravity(&mut self, gravity: f32) {
        self.apply_force(Vec2::new(0.0, gravity * self.mass));
    }

    /// Detach from the ring, kicked along the hand's tip velocity
    /// (straight down if the hand is not moving).
    pub fn start_falling(&mut self, hand: &ClockHand, push_force: f32) {
        if self.falling {
            return;
        }
        self.falling = true;
        self.angular_velocity = 0.0;
        self.rotation = self.rest_angle;

        let mut dir = hand.tip_velocity().normalize();
        if dir.length_squared() == 0.0 {
            dir = Vec2::new(0.0, 1.0);
        }
        self.apply_force(dir * push_force);
    }

    /// Contact distance between this letter and a hand's centerline
    #[inline]
    pub fn hand_clearance(&self, hand: &ClockHand, margin: f32) -> f32 {
        self.radius + hand.weight() / 2.0 + margin
    }

    /// True when the letter circle overlaps the hand (plus margin)
    pub fn is_touching_hand(&self, hand: &ClockHand, margin: f32) -> bool {
        hand.distance_to(self.position) < self.hand_clearance(hand, margin)
    }

    /// Spin from a glancing contact with tangential speed `tangential_speed`.
    ///
    /// `torque` is r × J_t at the contact; only its sign is used, and only
    /// when the config asks for torque-derived direction.
    pub(crate) fn apply_spin_kick<R: RandomSource>(
        &mut self,
        tangential_speed: f32,
        torque: f32,
        factor: f32,
        physics: &PhysicsConfig,
        dt: f32,
        rng: &mut R,
    ) {
        if tangential_speed.abs() <= physics.spin_threshold {
            return;
        }
        let kick = (tangential_speed / dt * factor) / self.moment_of_inertia;
        self.angular_velocity += match physics.angular_kick {
            AngularKick::RandomSign => kick * rng.next_sign(),
            AngularKick::Torque if torque == 0.0 => 0.0,
            AngularKick::Torque => kick.abs() * torque.signum(),
        };
    }

    /// Park the letter at `safe_position` with all derivatives cleared
    pub(crate) fn recover(&mut self, safe_position: Vec2) {
        self.position = safe_position;
        self.prev_position = safe_position;
        self.acceleration = Vec2::zero();
        self.angular_velocity = 0.0;
        if !self.rotation.is_finite() {
            self.rotation = self.rest_angle;
        }
        self.falling = true;
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn prev_position(&self) -> Vec2 {
        self.prev_position
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn rest_angle(&self) -> f32 {
        self.rest_angle
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Angle the renderer should draw the glyph at
    pub fn display_angle(&self) -> f32 {
        if self.falling { self.rotation } else { self.rest_angle }
    }

    pub fn is_falling(&self) -> bool {
        self.falling
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn moment_of_inertia(&self) -> f32 {
        self.moment_of_inertia
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::FixedSign;
    use crate::systems::hands::HandKind;

    fn letter(extent: GlyphExtent) -> LetterBody {
        LetterBody::new('A', Vec2::new(10.0, 10.0), 0.3, extent, &PhysicsConfig::default())
    }

    #[test]
    fn derived_constants_positive() {
        let l = letter(GlyphExtent::new(40.0, 60.0));
        assert!((l.radius() - 21.0).abs() < 1e-4);
        assert!(l.moment_of_inertia() > 0.0);
    }

    #[test]
    fn degenerate_glyph_is_floored() {
        let l = letter(GlyphExtent::new(0.0, 0.0));
        assert_eq!(l.radius(), MIN_EFFECTIVE_RADIUS);
        assert!(l.moment_of_inertia() >= PhysicsConfig::default().min_inertia);

        let nan = letter(GlyphExtent::new(f32::NAN, f32::NAN));
        assert!(nan.radius() > 0.0);
        assert!(nan.moment_of_inertia() > 0.0);
    }

    #[test]
    fn velocity_roundtrips_through_prev_position() {
        let mut l = letter(GlyphExtent::new(20.0, 20.0));
        let dt = 1.0 / 480.0;
        l.set_velocity(Vec2::new(12.0, -3.0), dt);
        let v = l.velocity(dt);
        assert!((v.x - 12.0).abs() < 1e-2);
        assert!((v.y + 3.0).abs() < 1e-2);
    }

    #[test]
    fn start_falling_defaults_downward_and_is_idempotent() {
        let mut l = letter(GlyphExtent::new(20.0, 20.0));
        let still = ClockHand::from_angle(HandKind::Second, 100.0, 3.0, Vec2::zero(), 0.0);
        l.start_falling(&still, 5.0);
        assert!(l.is_falling());
        assert_eq!(l.rotation(), 0.3);
        assert_eq!(l.acceleration(), Vec2::new(0.0, 5.0));

        l.start_falling(&still, 5.0);
        assert_eq!(l.acceleration(), Vec2::new(0.0, 5.0));
    }

    #[test]
    fn display_angle_switches_on_fall() {
        let mut l = letter(GlyphExtent::new(20.0, 20.0));
        l.rotation = 2.0;
        assert_eq!(l.display_angle(), 0.3);
        l.falling = true;
        assert_eq!(l.display_angle(), 2.0);
    }

    #[test]
    fn spin_kick_respects_threshold_and_mode() {
        let dt = 1.0 / 480.0;
        let mut cfg = PhysicsConfig::default();
        let mut l = letter(GlyphExtent::new(20.0, 20.0));

        l.apply_spin_kick(5.0, 1.0, cfg.boundary_spin_factor, &cfg, dt, &mut FixedSign(1.0));
        assert_eq!(l.angular_velocity(), 0.0);

        l.apply_spin_kick(20.0, 1.0, cfg.boundary_spin_factor, &cfg, dt, &mut FixedSign(-1.0));
        assert!(l.angular_velocity() < 0.0);

        cfg.angular_kick = AngularKick::Torque;
        let mut t = letter(GlyphExtent::new(20.0, 20.0));
        t.apply_spin_kick(-20.0, 3.0, cfg.boundary_spin_factor, &cfg, dt, &mut FixedSign(-1.0));
        assert!(t.angular_velocity() > 0.0);
    }

    #[test]
    fn recover_clears_state() {
        let mut l = letter(GlyphExtent::new(20.0, 20.0));
        l.rotation = f32::NAN;
        l.angular_velocity = 3.0;
        l.acceleration = Vec2::new(1.0, 1.0);
        l.recover(Vec2::new(1.0, 2.0));
        assert_eq!(l.position(), Vec2::new(1.0, 2.0));
        assert_eq!(l.prev_position(), Vec2::new(1.0, 2.0));
        assert_eq!(l.angular_velocity(), 0.0);
        assert_eq!(l.acceleration(), Vec2::zero());
        assert_eq!(l.rotation(), 0.3);
    }
}
