//! Verlet integration, numeric recovery and the circular clock boundary.

use crate::core::math::Vec2;
use crate::core::utils::RandomSource;
use crate::domain::{ClockLayout, PhysicsConfig};

use super::LetterBody;

/// Circular container the falling letters live in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub center: Vec2,
    /// Letter circles must stay inside this radius
    pub playable_radius: f32,
    /// Outer radius of the face; recovered letters are parked below it
    pub face_radius: f32,
}

impl Boundary {
    pub fn from_layout(layout: &ClockLayout) -> Self {
        Self {
            center: Vec2::new(layout.center_x, layout.center_y),
            playable_radius: layout.playable_radius,
            face_radius: layout.clock_radius,
        }
    }

    /// Known-finite spot just under the clock face for `letter`
    pub fn parking_spot(&self, letter: &LetterBody, offset: f32) -> Vec2 {
        self.center + Vec2::new(0.0, self.face_radius + letter.radius() + offset)
    }
}

impl LetterBody {
    /// Advance one sub-step.
    ///
    /// Returns true if the result was non-finite and the letter had to be
    /// parked at the boundary's safe spot instead.
    pub fn integrate(&mut self, physics: &PhysicsConfig, dt: f32, boundary: &Boundary) -> bool {
        if !self.is_falling() {
            return false;
        }

        let max_step = physics.max_velocity * dt;
        let displacement = ((self.position - self.prev_position) * physics.linear_damping)
            .clamp_length(max_step);

        let max_spin = physics.max_angular_velocity;
        self.angular_velocity = self.angular_velocity.clamp(-max_spin, max_spin);

        self.prev_position = self.position;
        self.position += displacement + self.acceleration * (dt * dt);
        self.acceleration = Vec2::zero();

        self.rotation += self.angular_velocity * dt;
        self.angular_velocity *= physics.angular_damping;

        if !self.position.is_finite() || !self.rotation.is_finite() {
            let spot = boundary.parking_spot(self, physics.recovery_offset);
            self.recover(spot);
            return true;
        }
        false
    }

    /// Keep the letter inside the clock face. Returns true on contact.
    ///
    /// The letter is clamped onto the rim; if its implicit velocity then
    /// points toward the center it is reflected with restitution and the
    /// tangential part is reduced by friction.
    pub fn resolve_boundary<R: RandomSource>(
        &mut self,
        boundary: &Boundary,
        physics: &PhysicsConfig,
        dt: f32,
        rng: &mut R,
    ) -> bool {
        let from_center = self.position - boundary.center;
        let dist = from_center.length();
        if dist + self.radius() <= boundary.playable_radius {
            return false;
        }

        let mut normal = from_center.normalize();
        if normal.length_squared() == 0.0 {
            normal = Vec2::new(0.0, 1.0);
        }
        self.position = boundary.center + normal * (boundary.playable_radius - self.radius());

        let mut vel = self.velocity(dt);
        let vn = vel.dot(normal);
        if vn < 0.0 {
            vel -= normal * ((1.0 + physics.restitution) * vn);

            let tangent = normal.perp();
            let vt = vel.dot(tangent);
            let friction_dv = tangent * (vt * physics.friction);
            vel -= friction_dv;

            self.set_velocity(vel, dt);

            let lever = normal * self.radius();
            let torque = lever.cross(-friction_dv);
            self.apply_spin_kick(vt, torque, physics.boundary_spin_factor, physics, dt, rng);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::FixedSign;
    use crate::domain::GlyphExtent;
    use crate::systems::hands::{ClockHand, HandKind};

    const DT: f32 = 1.0 / 480.0;

    fn boundary() -> Boundary {
        Boundary { center: Vec2::new(300.0, 300.0), playable_radius: 237.5, face_radius: 240.0 }
    }

    fn falling(at: Vec2) -> LetterBody {
        let cfg = PhysicsConfig::default();
        let mut l = LetterBody::new('O', at, 0.0, GlyphExtent::new(20.0, 20.0), &cfg);
        let still = ClockHand::from_angle(HandKind::Second, 100.0, 3.0, Vec2::zero(), 0.0);
        l.start_falling(&still, 0.0);
        l.acceleration = Vec2::zero();
        l
    }

    #[test]
    fn resting_letters_do_not_integrate() {
        let cfg = PhysicsConfig::default();
        let mut l = LetterBody::new('O', Vec2::new(1.0, 1.0), 0.0, GlyphExtent::new(20.0, 20.0), &cfg);
        l.apply_gravity(cfg.gravity);
        assert!(!l.integrate(&cfg, DT, &boundary()));
        assert_eq!(l.position(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn gravity_moves_down_and_clears_acceleration() {
        let cfg = PhysicsConfig::default();
        let mut l = falling(Vec2::new(300.0, 300.0));
        l.apply_gravity(cfg.gravity);
        l.integrate(&cfg, DT, &boundary());
        assert!(l.position().y > 300.0);
        assert_eq!(l.acceleration(), Vec2::zero());
    }

    #[test]
    fn speed_and_spin_are_capped() {
        let cfg = PhysicsConfig::default();
        let mut l = falling(Vec2::new(300.0, 300.0));
        l.set_velocity(Vec2::new(5_000.0, 0.0), DT);
        l.angular_velocity = 100.0;
        l.integrate(&cfg, DT, &boundary());
        assert!(l.velocity(DT).length() <= cfg.max_velocity + 0.05);
        assert!(l.angular_velocity() <= cfg.max_angular_velocity);
    }

    #[test]
    fn non_finite_state_is_parked() {
        let cfg = PhysicsConfig::default();
        let b = boundary();
        let mut l = falling(Vec2::new(300.0, 300.0));
        l.acceleration = Vec2::new(f32::NAN, 0.0);
        assert!(l.integrate(&cfg, DT, &b));
        assert_eq!(l.position(), b.parking_spot(&l, cfg.recovery_offset));
        assert_eq!(l.velocity(DT), Vec2::zero());
        assert!(l.rotation().is_finite());
        assert!(l.is_falling());
    }

    #[test]
    fn inside_letter_is_untouched() {
        let cfg = PhysicsConfig::default();
        let mut l = falling(Vec2::new(300.0, 400.0));
        assert!(!l.resolve_boundary(&boundary(), &cfg, DT, &mut FixedSign(1.0)));
        assert_eq!(l.position(), Vec2::new(300.0, 400.0));
    }

    #[test]
    fn clamps_onto_rim_and_reflects_inward_motion() {
        let cfg = PhysicsConfig::default();
        let b = boundary();
        let r = falling(Vec2::zero()).radius();
        let rim = b.playable_radius - r;
        // Slightly past the rim, moving back toward the center
        let mut l = falling(b.center + Vec2::new(0.0, rim + 0.25));
        l.set_velocity(Vec2::new(0.0, -30.0), DT);
        let prev = l.prev_position();

        assert!(l.resolve_boundary(&b, &cfg, DT, &mut FixedSign(1.0)));
        let dist = l.position().distance(b.center);
        assert!((dist + r - b.playable_radius).abs() < 1e-3);

        let normal = Vec2::new(0.0, 1.0);
        let pre = ((b.center + normal * rim) - prev).dot(normal) / DT;
        let post = l.velocity(DT).dot(normal);
        assert!(pre < 0.0 && post > 0.0);
        assert!((post + cfg.restitution * pre).abs() < 0.05);
    }

    #[test]
    fn outward_motion_is_absorbed_by_the_clamp() {
        let cfg = PhysicsConfig::default();
        let b = boundary();
        let r = falling(Vec2::zero()).radius();
        let rim = b.playable_radius - r;
        let mut l = falling(b.center + Vec2::new(0.0, rim - 0.1));
        l.set_velocity(Vec2::new(0.0, 70.0), DT);
        l.integrate(&cfg, DT, &b);
        assert!(l.resolve_boundary(&b, &cfg, DT, &mut FixedSign(1.0)));
        assert!(l.position().distance(b.center) + r <= b.playable_radius + 1e-3);
        assert!(l.velocity(DT).dot(Vec2::new(0.0, 1.0)) >= 0.0);
    }

    #[test]
    fn sliding_contact_gets_friction_and_spin() {
        let mut cfg = PhysicsConfig::default();
        cfg.angular_kick = crate::domain::AngularKick::Torque;
        let b = boundary();
        let r = falling(Vec2::zero()).radius();
        let rim = b.playable_radius - r;
        let mut l = falling(b.center + Vec2::new(0.0, rim + 0.5));
        // Moving right and slightly inward along the bottom of the face
        l.set_velocity(Vec2::new(60.0, -5.0), DT);
        assert!(l.resolve_boundary(&b, &cfg, DT, &mut FixedSign(-1.0)));
        let v = l.velocity(DT);
        assert!(v.x.abs() < 60.0);
        // Rolling right along the floor spins clockwise (+ in screen space)
        assert!(l.angular_velocity() > 0.0);
    }
}
