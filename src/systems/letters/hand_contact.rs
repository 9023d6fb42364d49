//! Letter vs rotating hand.
//!
//! The hand is a kinematic capsule around the segment center -> tip. A falling
//! letter that overlaps it is pushed out along the separation normal, then an
//! impulse against the hand's rigid-rotation velocity field is applied with
//! Coulomb-clamped friction.

use crate::core::math::{closest_point_on_segment, Vec2};
use crate::core::utils::RandomSource;
use crate::domain::PhysicsConfig;
use crate::systems::hands::ClockHand;

use super::LetterBody;

impl LetterBody {
    /// Resolve overlap with `hand`. Returns true when the letter was pushed out.
    pub fn resolve_hand_collision<R: RandomSource>(
        &mut self,
        hand: &ClockHand,
        physics: &PhysicsConfig,
        dt: f32,
        rng: &mut R,
    ) -> bool {
        let closest = closest_point_on_segment(self.position, hand.center(), hand.tip());
        let separation = self.position - closest;
        let dist = separation.length();
        let min_sep = self.hand_clearance(hand, physics.collision_margin);

        // Exactly on the centerline there is no usable normal
        if dist >= min_sep || dist <= 0.0001 {
            return false;
        }

        let n = separation * (1.0 / dist);
        let penetration = min_sep - dist;
        self.position += n * (penetration * physics.penetration_slop);

        let mut v_letter = self.velocity(dt);
        let v_hand = hand.velocity_at(closest);
        let rel = v_letter - v_hand;
        let rel_n = rel.dot(n);

        if rel_n < 0.0 {
            let inv_mass = 1.0 / self.mass();

            let jn = -(1.0 + physics.hand_restitution) * rel_n / inv_mass;
            v_letter += n * (jn * inv_mass);

            let tangent = n.perp();
            let rel_t = rel.dot(tangent);
            let bound = (jn * physics.hand_friction).abs();
            let jt = (-rel_t * physics.hand_friction).clamp(-bound, bound);
            v_letter += tangent * (jt * inv_mass);

            self.set_velocity(v_letter, dt);

            // Contact point sits on the hand side of the letter
            let lever = -n * self.radius();
            let torque = lever.cross(tangent * jt);
            self.apply_spin_kick(rel_t, torque, physics.boundary_spin_factor, physics, dt, rng);
        }

        true
    }
}
