//! Letter vs letter (circle vs circle).

use crate::domain::PhysicsConfig;

use super::LetterBody;

/// Resolve an overlapping pair. Returns true when the circles overlapped.
///
/// Positional correction moves both current and previous positions so it does
/// not turn into velocity; the impulse then acts on the approach speed only.
pub fn resolve_letter_pair(
    a: &mut LetterBody,
    b: &mut LetterBody,
    physics: &PhysicsConfig,
    dt: f32,
) -> bool {
    let axis = a.position - b.position;
    let dist = axis.length();
    let reach = a.radius() + b.radius();
    if dist <= 0.0001 || dist >= reach {
        return false;
    }

    let n = axis * (1.0 / dist);
    let correction = n * ((reach - dist) * physics.letter_correction_share);
    a.position += correction;
    a.prev_position += correction;
    b.position -= correction;
    b.prev_position -= correction;

    let mut v1 = a.velocity(dt);
    let mut v2 = b.velocity(dt);
    let rel = v1 - v2;
    let vn = rel.dot(n);
    if vn > 0.0 {
        // Already separating
        return true;
    }

    let inv_a = 1.0 / a.mass();
    let inv_b = 1.0 / b.mass();
    let inv_sum = inv_a + inv_b;

    let j = -(1.0 + physics.restitution) * vn / inv_sum;
    v1 += n * (j * inv_a);
    v2 -= n * (j * inv_b);

    let tangent = n.perp();
    let vt = rel.dot(tangent);
    let jt = vt * physics.friction / inv_sum;
    v1 -= tangent * (jt * inv_a);
    v2 += tangent * (jt * inv_b);

    a.set_velocity(v1, dt);
    b.set_velocity(v2, dt);

    if vt.abs() > physics.spin_threshold {
        let spin = vt / dt * physics.letter_spin_factor;
        a.angular_velocity -= spin / a.moment_of_inertia();
        b.angular_velocity += spin / b.moment_of_inertia();
    }

    true
}
