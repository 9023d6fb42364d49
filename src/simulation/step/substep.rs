use crate::core::utils::RandomSource;
use crate::systems::hands::HandKind;
use crate::systems::letters::resolve_letter_pair;

use super::ClockCore;

/// What happened during one or more sub-steps
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubStepCounts {
    /// Letters released from the ring
    pub activations: u32,
    pub hand_contacts: u32,
    pub letter_contacts: u32,
    pub boundary_contacts: u32,
    /// Letters parked after going non-finite
    pub recoveries: u32,
}

impl SubStepCounts {
    pub fn accumulate(&mut self, other: &SubStepCounts) {
        self.activations += other.activations;
        self.hand_contacts += other.hand_contacts;
        self.letter_contacts += other.letter_contacts;
        self.boundary_contacts += other.boundary_contacts;
        self.recoveries += other.recoveries;
    }
}

/// One physics sub-step. Order matters: every collision response reads the
/// pre-integration implicit velocity, integration runs last.
pub(super) fn sub_step<R: RandomSource>(core: &mut ClockCore<R>, dt: f32) -> SubStepCounts {
    let mut counts = SubStepCounts::default();
    let ClockCore { config, boundary, hands, letters, rng, .. } = &mut *core;
    let physics = &config.physics;
    let second = &hands[HandKind::Second.index()];

    // 1. Release on tick, otherwise gravity + second-hand contact
    for letter in letters.iter_mut() {
        if !letter.is_falling() {
            if second.just_ticked() && letter.is_touching_hand(second, physics.collision_margin) {
                letter.start_falling(second, physics.initial_push_force);
                counts.activations += 1;
            }
        } else {
            letter.apply_gravity(physics.gravity);
            if letter.is_touching_hand(second, physics.collision_margin)
                && letter.resolve_hand_collision(second, physics, dt, rng)
            {
                counts.hand_contacts += 1;
            }
        }
    }

    // 2. Every unordered pair of falling letters
    for i in 0..letters.len() {
        let (head, tail) = letters.split_at_mut(i + 1);
        let a = &mut head[i];
        if !a.is_falling() {
            continue;
        }
        for b in tail.iter_mut().filter(|b| b.is_falling()) {
            if resolve_letter_pair(a, b, physics, dt) {
                counts.letter_contacts += 1;
            }
        }
    }

    // 3. Integrate, then keep inside the face
    for (idx, letter) in letters.iter_mut().enumerate() {
        if !letter.is_falling() {
            continue;
        }
        if letter.integrate(physics, dt, boundary) {
            counts.recoveries += 1;
            console_warn!(
                "letter {} ({:?}) went non-finite, parked below the face",
                idx,
                letter.character()
            );
        }
        if letter.resolve_boundary(boundary, physics, dt, rng) {
            counts.boundary_contacts += 1;
        }
    }

    core.recoveries_total += counts.recoveries as u64;
    counts
}
