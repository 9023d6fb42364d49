use std::f32::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

use crate::core::math::{distance_to_segment, Vec2};
use crate::domain::ClockTime;

/// Which hand of the clock
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];

    /// Index into per-hand layout arrays (hour, minute, second)
    pub fn index(self) -> usize {
        match self {
            HandKind::Hour => 0,
            HandKind::Minute => 1,
            HandKind::Second => 2,
        }
    }

    /// Dial angle for `time`, 0 pointing up, before normalization.
    ///
    /// Second hand jumps once per whole second; minute and hour sweep.
    fn dial_angle(self, time: &ClockTime) -> f32 {
        let turns = match self {
            HandKind::Second => time.second as f32 / 60.0,
            HandKind::Minute => time.minute_fraction() / 60.0,
            HandKind::Hour => time.hour_fraction() / 12.0,
        };
        turns * TAU - FRAC_PI_2
    }

    /// Whole value tracked for tick detection
    fn whole_value(self, time: &ClockTime) -> u32 {
        match self {
            HandKind::Second => time.second,
            HandKind::Minute => time.minute,
            HandKind::Hour => time.hour % 12,
        }
    }
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    if a >= TAU { 0.0 } else { a }
}

/// A clock hand driven directly by wall-clock time.
///
/// The hand is kinematic: its angle is recomputed from the time every frame
/// and its tip velocity is inferred from the positional jump.
#[derive(Clone, Debug, Serialize)]
pub struct ClockHand {
    kind: HandKind,
    length: f32,
    /// Stroke weight; half of it is the collision half-thickness
    weight: f32,
    center: Vec2,
    angle: f32,
    tip: Vec2,
    prev_tip: Vec2,
    tip_velocity: Vec2,
    last_whole: u32,
    just_ticked: bool,
}

impl ClockHand {
    /// Create a hand posed for `time`.
    ///
    /// The second hand starts from whole seconds only, the minute hand from
    /// minutes and seconds, the hour hand from hours and minutes.
    pub fn new(kind: HandKind, length: f32, weight: f32, center: Vec2, time: ClockTime) -> Self {
        let turns = match kind {
            HandKind::Second => time.second as f32 / 60.0,
            HandKind::Minute => (time.minute as f32 + time.second as f32 / 60.0) / 60.0,
            HandKind::Hour => ((time.hour % 12) as f32 + time.minute as f32 / 60.0) / 12.0,
        };
        let mut hand = Self::from_angle(kind, length, weight, center, turns * TAU - FRAC_PI_2);
        hand.last_whole = kind.whole_value(&time);
        hand
    }

    /// Create a hand at a fixed angle (radians, 0 = +x)
    pub fn from_angle(kind: HandKind, length: f32, weight: f32, center: Vec2, angle: f32) -> Self {
        let angle = normalize_angle(angle);
        let tip = center + Vec2::from_angle(angle) * length;
        Self {
            kind,
            length,
            weight,
            center,
            angle,
            tip,
            prev_tip: tip,
            tip_velocity: Vec2::zero(),
            last_whole: 0,
            just_ticked: false,
        }
    }

    /// Advance to `time`. Call once per rendered frame.
    pub fn update(&mut self, time: ClockTime, frame_duration: f32) {
        self.prev_tip = self.tip;
        self.just_ticked = false;

        if self.kind == HandKind::Second {
            let whole = self.kind.whole_value(&time);
            if whole != self.last_whole {
                self.just_ticked = true;
                self.last_whole = whole;
            }
        }

        self.set_angle(self.kind.dial_angle(&time), frame_duration);
    }

    /// Pose the hand at `angle` and infer the tip velocity from the jump
    pub fn set_angle(&mut self, angle: f32, frame_duration: f32) {
        self.angle = normalize_angle(angle);
        self.tip = self.center + Vec2::from_angle(self.angle) * self.length;
        self.tip_velocity = if frame_duration > 0.0 {
            (self.tip - self.prev_tip) / frame_duration
        } else {
            Vec2::zero()
        };
    }

    /// Force the tick flag (scripted clocks and tests)
    pub fn set_just_ticked(&mut self, ticked: bool) {
        self.just_ticked = ticked;
    }

    /// Velocity of the hand surface at `point`, treating the hand as a rigid
    /// rotation: tip velocity scaled by distance from the pivot.
    pub fn velocity_at(&self, point: Vec2) -> Vec2 {
        let frac = if self.length == 0.0 {
            1.0
        } else {
            ((point - self.center).length() / self.length).clamp(0.0, 1.0)
        };
        self.tip_velocity * frac
    }

    /// Distance from `point` to the hand's centerline segment
    pub fn distance_to(&self, point: Vec2) -> f32 {
        distance_to_segment(point, self.center, self.tip)
    }

    pub fn kind(&self) -> HandKind {
        self.kind
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn tip(&self) -> Vec2 {
        self.tip
    }

    pub fn prev_tip(&self) -> Vec2 {
        self.prev_tip
    }

    pub fn tip_velocity(&self) -> Vec2 {
        self.tip_velocity
    }

    pub fn just_ticked(&self) -> bool {
        self.just_ticked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn second_hand(time: ClockTime) -> ClockHand {
        ClockHand::new(HandKind::Second, 100.0, 3.0, Vec2::new(0.0, 0.0), time)
    }

    #[test]
    fn zero_points_up() {
        let hand = second_hand(ClockTime::new(0, 0, 0, 0));
        assert!((hand.tip().x).abs() < 1e-3);
        assert!((hand.tip().y + 100.0).abs() < 1e-3);
        assert!((hand.angle() - 3.0 * FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn angle_stays_normalized() {
        for s in 0..60 {
            let hand = second_hand(ClockTime::new(0, 0, s, 0));
            assert!(hand.angle() >= 0.0 && hand.angle() < TAU);
        }
        assert!(normalize_angle(-1e-9) < TAU);
    }

    #[test]
    fn ticks_only_when_second_changes() {
        let mut hand = second_hand(ClockTime::new(10, 0, 59, 0));
        hand.update(ClockTime::new(10, 0, 59, 500), DT);
        assert!(!hand.just_ticked());
        assert_eq!(hand.tip_velocity(), Vec2::zero());

        hand.update(ClockTime::new(10, 1, 0, 10), DT);
        assert!(hand.just_ticked());
        // 59 -> 0 moves the tip rightward across the top
        assert!(hand.tip_velocity().x > 0.0);

        hand.update(ClockTime::new(10, 1, 0, 30), DT);
        assert!(!hand.just_ticked());
        assert_eq!(hand.tip_velocity(), Vec2::zero());
    }

    #[test]
    fn minute_hand_sweeps_and_never_ticks() {
        let mut hand = ClockHand::new(HandKind::Minute, 100.0, 5.0, Vec2::zero(), ClockTime::new(3, 15, 0, 0));
        let before = hand.angle();
        hand.update(ClockTime::new(3, 15, 30, 0), DT);
        assert!(!hand.just_ticked());
        assert!(hand.angle() > before);
        // 15 minutes points right
        assert!((before - 0.0).abs() < 1e-5);
    }

    #[test]
    fn hour_hand_uses_twelve_hour_dial() {
        let a = ClockHand::new(HandKind::Hour, 50.0, 7.0, Vec2::zero(), ClockTime::new(15, 0, 0, 0));
        let b = ClockHand::new(HandKind::Hour, 50.0, 7.0, Vec2::zero(), ClockTime::new(3, 0, 0, 0));
        assert!((a.angle() - b.angle()).abs() < 1e-6);
        assert!(a.angle().abs() < 1e-5);
    }

    #[test]
    fn surface_velocity_scales_with_radius() {
        let mut hand = ClockHand::from_angle(HandKind::Second, 100.0, 3.0, Vec2::zero(), 0.0);
        hand.set_angle(0.1, DT);
        let tip_v = hand.tip_velocity();
        let half = hand.velocity_at(Vec2::new(50.0, 0.0));
        assert!((half.x - tip_v.x * 0.5).abs() < 1e-3);
        assert!((half.y - tip_v.y * 0.5).abs() < 1e-3);
        let beyond = hand.velocity_at(Vec2::new(500.0, 0.0));
        assert_eq!(beyond, tip_v);
    }
}
