//! Static configuration
//!
//! Every tuning constant lives here and is fixed once a `ClockCore` is built.
//! JSON documents may be partial: unspecified fields keep their defaults.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// How the spin direction of a glancing hit is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngularKick {
    /// Coin flip from the injected random source
    RandomSign,
    /// Sign of the contact-point torque (r × J_t)
    Torque,
}

/// Physical constants for the letter simulation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Nominal duration of one rendered frame (seconds)
    pub time_step: f32,
    pub sub_steps: u32,
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Boundary and letter-letter restitution
    pub restitution: f32,
    /// Boundary and letter-letter tangential friction
    pub friction: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    /// Speed cap (px/s)
    pub max_velocity: f32,
    /// Spin cap (rad/s)
    pub max_angular_velocity: f32,
    /// Magnitude of the release kick
    pub initial_push_force: f32,
    pub letter_mass: f32,
    pub hand_restitution: f32,
    pub hand_friction: f32,
    /// Extra clearance added to the hand contact distance (px)
    pub collision_margin: f32,
    /// Multiplier on hand penetration depth when pushing a letter out
    pub penetration_slop: f32,
    /// Fraction of the overlap each letter moves in a letter-letter contact
    pub letter_correction_share: f32,
    /// Tangential speed above which a contact imparts spin (px/s)
    pub spin_threshold: f32,
    /// Spin gain for hand and boundary contacts
    pub boundary_spin_factor: f32,
    /// Spin gain for letter-letter contacts
    pub letter_spin_factor: f32,
    /// Collision radius as a fraction of half the glyph box
    pub radius_scale: f32,
    pub min_inertia: f32,
    /// Distance below the clock face where a corrupted letter is parked (px)
    pub recovery_offset: f32,
    pub angular_kick: AngularKick,
    pub seed: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::grounded()
    }
}

impl PhysicsConfig {
    /// Heavy, barely bouncing letters that settle quickly
    pub fn grounded() -> Self {
        Self {
            time_step: 1.0 / 60.0,
            sub_steps: 8,
            gravity: 900.0,
            restitution: 0.1,
            friction: 0.7,
            linear_damping: 0.98,
            angular_damping: 0.98,
            max_velocity: 80.0,
            max_angular_velocity: PI * 0.1,
            initial_push_force: 5.0,
            letter_mass: 1.0,
            hand_restitution: 0.005,
            hand_friction: 0.85,
            collision_margin: 2.0,
            penetration_slop: 1.05,
            letter_correction_share: 0.51,
            spin_threshold: 10.0,
            boundary_spin_factor: 0.0002,
            letter_spin_factor: 0.0004,
            radius_scale: 0.7,
            min_inertia: 0.001,
            recovery_offset: 20.0,
            angular_kick: AngularKick::RandomSign,
            seed: 12345,
        }
    }

    /// Bouncier tuning with physically signed spin
    pub fn lively() -> Self {
        Self {
            gravity: 700.0,
            restitution: 0.35,
            friction: 0.4,
            linear_damping: 0.995,
            angular_damping: 0.99,
            max_velocity: 400.0,
            max_angular_velocity: PI,
            initial_push_force: 40.0,
            hand_restitution: 0.3,
            hand_friction: 0.5,
            angular_kick: AngularKick::Torque,
            ..Self::grounded()
        }
    }

    /// Duration of one physics sub-step
    #[inline]
    pub fn sub_step_dt(&self) -> f32 {
        self.time_step / self.sub_steps as f32
    }

    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("time_step", self.time_step),
            ("gravity", self.gravity),
            ("restitution", self.restitution),
            ("friction", self.friction),
            ("linear_damping", self.linear_damping),
            ("angular_damping", self.angular_damping),
            ("max_velocity", self.max_velocity),
            ("max_angular_velocity", self.max_angular_velocity),
            ("initial_push_force", self.initial_push_force),
            ("letter_mass", self.letter_mass),
            ("hand_restitution", self.hand_restitution),
            ("hand_friction", self.hand_friction),
            ("collision_margin", self.collision_margin),
            ("penetration_slop", self.penetration_slop),
            ("letter_correction_share", self.letter_correction_share),
            ("spin_threshold", self.spin_threshold),
            ("boundary_spin_factor", self.boundary_spin_factor),
            ("letter_spin_factor", self.letter_spin_factor),
            ("radius_scale", self.radius_scale),
            ("min_inertia", self.min_inertia),
            ("recovery_offset", self.recovery_offset),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("physics.{} must be finite, got {}", name, value));
            }
        }

        if self.time_step <= 0.0 {
            return Err(format!("physics.time_step must be positive, got {}", self.time_step));
        }
        if self.sub_steps == 0 {
            return Err("physics.sub_steps must be at least 1".to_string());
        }
        if self.letter_mass <= 0.0 {
            return Err(format!("physics.letter_mass must be positive, got {}", self.letter_mass));
        }
        if self.min_inertia <= 0.0 {
            return Err(format!("physics.min_inertia must be positive, got {}", self.min_inertia));
        }
        if self.radius_scale <= 0.0 {
            return Err(format!("physics.radius_scale must be positive, got {}", self.radius_scale));
        }
        for (name, value) in [
            ("restitution", self.restitution),
            ("hand_restitution", self.hand_restitution),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("physics.{} must be within [0, 1], got {}", name, value));
            }
        }
        for (name, value) in [
            ("linear_damping", self.linear_damping),
            ("angular_damping", self.angular_damping),
        ] {
            if value <= 0.0 || value > 1.0 {
                return Err(format!("physics.{} must be within (0, 1], got {}", name, value));
            }
        }
        if self.max_velocity <= 0.0 || self.max_angular_velocity < 0.0 {
            return Err("physics velocity caps must be positive".to_string());
        }
        Ok(())
    }
}

/// Proportions of the clock face relative to the canvas
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Clock radius as a fraction of min(width, height)
    pub radius_ratio: f32,
    /// Radius of the letter ring as a fraction of the clock radius
    pub text_radius_ratio: f32,
    /// Font size as a fraction of the clock radius
    pub font_size_ratio: f32,
    pub face_stroke_weight: f32,
    /// Hand lengths as fractions of the clock radius: hour, minute, second
    pub hand_length_ratios: [f32; 3],
    /// Hand stroke weights: hour, minute, second
    pub hand_weights: [f32; 3],
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600.0,
            canvas_height: 600.0,
            radius_ratio: 0.4,
            text_radius_ratio: 0.8,
            font_size_ratio: 0.28,
            face_stroke_weight: 5.0,
            hand_length_ratios: [0.5, 0.75, 0.9],
            hand_weights: [7.0, 5.0, 3.0],
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(format!(
                "layout canvas must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            ));
        }
        for (name, value) in [
            ("radius_ratio", self.radius_ratio),
            ("text_radius_ratio", self.text_radius_ratio),
            ("font_size_ratio", self.font_size_ratio),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("layout.{} must be positive, got {}", name, value));
            }
        }
        if !(self.face_stroke_weight.is_finite() && self.face_stroke_weight >= 0.0) {
            return Err("layout.face_stroke_weight must be non-negative".to_string());
        }
        if self
            .hand_length_ratios
            .iter()
            .chain(self.hand_weights.iter())
            .any(|v| !(v.is_finite() && *v > 0.0))
        {
            return Err("layout hand lengths and weights must be positive".to_string());
        }
        Ok(())
    }

    /// Resolve ratios into absolute canvas geometry
    pub fn resolve(&self) -> ClockLayout {
        let clock_radius = self.canvas_width.min(self.canvas_height) * self.radius_ratio;
        ClockLayout {
            center_x: self.canvas_width / 2.0,
            center_y: self.canvas_height / 2.0,
            clock_radius,
            playable_radius: clock_radius - self.face_stroke_weight / 2.0,
            text_radius: clock_radius * self.text_radius_ratio,
            font_size: clock_radius * self.font_size_ratio,
            hand_lengths: self.hand_length_ratios.map(|r| clock_radius * r),
            hand_weights: self.hand_weights,
        }
    }
}

/// Absolute clock geometry derived from a `LayoutConfig`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClockLayout {
    pub center_x: f32,
    pub center_y: f32,
    pub clock_radius: f32,
    /// Radius that letter circles must stay inside
    pub playable_radius: f32,
    pub text_radius: f32,
    pub font_size: f32,
    pub hand_lengths: [f32; 3],
    pub hand_weights: [f32; 3],
}

/// Text laid out around the dial
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub text: String,
    pub repetitions: u32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { text: "MARCH2004".to_string(), repetitions: 2 }
    }
}

impl TextConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.text.is_empty() {
            return Err("text.text must not be empty".to_string());
        }
        if self.repetitions == 0 {
            return Err("text.repetitions must be at least 1".to_string());
        }
        Ok(())
    }

    /// The text repeated `repetitions` times
    pub fn full_text(&self) -> String {
        self.text.repeat(self.repetitions as usize)
    }
}

/// Complete engine configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub physics: PhysicsConfig,
    pub layout: LayoutConfig,
    pub text: TextConfig,
}

impl ClockConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: ClockConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        self.physics.validate()?;
        self.layout.validate()?;
        self.text.validate()
    }
}
