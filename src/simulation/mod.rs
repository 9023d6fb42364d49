//! ClockCore - falling-letters clock simulation
//!
//! ClockCore only orchestrates:
//! - Hand kinematics live in systems/hands
//! - Letter physics and collision responses live in systems/letters
//!
//! Per rendered frame the hands advance once from wall-clock time, then a
//! fixed number of physics sub-steps run. A reset swaps hands and letters
//! wholesale, so no step ever sees a half-built dial.

use crate::core::utils::{RandomSource, XorShift32};
use crate::domain::{ClockConfig, ClockLayout, ClockTime, GlyphMetrics};
use crate::systems::hands::{ClockHand, HandKind};
use crate::systems::letters::{Boundary, LetterBody};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/reset.rs"]
mod reset;
#[path = "step/step.rs"]
mod step;
#[path = "step/substep.rs"]
mod substep;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::ClockWorld;
pub use perf_stats::PerfStats;
pub use render_extract::{HandView, LetterView, RenderSnapshot, HAND_STRIDE, LETTER_STRIDE};
pub use substep::SubStepCounts;

use perf_timer::PerfTimer;

/// Packed per-frame data for the renderer
pub(crate) struct RenderBuffers {
    /// x, y, display angle, falling (0/1) per letter
    letters: Vec<f32>,
    /// start x, start y, tip x, tip y, weight per hand (hour, minute, second)
    hands: Vec<f32>,
}

/// The simulation state
pub struct ClockCore<R: RandomSource = XorShift32> {
    config: ClockConfig,
    layout: ClockLayout,
    boundary: Boundary,
    hands: [ClockHand; 3],
    letters: Vec<LetterBody>,
    rng: R,

    // State
    frame: u64,
    recoveries_total: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    render: RenderBuffers,
}

impl ClockCore<XorShift32> {
    /// Build the dial for `time`, seeding randomness from the config
    pub fn new<M: GlyphMetrics + ?Sized>(config: ClockConfig, time: ClockTime, metrics: &M) -> Self {
        let rng = XorShift32::new(config.physics.seed);
        Self::with_random(config, time, metrics, rng)
    }
}

impl<R: RandomSource> ClockCore<R> {
    /// Build the dial with an explicit random source
    pub fn with_random<M: GlyphMetrics + ?Sized>(
        config: ClockConfig,
        time: ClockTime,
        metrics: &M,
        rng: R,
    ) -> Self {
        reset::create_clock_core(config, time, metrics, rng)
    }

    /// Rebuild every hand and letter from scratch
    pub fn reset<M: GlyphMetrics + ?Sized>(&mut self, time: ClockTime, metrics: &M) {
        reset::reset(self, time, metrics);
    }

    /// Advance one rendered frame: hands from `time`, then all sub-steps
    pub fn frame(&mut self, time: ClockTime) {
        step::frame(self, time);
    }

    /// Run one frame's worth of sub-steps without moving the hands
    pub fn step_physics(&mut self) -> SubStepCounts {
        step::run_sub_steps(self)
    }

    /// Run a single sub-step of `dt` seconds
    pub fn sub_step(&mut self, dt: f32) -> SubStepCounts {
        substep::sub_step(self, dt)
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn layout(&self) -> &ClockLayout {
        &self.layout
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn letters(&self) -> &[LetterBody] {
        &self.letters
    }

    /// Direct access for scripted scenarios (placing letters, forcing state)
    pub fn letters_mut(&mut self) -> &mut [LetterBody] {
        &mut self.letters
    }

    pub fn hands(&self) -> &[ClockHand; 3] {
        &self.hands
    }

    pub fn hand(&self, kind: HandKind) -> &ClockHand {
        &self.hands[kind.index()]
    }

    /// Direct access for scripted hand poses
    pub fn hand_mut(&mut self, kind: HandKind) -> &mut ClockHand {
        &mut self.hands[kind.index()]
    }

    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    pub fn falling_count(&self) -> usize {
        self.letters.iter().filter(|l| l.is_falling()).count()
    }

    /// Frames advanced since the last reset
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Letters parked after going non-finite since construction
    pub fn recoveries_total(&self) -> u64 {
        self.recoveries_total
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    /// Refresh the packed render buffers from the current state
    pub fn extract_render(&mut self) {
        render_extract::extract(self);
    }

    /// Packed letter data, `LETTER_STRIDE` floats per letter
    pub fn letter_buffer(&self) -> &[f32] {
        &self.render.letters
    }

    /// Packed hand data, `HAND_STRIDE` floats per hand
    pub fn hand_buffer(&self) -> &[f32] {
        &self.render.hands
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        render_extract::snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
