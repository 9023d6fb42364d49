use std::f32::consts::{FRAC_PI_2, TAU};

use crate::core::math::Vec2;
use crate::core::utils::RandomSource;
use crate::domain::{ClockConfig, ClockLayout, ClockTime, GlyphMetrics};
use crate::systems::hands::{ClockHand, HandKind};
use crate::systems::letters::{Boundary, LetterBody};

use super::perf_stats::PerfStats;
use super::render_extract;
use super::{ClockCore, RenderBuffers};

pub(super) fn create_clock_core<R: RandomSource, M: GlyphMetrics + ?Sized>(
    config: ClockConfig,
    time: ClockTime,
    metrics: &M,
    mut rng: R,
) -> ClockCore<R> {
    let layout = config.layout.resolve();
    let hands = build_hands(&layout, time);
    let letters = layout_letters(&config, &layout, metrics);
    rng.reseed(config.physics.seed);

    let mut core = ClockCore {
        boundary: Boundary::from_layout(&layout),
        hands,
        letters,
        rng,
        frame: 0,
        recoveries_total: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        render: RenderBuffers {
            letters: Vec::new(),
            hands: Vec::new(),
        },
        layout,
        config,
    };
    render_extract::extract(&mut core);
    core
}

pub(super) fn reset<R: RandomSource, M: GlyphMetrics + ?Sized>(
    core: &mut ClockCore<R>,
    time: ClockTime,
    metrics: &M,
) {
    // Build the new dial completely before swapping it in
    let hands = build_hands(&core.layout, time);
    let letters = layout_letters(&core.config, &core.layout, metrics);

    core.hands = hands;
    core.letters = letters;
    core.rng.reseed(core.config.physics.seed);
    core.frame = 0;
    core.perf_stats.reset();
    render_extract::extract(core);

    console_log!(
        "clock reset at {:02}:{:02}:{:02} with {} letters",
        time.hour,
        time.minute,
        time.second,
        core.letters.len()
    );
}

/// Hour, minute and second hands posed for `time`
pub(super) fn build_hands(layout: &ClockLayout, time: ClockTime) -> [ClockHand; 3] {
    let center = Vec2::new(layout.center_x, layout.center_y);
    HandKind::ALL.map(|kind| {
        ClockHand::new(
            kind,
            layout.hand_lengths[kind.index()],
            layout.hand_weights[kind.index()],
            center,
            time,
        )
    })
}

/// Evenly space the repeated text around the ring, first letter at the top.
/// Each glyph is drawn tangent to the ring (placement angle + 90°).
pub(super) fn layout_letters<M: GlyphMetrics + ?Sized>(
    config: &ClockConfig,
    layout: &ClockLayout,
    metrics: &M,
) -> Vec<LetterBody> {
    let text: Vec<char> = config.text.full_text().chars().collect();
    if text.is_empty() {
        return Vec::new();
    }

    let center = Vec2::new(layout.center_x, layout.center_y);
    let spacing = TAU / text.len() as f32;

    text.iter()
        .enumerate()
        .map(|(i, &ch)| {
            let angle = -FRAC_PI_2 + spacing * i as f32;
            let position = center + Vec2::from_angle(angle) * layout.text_radius;
            let extent = metrics.measure(ch, layout.font_size);
            LetterBody::new(ch, position, angle + FRAC_PI_2, extent, &config.physics)
        })
        .collect()
}
