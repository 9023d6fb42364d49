use crate::core::utils::RandomSource;
use crate::domain::ClockTime;

use super::substep::{sub_step, SubStepCounts};
use super::{ClockCore, PerfTimer};

pub(super) fn frame<R: RandomSource>(core: &mut ClockCore<R>, time: ClockTime) {
    let perf_on = core.perf_enabled;
    let mut timer = if perf_on { Some(PerfTimer::start()) } else { None };

    // Hands move once per rendered frame; the second hand's tick flag is
    // then visible to every sub-step of this frame.
    advance_hands(core, time);
    let hands_ms = timer.as_mut().map(|t| t.lap_ms()).unwrap_or(0.0);

    let counts = run_sub_steps(core);

    core.frame += 1;
    render_refresh(core);

    if let Some(mut t) = timer {
        let physics_ms = t.lap_ms();
        let stats = &mut core.perf_stats;
        stats.reset();
        stats.hands_ms = hands_ms;
        stats.physics_ms = physics_ms;
        stats.step_ms = t.elapsed_ms();
        stats.sub_steps = core.config.physics.sub_steps;
        stats.record(&counts);
        stats.falling_count = core.letters.iter().filter(|l| l.is_falling()).count() as u32;
    }
}

pub(super) fn advance_hands<R: RandomSource>(core: &mut ClockCore<R>, time: ClockTime) {
    let frame_duration = core.config.physics.time_step;
    for hand in core.hands.iter_mut() {
        hand.update(time, frame_duration);
    }
}

pub(super) fn run_sub_steps<R: RandomSource>(core: &mut ClockCore<R>) -> SubStepCounts {
    let dt = core.config.physics.sub_step_dt();
    let mut total = SubStepCounts::default();
    for _ in 0..core.config.physics.sub_steps {
        total.accumulate(&sub_step(core, dt));
    }
    total
}

fn render_refresh<R: RandomSource>(core: &mut ClockCore<R>) {
    super::render_extract::extract(core);
}
