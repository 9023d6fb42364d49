#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
fn ms_between(from: Stamp, to: Stamp) -> f64 {
    to - from
}

#[cfg(not(target_arch = "wasm32"))]
fn ms_between(from: Stamp, to: Stamp) -> f64 {
    to.duration_since(from).as_secs_f64() * 1000.0
}

/// Wall-clock stopwatch with lap support
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started: Stamp,
    lap: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let t = now();
        PerfTimer { started: t, lap: t }
    }

    /// Milliseconds since `start`
    pub(crate) fn elapsed_ms(&self) -> f64 {
        ms_between(self.started, now())
    }

    /// Milliseconds since the previous lap (or `start`), then begin a new lap
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let t = now();
        let ms = ms_between(self.lap, t);
        self.lap = t;
        ms
    }
}
