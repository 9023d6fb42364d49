//! Wall-clock time as the dial sees it

use serde::{Deserialize, Serialize};

/// Time of day split into dial components
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millis: u32,
}

impl ClockTime {
    /// Build a time, wrapping each component into its range
    pub fn new(hour: u32, minute: u32, second: u32, millis: u32) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
            millis: millis % 1000,
        }
    }

    pub fn from_seconds_of_day(seconds: u32) -> Self {
        Self::new(seconds / 3600, (seconds / 60) % 60, seconds % 60, 0)
    }

    /// Seconds including the sub-second part
    pub fn second_fraction(&self) -> f32 {
        self.second as f32 + self.millis as f32 / 1000.0
    }

    /// Minutes including seconds and milliseconds
    pub fn minute_fraction(&self) -> f32 {
        self.minute as f32 + self.second_fraction() / 60.0
    }

    /// Position on the 12-hour dial, including minutes and whole seconds
    pub fn hour_fraction(&self) -> f32 {
        (self.hour % 12) as f32 + self.minute as f32 / 60.0 + self.second as f32 / 3600.0
    }

    /// Current local time from the browser clock
    #[cfg(target_arch = "wasm32")]
    pub fn now() -> Self {
        let date = js_sys::Date::new_0();
        Self::new(
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds(),
        )
    }

    /// Current UTC time from the system clock
    #[cfg(not(target_arch = "wasm32"))]
    pub fn now() -> Self {
        let since_epoch = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();
        let of_day = (since_epoch.as_secs() % 86_400) as u32;
        let mut t = Self::from_seconds_of_day(of_day);
        t.millis = since_epoch.subsec_millis();
        t
    }
}
