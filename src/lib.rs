//! Clockfall Engine - falling-letters clock physics in WASM
//!
//! Letters ring an analog clock face. Each time the second hand ticks onto a
//! letter it drops, then tumbles under gravity against the hand, the other
//! letters and the circular rim.
//!
//! Architecture:
//! - core/       - Math, RNG, console logging
//! - domain/     - Config, time of day, glyph metrics
//! - systems/    - Hand kinematics, letter bodies and contacts
//! - simulation/ - Orchestration, render extraction, wasm facade

// Logging macros must be declared first for textual scoping
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Clockfall engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{ClockConfig, ClockTime, GlyphExtent, GlyphMetrics, GlyphTable, MonospaceMetrics};
pub use simulation::{ClockCore, ClockWorld, PerfStats, RenderSnapshot, SubStepCounts};
pub use systems::hands::{ClockHand, HandKind};
pub use systems::letters::LetterBody;
