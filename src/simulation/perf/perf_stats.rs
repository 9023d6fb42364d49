use wasm_bindgen::prelude::*;

use super::SubStepCounts;

/// Timings and contact counts for the last frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) hands_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) sub_steps: u32,
    pub(super) falling_count: u32,
    pub(super) activations: u32,
    pub(super) hand_contacts: u32,
    pub(super) letter_contacts: u32,
    pub(super) boundary_contacts: u32,
    pub(super) recoveries: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record(&mut self, counts: &SubStepCounts) {
        self.activations = counts.activations;
        self.hand_contacts = counts.hand_contacts;
        self.letter_contacts = counts.letter_contacts;
        self.boundary_contacts = counts.boundary_contacts;
        self.recoveries = counts.recoveries;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn hands_ms(&self) -> f64 { self.hands_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn sub_steps(&self) -> u32 { self.sub_steps }
    #[wasm_bindgen(getter)]
    pub fn falling_count(&self) -> u32 { self.falling_count }
    #[wasm_bindgen(getter)]
    pub fn activations(&self) -> u32 { self.activations }
    #[wasm_bindgen(getter)]
    pub fn hand_contacts(&self) -> u32 { self.hand_contacts }
    #[wasm_bindgen(getter)]
    pub fn letter_contacts(&self) -> u32 { self.letter_contacts }
    #[wasm_bindgen(getter)]
    pub fn boundary_contacts(&self) -> u32 { self.boundary_contacts }
    #[wasm_bindgen(getter)]
    pub fn recoveries(&self) -> u32 { self.recoveries }
}
