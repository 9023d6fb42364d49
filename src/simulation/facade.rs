use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::domain::{ClockConfig, ClockTime, GlyphCache, GlyphExtent, GlyphTable, MonospaceMetrics};

use super::perf_stats::PerfStats;
use super::{ClockCore, HAND_STRIDE, LETTER_STRIDE};

#[wasm_bindgen]
pub struct ClockWorld {
    core: ClockCore,
}

#[wasm_bindgen]
impl ClockWorld {
    /// Create a clock from an optional (partial) JSON config.
    /// Letters start out sized with monospace metrics until `reset` is called.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<ClockWorld, JsValue> {
        let config = match config_json {
            Some(json) => ClockConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
            None => ClockConfig::default(),
        };
        Ok(Self {
            core: ClockCore::new(config, ClockTime::now(), &MonospaceMetrics::default()),
        })
    }

    /// Rebuild the dial, measuring each distinct glyph with
    /// `measure(char, fontSize) -> [width, height]`
    pub fn reset(&mut self, measure: &js_sys::Function) -> Result<(), JsValue> {
        let text = self.core.config().text.full_text();
        let font_size = self.core.layout().font_size;
        let cache = GlyphCache::measure_text(&text, font_size, |ch, size| {
            measure_with_js(measure, ch, size)
        })
        .map_err(|e| JsValue::from_str(&e))?;
        self.core.reset(ClockTime::now(), &cache);
        Ok(())
    }

    /// Rebuild the dial from a JSON glyph table (advances in em)
    pub fn reset_with_table(&mut self, json: String) -> Result<(), JsValue> {
        let table = GlyphTable::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        self.core.reset(ClockTime::now(), &table);
        Ok(())
    }

    pub fn reset_monospace(&mut self) {
        self.core.reset(ClockTime::now(), &MonospaceMetrics::default());
    }

    /// Advance one frame at the current wall-clock time
    pub fn frame(&mut self) {
        self.core.frame(ClockTime::now());
    }

    /// Advance one frame at an explicit time of day
    pub fn frame_at(&mut self, hour: u32, minute: u32, second: u32, millis: u32) {
        self.core.frame(ClockTime::new(hour, minute, second, millis));
    }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.core.frame_count() }

    #[wasm_bindgen(getter)]
    pub fn letter_count(&self) -> usize { self.core.letter_count() }

    #[wasm_bindgen(getter)]
    pub fn falling_count(&self) -> usize { self.core.falling_count() }

    /// Letters parked after going non-finite
    #[wasm_bindgen(getter)]
    pub fn recoveries(&self) -> u64 { self.core.recoveries_total() }

    #[wasm_bindgen(getter)]
    pub fn font_size(&self) -> f32 { self.core.layout().font_size }

    #[wasm_bindgen(getter)]
    pub fn clock_radius(&self) -> f32 { self.core.layout().clock_radius }

    #[wasm_bindgen(getter)]
    pub fn center_x(&self) -> f32 { self.core.layout().center_x }

    #[wasm_bindgen(getter)]
    pub fn center_y(&self) -> f32 { self.core.layout().center_y }

    /// Character of letter `idx`, in layout order
    pub fn character_at(&self, idx: usize) -> Option<String> {
        self.core.letters().get(idx).map(|l| l.character().to_string())
    }

    /// All characters in layout order, parallel to the letter buffer
    pub fn characters(&self) -> String {
        self.core.letters().iter().map(|l| l.character()).collect()
    }

    /// Get pointer to packed letter data (x, y, angle, falling)
    pub fn letters_ptr(&self) -> *const f32 {
        self.core.letter_buffer().as_ptr()
    }

    pub fn letters_len(&self) -> usize {
        self.core.letter_buffer().len()
    }

    pub fn letter_stride(&self) -> usize {
        LETTER_STRIDE
    }

    /// Get pointer to packed hand data (start x, start y, tip x, tip y, weight)
    pub fn hands_ptr(&self) -> *const f32 {
        self.core.hand_buffer().as_ptr()
    }

    pub fn hands_len(&self) -> usize {
        self.core.hand_buffer().len()
    }

    pub fn hand_stride(&self) -> usize {
        HAND_STRIDE
    }

    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

fn measure_with_js(measure: &js_sys::Function, ch: char, font_size: f32) -> Result<GlyphExtent, String> {
    let value = measure
        .call2(
            &JsValue::NULL,
            &JsValue::from_str(&ch.to_string()),
            &JsValue::from_f64(font_size as f64),
        )
        .map_err(|e| format!("glyph measure threw: {:?}", e))?;
    let pair = value
        .dyn_into::<js_sys::Array>()
        .map_err(|_| format!("glyph measure for {:?} must return [width, height]", ch))?;
    let width = pair.get(0).as_f64();
    let height = pair.get(1).as_f64();
    match (width, height) {
        (Some(w), Some(h)) => Ok(GlyphExtent::new(w as f32, h as f32)),
        _ => Err(format!("glyph measure for {:?} returned non-numbers", ch)),
    }
}
