//! Glyph metrics supplied by the text renderer.
//!
//! The physics only needs a bounding box per character, measured once when
//! the letters are created. Metrics are expressed in em units where noted so a
//! table measured at one font size can be reused at another.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Rendered bounding box of a glyph (px)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphExtent {
    pub width: f32,
    pub height: f32,
}

impl GlyphExtent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Measures glyphs for collision sizing
pub trait GlyphMetrics {
    fn measure(&self, ch: char, font_size: f32) -> GlyphExtent;
}

/// Every glyph has the same box, proportional to the font size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance width in em
    pub advance: f32,
    /// Ascent + descent in em
    pub line_height: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { advance: 0.6, line_height: 1.15 }
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn measure(&self, _ch: char, font_size: f32) -> GlyphExtent {
        GlyphExtent::new(self.advance * font_size, self.line_height * font_size)
    }
}

/// Per-character advance widths (em) with a shared line height
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphTable {
    pub advances: HashMap<String, f32>,
    pub line_height: f32,
    pub fallback_advance: f32,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self {
            advances: HashMap::new(),
            line_height: 1.15,
            fallback_advance: 0.6,
        }
    }
}

impl GlyphTable {
    pub fn new(line_height: f32) -> Self {
        Self { line_height, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let table: GlyphTable = serde_json::from_str(json).map_err(|e| e.to_string())?;
        if !(table.line_height.is_finite() && table.line_height >= 0.0) {
            return Err(format!("glyph line_height must be non-negative, got {}", table.line_height));
        }
        if let Some((key, value)) = table.advances.iter().find(|(_, v)| !(v.is_finite() && **v >= 0.0)) {
            return Err(format!("glyph advance for {:?} must be non-negative, got {}", key, value));
        }
        Ok(table)
    }

    /// Record the advance of `ch` in em
    pub fn insert(&mut self, ch: char, advance_em: f32) {
        self.advances.insert(ch.to_string(), advance_em);
    }

    pub fn advance(&self, ch: char) -> f32 {
        let mut buf = [0u8; 4];
        self.advances
            .get(&*ch.encode_utf8(&mut buf))
            .copied()
            .unwrap_or(self.fallback_advance)
    }

    pub fn len(&self) -> usize {
        self.advances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advances.is_empty()
    }
}

impl GlyphMetrics for GlyphTable {
    fn measure(&self, ch: char, font_size: f32) -> GlyphExtent {
        GlyphExtent::new(self.advance(ch) * font_size, self.line_height * font_size)
    }
}

/// Extents measured up front by an external renderer, one per distinct
/// character at a single font size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphCache {
    extents: HashMap<char, GlyphExtent>,
    font_size: f32,
    fallback: MonospaceMetrics,
}

impl GlyphCache {
    /// Measure every distinct character of `text` once with `measure`
    pub fn measure_text<F>(text: &str, font_size: f32, mut measure: F) -> Result<Self, String>
    where
        F: FnMut(char, f32) -> Result<GlyphExtent, String>,
    {
        let mut extents = HashMap::new();
        for ch in text.chars() {
            if extents.contains_key(&ch) {
                continue;
            }
            let extent = measure(ch, font_size)?;
            if !(extent.width.is_finite() && extent.height.is_finite())
                || extent.width < 0.0
                || extent.height < 0.0
            {
                return Err(format!(
                    "glyph {:?} measured as {}x{}",
                    ch, extent.width, extent.height
                ));
            }
            extents.insert(ch, extent);
        }
        Ok(Self { extents, font_size, fallback: MonospaceMetrics::default() })
    }

    pub fn len(&self) -> usize {
        self.extents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }
}

impl GlyphMetrics for GlyphCache {
    fn measure(&self, ch: char, font_size: f32) -> GlyphExtent {
        match self.extents.get(&ch) {
            Some(e) if self.font_size > 0.0 => {
                let k = font_size / self.font_size;
                GlyphExtent::new(e.width * k, e.height * k)
            }
            _ => self.fallback.measure(ch, font_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_scales_with_font_size() {
        let m = MonospaceMetrics::default();
        let e = m.measure('W', 100.0);
        assert!((e.width - 60.0).abs() < 1e-4);
        assert!((e.height - 115.0).abs() < 1e-4);
    }

    #[test]
    fn table_falls_back_for_unknown_glyphs() {
        let mut table = GlyphTable::new(1.0);
        table.insert('M', 0.9);
        assert!((table.measure('M', 10.0).width - 9.0).abs() < 1e-5);
        assert!((table.measure('?', 10.0).width - 6.0).abs() < 1e-5);
    }

    #[test]
    fn table_from_json() {
        let table = GlyphTable::from_json(r#"{"advances":{"A":0.7," ":0.28},"line_height":1.2}"#)
            .expect("table should parse");
        assert_eq!(table.len(), 2);
        assert!((table.advance(' ') - 0.28).abs() < 1e-6);
        assert!(GlyphTable::from_json(r#"{"advances":{"A":-1.0}}"#).is_err());
    }

    #[test]
    fn cache_measures_each_character_once() {
        let mut calls = 0;
        let cache = GlyphCache::measure_text("ABBA", 20.0, |ch, size| {
            calls += 1;
            let w = if ch == 'A' { 12.0 } else { 10.0 };
            Ok(GlyphExtent::new(w, size))
        })
        .expect("measurement should succeed");
        assert_eq!(calls, 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.measure('A', 20.0), GlyphExtent::new(12.0, 20.0));
        // Rescaled for another font size
        assert_eq!(cache.measure('B', 40.0), GlyphExtent::new(20.0, 40.0));
        // Unknown glyphs fall back to monospace
        assert!((cache.measure('Z', 10.0).width - 6.0).abs() < 1e-5);
    }

    #[test]
    fn cache_rejects_bad_measurements() {
        let err = GlyphCache::measure_text("A", 10.0, |_, _| Ok(GlyphExtent::new(f32::NAN, 1.0)));
        assert!(err.is_err());
        let err = GlyphCache::measure_text("A", 10.0, |_, _| Err("no canvas".to_string()));
        assert_eq!(err.unwrap_err(), "no canvas");
    }
}
