//! Domain types: configuration, time and glyph metrics

pub mod config;
pub mod glyphs;
pub mod time;

pub use config::{AngularKick, ClockConfig, ClockLayout, LayoutConfig, PhysicsConfig, TextConfig};
pub use glyphs::{GlyphCache, GlyphExtent, GlyphMetrics, GlyphTable, MonospaceMetrics};
pub use time::ClockTime;
