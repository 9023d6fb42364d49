//! Math primitives: vectors and segment geometry

mod vec2;
pub mod geometry;

pub use geometry::{closest_point_on_segment, distance_to_segment};
pub use vec2::Vec2;
