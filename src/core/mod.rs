//! Core utilities shared by every layer (math, randomness, logging)

#[macro_use]
pub mod utils;
pub mod math;

pub use math::Vec2;
