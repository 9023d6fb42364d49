#[macro_use]
pub mod log;
pub mod random;

pub use random::{FixedSign, RandomSource, XorShift32};
