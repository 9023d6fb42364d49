//! Simulation systems
//!
//! - `hands`: kinematic clock hands (time -> angle -> tip velocity)
//! - `letters`: letter bodies and their collision responses

pub mod hands;
pub mod letters;
