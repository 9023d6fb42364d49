//! Hand Kinematics - clock hands posed from wall-clock time

mod hand;

pub use hand::{normalize_angle, ClockHand, HandKind};
