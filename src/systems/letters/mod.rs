//! Letter Body - falling glyphs and their collision responses
//!
//! - `body`: Verlet state, forces, release from the ring
//! - `hand_contact`: letter vs rotating hand
//! - `letter_contact`: letter vs letter
//! - `integrate`: Verlet step, numeric recovery, clock boundary

mod body;
mod hand_contact;
mod integrate;
mod letter_contact;

pub use body::{LetterBody, MIN_EFFECTIVE_RADIUS};
pub use integrate::Boundary;
pub use letter_contact::resolve_letter_pair;
