use serde::Serialize;

use crate::core::utils::RandomSource;
use crate::systems::hands::HandKind;

use super::ClockCore;

/// Floats per letter in the packed buffer: x, y, display angle, falling
pub const LETTER_STRIDE: usize = 4;
/// Floats per hand in the packed buffer: start x, start y, tip x, tip y, weight
pub const HAND_STRIDE: usize = 5;

/// Repack letters and hands into the render buffers (no reallocation once sized)
pub(super) fn extract<R: RandomSource>(core: &mut ClockCore<R>) {
    let letters = &mut core.render.letters;
    letters.clear();
    letters.reserve(core.letters.len() * LETTER_STRIDE);
    for letter in &core.letters {
        let p = letter.position();
        letters.extend_from_slice(&[
            p.x,
            p.y,
            letter.display_angle(),
            if letter.is_falling() { 1.0 } else { 0.0 },
        ]);
    }

    let hands = &mut core.render.hands;
    hands.clear();
    for hand in &core.hands {
        let (start, tip) = (hand.center(), hand.tip());
        hands.extend_from_slice(&[start.x, start.y, tip.x, tip.y, hand.weight()]);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LetterView {
    pub character: char,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub falling: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HandView {
    pub kind: HandKind,
    pub start_x: f32,
    pub start_y: f32,
    pub tip_x: f32,
    pub tip_y: f32,
    pub weight: f32,
}

/// Everything a renderer draws for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub frame: u64,
    pub letters: Vec<LetterView>,
    pub hands: Vec<HandView>,
}

pub(super) fn snapshot<R: RandomSource>(core: &ClockCore<R>) -> RenderSnapshot {
    let letters = core
        .letters
        .iter()
        .map(|l| LetterView {
            character: l.character(),
            x: l.position().x,
            y: l.position().y,
            angle: l.display_angle(),
            falling: l.is_falling(),
        })
        .collect();

    let hands = core
        .hands
        .iter()
        .map(|h| HandView {
            kind: h.kind(),
            start_x: h.center().x,
            start_y: h.center().y,
            tip_x: h.tip().x,
            tip_y: h.tip().y,
            weight: h.weight(),
        })
        .collect();

    RenderSnapshot { frame: core.frame, letters, hands }
}
