//! Fingerspelled alphabet, A to Z.
//!
//! The thresholds are loose hand-tuned values in normalized image units and
//! are kept literal. Several letters overlap on real hands (U/V/R, M/N/T/S);
//! the recognizer's evidence counting sorts that out over time.

use handsign_core::landmarks::*;
use handsign_core::LandmarkFrame;

use crate::catalog::GestureDefinition;
use crate::geometry::{
    distance, finger_extended, finger_horizontal, fingers_aligned, fingers_curled, thumb_in,
    thumb_out, within, DEFAULT_ALIGN_THRESHOLD,
};

fn fist(frame: &LandmarkFrame) -> bool {
    fingers_curled(frame, &FOUR_TIPS, &FOUR_BASES)
}

fn all_extended(frame: &LandmarkFrame, tips: &[usize], bases: &[usize]) -> bool {
    tips.iter()
        .zip(bases.iter())
        .all(|(&tip, &base)| finger_extended(frame, tip, base))
}

fn index_only(frame: &LandmarkFrame) -> bool {
    finger_extended(frame, INDEX_TIP, INDEX_MCP)
        && fingers_curled(frame, &FOUR_TIPS[1..], &FOUR_BASES[1..])
}

fn pinky_only(frame: &LandmarkFrame) -> bool {
    finger_extended(frame, PINKY_TIP, PINKY_MCP)
        && fingers_curled(frame, &FOUR_TIPS[..3], &FOUR_BASES[..3])
}

/// Index and middle up, ring and pinky folded.
fn two_up(frame: &LandmarkFrame) -> bool {
    finger_extended(frame, INDEX_TIP, INDEX_MCP)
        && finger_extended(frame, MIDDLE_TIP, MIDDLE_MCP)
        && fingers_curled(frame, &[RING_TIP, PINKY_TIP], &[RING_MCP, PINKY_MCP])
}

/// Index and middle tips have swapped sides relative to their knuckles.
fn crossed(frame: &LandmarkFrame) -> bool {
    (frame[INDEX_TIP].x - frame[MIDDLE_TIP].x) * (frame[INDEX_MCP].x - frame[MIDDLE_MCP].x) < 0.0
}

pub fn a(frame: &LandmarkFrame) -> bool {
    fist(frame) && thumb_out(frame) && frame[THUMB_TIP].y < frame[INDEX_PIP].y
}

pub fn b(frame: &LandmarkFrame) -> bool {
    all_extended(frame, &FOUR_TIPS, &FOUR_BASES)
        && fingers_aligned(frame, &FOUR_TIPS, DEFAULT_ALIGN_THRESHOLD)
        && thumb_in(frame)
}

pub fn c(frame: &LandmarkFrame) -> bool {
    let tip = frame[INDEX_TIP].y;
    within(distance(frame, THUMB_TIP, INDEX_TIP), 0.1, 0.2)
        && distance(frame, INDEX_TIP, MIDDLE_TIP) < 0.05
        && within(tip, frame[INDEX_PIP].y - 0.1, frame[INDEX_MCP].y)
}

pub fn d(frame: &LandmarkFrame) -> bool {
    index_only(frame) && distance(frame, THUMB_TIP, MIDDLE_TIP) < 0.05
}

pub fn e(frame: &LandmarkFrame) -> bool {
    fist(frame) && thumb_in(frame) && frame[THUMB_TIP].y > frame[INDEX_TIP].y
}

pub fn f(frame: &LandmarkFrame) -> bool {
    distance(frame, THUMB_TIP, INDEX_TIP) < 0.05
        && all_extended(frame, &FOUR_TIPS[1..], &FOUR_BASES[1..])
}

pub fn g(frame: &LandmarkFrame) -> bool {
    finger_horizontal(frame, INDEX_TIP, INDEX_MCP)
        && fingers_curled(frame, &FOUR_TIPS[1..], &FOUR_BASES[1..])
        && (frame[THUMB_TIP].y - frame[THUMB_IP].y).abs() < 0.05
}

pub fn h(frame: &LandmarkFrame) -> bool {
    finger_horizontal(frame, INDEX_TIP, INDEX_MCP)
        && finger_horizontal(frame, MIDDLE_TIP, MIDDLE_MCP)
        && fingers_curled(frame, &[RING_TIP, PINKY_TIP], &[RING_MCP, PINKY_MCP])
}

pub fn i(frame: &LandmarkFrame) -> bool {
    pinky_only(frame) && thumb_in(frame)
}

/// Static approximation: the pinky hooks outward at the end of the stroke.
pub fn j(frame: &LandmarkFrame) -> bool {
    pinky_only(frame) && frame[PINKY_TIP].x < frame[PINKY_DIP].x - 0.02
}

pub fn k(frame: &LandmarkFrame) -> bool {
    two_up(frame)
        && distance(frame, INDEX_TIP, MIDDLE_TIP) > 0.05
        && within(frame[THUMB_TIP].y, frame[MIDDLE_TIP].y, frame[MIDDLE_MCP].y)
}

pub fn l(frame: &LandmarkFrame) -> bool {
    index_only(frame)
        && thumb_out(frame)
        && (frame[THUMB_TIP].y - frame[THUMB_MCP].y).abs() < 0.05
}

pub fn m(frame: &LandmarkFrame) -> bool {
    fist(frame) && distance(frame, THUMB_TIP, RING_PIP) < 0.03
}

pub fn n(frame: &LandmarkFrame) -> bool {
    fist(frame) && distance(frame, THUMB_TIP, MIDDLE_PIP) < 0.03
}

pub fn o(frame: &LandmarkFrame) -> bool {
    distance(frame, THUMB_TIP, INDEX_TIP) < 0.05
        && distance(frame, THUMB_TIP, MIDDLE_TIP) < 0.07
        && distance(frame, THUMB_TIP, RING_TIP) < 0.09
}

/// Hand pointed down: index and middle hang below their knuckles.
pub fn p(frame: &LandmarkFrame) -> bool {
    let middle_tip = frame[MIDDLE_TIP].y;
    frame[INDEX_TIP].y > frame[INDEX_MCP].y
        && middle_tip > frame[MIDDLE_MCP].y
        && distance(frame, INDEX_TIP, MIDDLE_TIP) > 0.05
        && frame[RING_TIP].y < middle_tip
        && frame[PINKY_TIP].y < middle_tip
}

pub fn q(frame: &LandmarkFrame) -> bool {
    let wrist = frame[WRIST].y;
    frame[INDEX_TIP].y > wrist
        && frame[THUMB_TIP].y > wrist
        && frame[MIDDLE_TIP].y < frame[INDEX_TIP].y
}

pub fn r(frame: &LandmarkFrame) -> bool {
    two_up(frame) && crossed(frame)
}

pub fn s(frame: &LandmarkFrame) -> bool {
    fist(frame)
        && frame[THUMB_TIP].z < frame[MIDDLE_PIP].z - 0.02
        && distance(frame, THUMB_TIP, MIDDLE_PIP) < 0.1
}

pub fn t(frame: &LandmarkFrame) -> bool {
    fist(frame) && distance(frame, THUMB_TIP, INDEX_PIP) < 0.03
}

pub fn u(frame: &LandmarkFrame) -> bool {
    two_up(frame) && distance(frame, INDEX_TIP, MIDDLE_TIP) < 0.04 && !crossed(frame)
}

pub fn v(frame: &LandmarkFrame) -> bool {
    two_up(frame) && distance(frame, INDEX_TIP, MIDDLE_TIP) > 0.08
}

pub fn w(frame: &LandmarkFrame) -> bool {
    all_extended(frame, &FOUR_TIPS[..3], &FOUR_BASES[..3])
        && fingers_curled(frame, &[PINKY_TIP], &[PINKY_MCP])
        && distance(frame, THUMB_TIP, PINKY_TIP) < 0.08
}

/// Hooked index: tip dropped between the PIP joint and the knuckle.
pub fn x(frame: &LandmarkFrame) -> bool {
    within(frame[INDEX_TIP].y, frame[INDEX_PIP].y, frame[INDEX_MCP].y)
        && fingers_curled(frame, &FOUR_TIPS[1..], &FOUR_BASES[1..])
}

pub fn y(frame: &LandmarkFrame) -> bool {
    pinky_only(frame) && thumb_out(frame) && distance(frame, THUMB_TIP, PINKY_TIP) > 0.2
}

/// Static approximation: index pushed toward the camera while tracing.
pub fn z(frame: &LandmarkFrame) -> bool {
    index_only(frame) && thumb_in(frame) && frame[INDEX_TIP].z < -0.1
}

pub(crate) fn definitions() -> Vec<GestureDefinition> {
    vec![
        GestureDefinition::new("A", "Fist with the thumb resting up the side", a),
        GestureDefinition::new("B", "Four fingers straight up together, thumb across the palm", b),
        GestureDefinition::new("C", "Curved hand, thumb and fingers forming a C", c),
        GestureDefinition::new("D", "Index up, thumb touching the middle finger", d),
        GestureDefinition::new("E", "Fingers curled over the tucked thumb", e),
        GestureDefinition::new("F", "Thumb and index touching, other fingers up", f),
        GestureDefinition::new("G", "Index pointing sideways, thumb parallel", g),
        GestureDefinition::new("H", "Index and middle pointing sideways", h),
        GestureDefinition::new("I", "Pinky up, thumb tucked", i),
        GestureDefinition::new("J", "Pinky up, tip hooked outward", j),
        GestureDefinition::new("K", "Index and middle up in a V, thumb between them", k),
        GestureDefinition::new("L", "Index up, thumb out sideways", l),
        GestureDefinition::new("M", "Thumb tucked under three fingers", m),
        GestureDefinition::new("N", "Thumb tucked under two fingers", n),
        GestureDefinition::new("O", "Fingertips touching the thumb in a ring", o),
        GestureDefinition::new("P", "K shape pointed downward", p),
        GestureDefinition::new("Q", "Index and thumb pointing down", q),
        GestureDefinition::new("R", "Index and middle crossed", r),
        GestureDefinition::new("S", "Fist with the thumb across the front", s),
        GestureDefinition::new("T", "Thumb tucked between index and middle", t),
        GestureDefinition::new("U", "Index and middle up together", u),
        GestureDefinition::new("V", "Index and middle up, spread apart", v),
        GestureDefinition::new("W", "Three fingers up, thumb holding the pinky", w),
        GestureDefinition::new("X", "Index hooked", x),
        GestureDefinition::new("Y", "Thumb and pinky out", y),
        GestureDefinition::new("Z", "Index tracing a Z toward the camera", z),
    ]
}
