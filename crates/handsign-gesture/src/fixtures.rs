//! Synthetic right-hand landmark frames for tests and benchmarks.
//!
//! The hand faces the camera with the wrist at (0.50, 0.80), the thumb on the
//! right (larger x) and the fingers pointing up. Helpers fold or move fingers
//! so each test can shape exactly the hand it needs.

use handsign_core::landmarks::*;
use handsign_core::{Landmark, LandmarkFrame, LANDMARK_COUNT};

/// The four non-thumb fingers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// MCP, PIP, DIP and tip indices.
    pub fn joints(&self) -> [usize; 4] {
        match self {
            Self::Index => [INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP],
            Self::Middle => [MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP],
            Self::Ring => [RING_MCP, RING_PIP, RING_DIP, RING_TIP],
            Self::Pinky => [PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP],
        }
    }
}

const OPEN_HAND: [(f32, f32); LANDMARK_COUNT] = [
    (0.50, 0.80), // wrist
    (0.56, 0.76), // thumb
    (0.60, 0.70),
    (0.63, 0.64),
    (0.66, 0.58),
    (0.54, 0.60), // index
    (0.54, 0.50),
    (0.54, 0.44),
    (0.54, 0.38),
    (0.50, 0.59), // middle
    (0.50, 0.49),
    (0.50, 0.43),
    (0.50, 0.37),
    (0.46, 0.60), // ring
    (0.46, 0.50),
    (0.46, 0.44),
    (0.46, 0.38),
    (0.42, 0.62), // pinky
    (0.42, 0.54),
    (0.42, 0.49),
    (0.42, 0.40),
];

/// Set one landmark.
pub fn set(frame: &mut LandmarkFrame, index: usize, x: f32, y: f32, z: f32) {
    if let Some(p) = frame.point_mut(index) {
        *p = Landmark::new(x, y, z);
    }
}

/// All five fingers up, fingertips level, thumb out to the side.
pub fn open_hand() -> LandmarkFrame {
    let mut points = [Landmark::default(); LANDMARK_COUNT];
    for (p, &(x, y)) in points.iter_mut().zip(OPEN_HAND.iter()) {
        *p = Landmark::new(x, y, 0.0);
    }
    LandmarkFrame::new(points)
}

/// Curl a finger into the palm: tip ends up below the knuckle.
pub fn fold(frame: &mut LandmarkFrame, finger: Finger) {
    let [mcp, pip, dip, tip] = finger.joints();
    let base = frame[mcp];
    set(frame, pip, base.x, base.y - 0.03, 0.0);
    set(frame, dip, base.x, base.y + 0.02, 0.0);
    set(frame, tip, base.x, base.y + 0.05, 0.0);
}

/// Straighten a finger upward from its knuckle.
pub fn unfold(frame: &mut LandmarkFrame, finger: Finger) {
    let [mcp, pip, dip, tip] = finger.joints();
    let base = frame[mcp];
    set(frame, pip, base.x, base.y - 0.08, 0.0);
    set(frame, dip, base.x, base.y - 0.14, 0.0);
    set(frame, tip, base.x, base.y - 0.22, 0.0);
}

/// Tuck the thumb across the palm (tip left of the IP joint).
pub fn tuck_thumb(frame: &mut LandmarkFrame) {
    set(frame, THUMB_MCP, 0.59, 0.70, 0.0);
    set(frame, THUMB_IP, 0.60, 0.64, 0.0);
    set(frame, THUMB_TIP, 0.55, 0.62, 0.0);
}

/// Four fingers curled, thumb tucked.
pub fn fist() -> LandmarkFrame {
    let mut frame = open_hand();
    for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
        fold(&mut frame, finger);
    }
    tuck_thumb(&mut frame);
    frame
}

/// Index finger up, everything else folded.
pub fn pointing() -> LandmarkFrame {
    let mut frame = fist();
    unfold(&mut frame, Finger::Index);
    frame
}

/// Flat hand hanging below the wrist, palm toward the floor.
pub fn palm_down() -> LandmarkFrame {
    let mut frame = open_hand();
    set(&mut frame, WRIST, 0.50, 0.40, 0.0);
    set(&mut frame, THUMB_CMC, 0.56, 0.44, 0.0);
    set(&mut frame, THUMB_MCP, 0.60, 0.48, 0.0);
    set(&mut frame, THUMB_IP, 0.63, 0.52, 0.0);
    set(&mut frame, THUMB_TIP, 0.66, 0.56, 0.0);
    for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
        let [mcp, pip, dip, tip] = finger.joints();
        let x = frame[mcp].x;
        set(&mut frame, mcp, x, 0.50, 0.0);
        set(&mut frame, pip, x, 0.58, 0.0);
        set(&mut frame, dip, x, 0.63, 0.0);
        set(&mut frame, tip, x, 0.68, 0.0);
    }
    frame
}

/// Translate the whole hand so the wrist lands on (x, y).
pub fn move_to(frame: &mut LandmarkFrame, x: f32, y: f32) {
    let wrist = frame[WRIST];
    let (dx, dy) = (x - wrist.x, y - wrist.y);
    for i in 0..LANDMARK_COUNT {
        if let Some(p) = frame.point_mut(i) {
            p.x += dx;
            p.y += dy;
        }
    }
}
