//! Whole-word gestures: greetings, answers and control signs.

use handsign_core::landmarks::{FOUR_BASES, FOUR_TIPS, INDEX_MCP, INDEX_TIP, MIDDLE_MCP, WRIST};
use handsign_core::LandmarkFrame;

use crate::catalog::GestureDefinition;
use crate::geometry::{
    depth_clustered, extended_count, finger_extended, fingers_aligned, fingers_curled, within,
    DEFAULT_ALIGN_THRESHOLD,
};

/// Open hand: at least four of the five fingers up.
pub fn hello(frame: &LandmarkFrame) -> bool {
    extended_count(frame) >= 4
}

/// Flat hand: the four fingertips level with each other.
pub fn thank_you(frame: &LandmarkFrame) -> bool {
    fingers_aligned(frame, &FOUR_TIPS, DEFAULT_ALIGN_THRESHOLD)
}

/// Fist.
pub fn yes(frame: &LandmarkFrame) -> bool {
    fingers_curled(frame, &FOUR_TIPS, &FOUR_BASES)
}

/// Index up, the other three fingers folded.
pub fn no(frame: &LandmarkFrame) -> bool {
    finger_extended(frame, INDEX_TIP, INDEX_MCP)
        && fingers_curled(frame, &FOUR_TIPS[1..], &FOUR_BASES[1..])
}

/// Palm facing the camera (fingertips at one depth) in the lower half of
/// the image.
pub fn please(frame: &LandmarkFrame) -> bool {
    depth_clustered(frame, &FOUR_TIPS, 0.03) && frame[WRIST].y > 0.5
}

/// Fist held centred at chest height.
pub fn emergency(frame: &LandmarkFrame) -> bool {
    let wrist = frame[WRIST];
    yes(frame) && within(wrist.x, 0.3, 0.7) && within(wrist.y, 0.3, 0.7)
}

/// Flat hand with the palm tilted down: knuckles below the wrist.
pub fn space(frame: &LandmarkFrame) -> bool {
    thank_you(frame) && frame[MIDDLE_MCP].y > frame[WRIST].y
}

pub(crate) fn definitions() -> Vec<GestureDefinition> {
    vec![
        GestureDefinition::new("hello", "Open hand, four or more fingers extended", hello),
        GestureDefinition::new("thank you", "Flat hand, fingertips level", thank_you),
        GestureDefinition::new("yes", "Closed fist", yes),
        GestureDefinition::new("no", "Index finger raised, other fingers folded", no),
        GestureDefinition::new(
            "please",
            "Palm toward the camera, held in the lower half of the frame",
            please,
        ),
        GestureDefinition::new("EMERGENCY", "Fist held at chest height", emergency),
        GestureDefinition::new("SPACE", "Flat hand tilted palm down", space),
    ]
}
