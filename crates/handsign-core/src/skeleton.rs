//! Hand skeleton topology for overlay renderers.
//!
//! The 20 bones connecting the landmarks of one hand, wrist outward, one
//! chain per finger.

use crate::types::{Landmark, LandmarkFrame};

/// Landmark index pairs joined by a bone.
pub const HAND_CONNECTIONS: [(usize, usize); 20] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (0, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (0, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (0, 17),
    (17, 18),
    (18, 19),
    (19, 20),
];

/// Bone segment endpoints for `frame`, in `HAND_CONNECTIONS` order.
pub fn bones(frame: &LandmarkFrame) -> Vec<(Landmark, Landmark)> {
    HAND_CONNECTIONS
        .iter()
        .map(|&(from, to)| (frame[from], frame[to]))
        .collect()
}

/// Project landmarks into pixel space for a `width` x `height` canvas.
pub fn to_pixels(frame: &LandmarkFrame, width: f32, height: f32) -> Vec<(f32, f32)> {
    frame
        .points()
        .iter()
        .map(|lm| (lm.x * width, lm.y * height))
        .collect()
}
