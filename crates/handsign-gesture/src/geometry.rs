//! Geometric primitives shared by every gesture predicate.
//!
//! Coordinates are normalized image space: y grows downward, so a fingertip
//! "above" its knuckle has the smaller y. All helpers are total for any
//! 21-point frame.

use handsign_core::landmarks::{FINGERTIPS, FINGER_BASES, THUMB_IP, THUMB_TIP};
use handsign_core::LandmarkFrame;

/// Default tolerance for [`fingers_aligned`].
pub const DEFAULT_ALIGN_THRESHOLD: f32 = 0.05;

/// Tip sits above its base joint.
pub fn finger_extended(frame: &LandmarkFrame, tip: usize, base: usize) -> bool {
    frame[tip].y < frame[base].y
}

/// Every tip sits below its paired base joint.
///
/// `tips` and `bases` are paired positionally; extra entries on either side
/// are ignored.
pub fn fingers_curled(frame: &LandmarkFrame, tips: &[usize], bases: &[usize]) -> bool {
    tips.iter()
        .zip(bases.iter())
        .all(|(&tip, &base)| frame[tip].y > frame[base].y)
}

/// The points' y values all lie within `threshold` of their mean.
pub fn fingers_aligned(frame: &LandmarkFrame, indices: &[usize], threshold: f32) -> bool {
    max_deviation(indices.iter().map(|&i| frame[i].y)) < threshold
}

/// The points' z values all lie within `tolerance` of their mean.
pub fn depth_clustered(frame: &LandmarkFrame, indices: &[usize], tolerance: f32) -> bool {
    max_deviation(indices.iter().map(|&i| frame[i].z)) < tolerance
}

/// How many of the five fingers are extended relative to their bases.
pub fn extended_count(frame: &LandmarkFrame) -> usize {
    FINGERTIPS
        .iter()
        .zip(FINGER_BASES.iter())
        .filter(|&(&tip, &base)| finger_extended(frame, tip, base))
        .count()
}

/// 3-D distance between two landmarks.
pub fn distance(frame: &LandmarkFrame, a: usize, b: usize) -> f32 {
    frame[a].distance(&frame[b])
}

/// Thumb tip lies right of the thumb IP joint: the thumb sticks out sideways.
pub fn thumb_out(frame: &LandmarkFrame) -> bool {
    frame[THUMB_TIP].x > frame[THUMB_IP].x
}

/// Thumb tip lies left of the thumb IP joint: the thumb is tucked in.
pub fn thumb_in(frame: &LandmarkFrame) -> bool {
    frame[THUMB_TIP].x < frame[THUMB_IP].x
}

/// Tip and base share a height while being horizontally apart: the finger
/// points sideways.
pub fn finger_horizontal(frame: &LandmarkFrame, tip: usize, base: usize) -> bool {
    (frame[tip].y - frame[base].y).abs() < 0.05 && (frame[tip].x - frame[base].x).abs() > 0.1
}

/// `lo < value < hi`, both bounds exclusive.
pub fn within(value: f32, lo: f32, hi: f32) -> bool {
    value > lo && value < hi
}

/// Largest absolute distance of any value from the mean. Empty input is 0,
/// any NaN makes the result NaN so threshold checks fail.
fn max_deviation(values: impl Iterator<Item = f32> + Clone) -> f32 {
    let (sum, n) = values.clone().fold((0.0f32, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        return 0.0;
    }
    let mean = sum / n as f32;
    values
        .map(|v| (v - mean).abs())
        .fold(0.0, |max, d| if d.is_nan() || d > max { d } else { max })
}
