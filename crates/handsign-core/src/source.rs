//! Decoding of hand-tracker output into landmark frames.
//!
//! The tracker reports zero or more hands per video frame, each with a
//! handedness label, a detection score and its landmarks. Only the first hand
//! that passes the tracking filter is classified. Anything else (low score,
//! wrong landmark count, no hands) is "no hand" for that frame.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::TrackingConfig;
use crate::types::{Handedness, Landmark, LandmarkFrame};

/// One hand as reported by the tracker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandDetection {
    pub handedness: Handedness,
    /// Detection score in [0, 1].
    pub score: f32,
    pub landmarks: Vec<Landmark>,
}

/// All hands reported for one video frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorResult {
    #[serde(default)]
    pub hands: Vec<HandDetection>,
}

impl DetectorResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(handedness: Handedness, score: f32, frame: &LandmarkFrame) -> Self {
        Self {
            hands: vec![HandDetection {
                handedness,
                score,
                landmarks: frame.points().to_vec(),
            }],
        }
    }

    /// The frame to classify, if any hand passes `tracking`.
    ///
    /// Hands beyond `max_num_hands` are ignored. Within that window the first
    /// hand that is confident enough and fully populated wins.
    pub fn primary_frame(&self, tracking: &TrackingConfig) -> Option<LandmarkFrame> {
        for hand in self.hands.iter().take(tracking.max_num_hands) {
            if hand.score < tracking.min_detection_confidence {
                debug!(
                    handedness = hand.handedness.as_str(),
                    score = hand.score,
                    "Hand below detection confidence, ignored"
                );
                continue;
            }
            match LandmarkFrame::from_points(&hand.landmarks) {
                Ok(frame) => return Some(frame),
                Err(e) => {
                    warn!(handedness = hand.handedness.as_str(), error = %e, "Malformed hand ignored");
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LANDMARK_COUNT;

    fn hand(score: f32, count: usize) -> HandDetection {
        HandDetection {
            handedness: Handedness::Right,
            score,
            landmarks: vec![Landmark::new(0.5, 0.5, 0.0); count],
        }
    }

    #[test]
    fn test_empty_result_has_no_frame() {
        let result = DetectorResult::empty();
        assert!(result.primary_frame(&TrackingConfig::default()).is_none());
    }

    #[test]
    fn test_confident_full_hand_is_used() {
        let result = DetectorResult {
            hands: vec![hand(0.95, LANDMARK_COUNT)],
        };
        assert!(result.primary_frame(&TrackingConfig::default()).is_some());
    }

    #[test]
    fn test_low_score_hand_is_ignored() {
        let result = DetectorResult {
            hands: vec![hand(0.5, LANDMARK_COUNT)],
        };
        assert!(result.primary_frame(&TrackingConfig::default()).is_none());
    }

    #[test]
    fn test_partial_hand_is_no_hand() {
        let result = DetectorResult {
            hands: vec![hand(0.99, 12)],
        };
        assert!(result.primary_frame(&TrackingConfig::default()).is_none());
    }

    #[test]
    fn test_hands_beyond_limit_are_ignored() {
        let result = DetectorResult {
            hands: vec![hand(0.3, LANDMARK_COUNT), hand(0.99, LANDMARK_COUNT)],
        };
        assert!(result.primary_frame(&TrackingConfig::default()).is_none());

        let two_hands = TrackingConfig {
            max_num_hands: 2,
            ..TrackingConfig::default()
        };
        assert!(result.primary_frame(&two_hands).is_some());
    }

    #[test]
    fn test_decode_tracker_json() {
        let mut landmarks = String::from("[");
        for i in 0..LANDMARK_COUNT {
            if i > 0 {
                landmarks.push(',');
            }
            landmarks.push_str(&format!(r#"{{"x":0.{i:02},"y":0.5,"z":-0.01}}"#));
        }
        landmarks.push(']');
        let json = format!(
            r#"{{"hands":[{{"handedness":"Left","score":0.91,"landmarks":{}}}]}}"#,
            landmarks
        );

        let result: DetectorResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.hands[0].handedness, Handedness::Left);
        let frame = result.primary_frame(&TrackingConfig::default()).unwrap();
        assert!((frame[20].x - 0.20).abs() < 1e-6);
    }

    #[test]
    fn test_missing_hands_field_is_empty() {
        let result: DetectorResult = serde_json::from_str("{}").unwrap();
        assert!(result.hands.is_empty());
    }
}
