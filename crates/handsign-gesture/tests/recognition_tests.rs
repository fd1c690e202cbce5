//! End-to-end recognition tests: tracker output in, transcript and events out.
//!
//! Every test drives a whole session with synthetic hands from
//! `handsign_gesture::fixtures`, advancing a fake clock 33ms per frame.

use std::sync::Arc;

use handsign_core::config::HandSignConfig;
use handsign_core::source::DetectorResult;
use handsign_core::{Handedness, LandmarkFrame, RecognitionEvent, Timestamp};
use handsign_gesture::fixtures;
use handsign_gesture::{letters, GestureCatalog, RecognitionSession};

// =============================================================================
// Helpers
// =============================================================================

const FRAME_MS: i64 = 33;

struct Clock(i64);

impl Clock {
    fn tick(&mut self) -> Timestamp {
        self.0 += FRAME_MS;
        Timestamp(self.0)
    }
}

fn started_session() -> (RecognitionSession, Clock) {
    let mut session = RecognitionSession::with_builtin_catalog(&HandSignConfig::default());
    session.start(Timestamp(0));
    (session, Clock(0))
}

fn hold(
    session: &mut RecognitionSession,
    clock: &mut Clock,
    frame: &LandmarkFrame,
    frames: usize,
) -> Vec<RecognitionEvent> {
    let result = DetectorResult::single(Handedness::Right, 0.97, frame);
    (0..frames)
        .flat_map(|_| session.submit(&result, clock.tick()))
        .collect()
}

/// Pointing hand held high: "please" needs the lower half of the image, so
/// only "no" fires.
fn raised_pointing() -> LandmarkFrame {
    let mut frame = fixtures::pointing();
    fixtures::move_to(&mut frame, 0.5, 0.45);
    frame
}

fn no_hand(session: &mut RecognitionSession, clock: &mut Clock, frames: usize) {
    for _ in 0..frames {
        session.submit(&DetectorResult::empty(), clock.tick());
    }
}

fn committed(events: &[RecognitionEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            RecognitionEvent::GestureCommitted { gesture, .. } => Some(gesture.clone()),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn test_two_signs_in_sequence() {
    let (mut session, mut clock) = started_session();

    let events = hold(&mut session, &mut clock, &fixtures::pointing(), 16);
    assert_eq!(committed(&events), vec!["no"]);

    no_hand(&mut session, &mut clock, 10);

    let events = hold(&mut session, &mut clock, &fixtures::open_hand(), 16);
    assert_eq!(committed(&events), vec!["hello"]);

    assert_eq!(session.text(), "no hello");
    assert_eq!(session.commits(), 2);
}

#[test]
fn test_holding_a_sign_commits_once() {
    let (mut session, mut clock) = started_session();
    let events = hold(&mut session, &mut clock, &raised_pointing(), 90);
    assert_eq!(committed(&events), vec!["no"]);
    assert_eq!(session.text(), "no");
    assert_eq!(session.confidence(), 95);
}

#[test]
fn test_co_firing_shapes_commit_in_turn() {
    // An open hand is "hello", "thank you" and "please" at once. Each commit
    // clears the others, so holding it walks through them in catalog order.
    let (mut session, mut clock) = started_session();
    let events = hold(&mut session, &mut clock, &fixtures::open_hand(), 31);
    assert_eq!(committed(&events), vec!["hello", "thank you"]);
    assert_eq!(session.text(), "hello thank you");
}

#[test]
fn test_flickering_hand_does_not_commit() {
    let (mut session, mut clock) = started_session();
    let frame = fixtures::pointing();
    let mut events = Vec::new();
    for _ in 0..20 {
        events.extend(hold(&mut session, &mut clock, &frame, 1));
        no_hand(&mut session, &mut clock, 1);
    }
    assert!(committed(&events).is_empty());
    assert_eq!(session.text(), "");
}

#[test]
fn test_stopped_session_ignores_frames() {
    let (mut session, mut clock) = started_session();
    hold(&mut session, &mut clock, &fixtures::pointing(), 10);
    session.stop(clock.tick());

    let events = hold(&mut session, &mut clock, &fixtures::pointing(), 20);
    assert!(events.is_empty());
    assert_eq!(session.text(), "");
    assert_eq!(session.frames(), 10);
}

#[test]
fn test_low_confidence_tracker_output_is_no_hand() {
    let (mut session, mut clock) = started_session();
    let weak = DetectorResult::single(Handedness::Left, 0.3, &fixtures::pointing());
    for _ in 0..30 {
        session.submit(&weak, clock.tick());
    }
    assert_eq!(session.text(), "");
    assert_eq!(session.confidence(), 0);
}

#[test]
fn test_detector_json_lines() {
    let (mut session, mut clock) = started_session();
    let hand = DetectorResult::single(Handedness::Right, 0.9, &fixtures::pointing());
    let line = serde_json::to_string(&hand).unwrap();

    for _ in 0..16 {
        let decoded: DetectorResult = serde_json::from_str(&line).unwrap();
        session.submit(&decoded, clock.tick());
    }
    let empty: DetectorResult = serde_json::from_str("{}").unwrap();
    session.submit(&empty, clock.tick());

    assert_eq!(session.text(), "no");
}

#[test]
fn test_events_serialize_as_json() {
    let (mut session, mut clock) = started_session();
    let events = hold(&mut session, &mut clock, &fixtures::pointing(), 16);
    let commit = events
        .iter()
        .find(|e| e.kind() == "gesture_committed")
        .unwrap();
    let json = serde_json::to_string(commit).unwrap();
    assert!(json.contains("\"gesture\":\"no\""));

    let back: RecognitionEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, commit);
}

#[test]
fn test_injected_catalog() {
    let catalog = GestureCatalog::builder()
        .gesture("Y", "thumb and pinky out", letters::y)
        .gesture("I", "pinky up", letters::i)
        .build()
        .unwrap();
    let mut session = RecognitionSession::new(Arc::new(catalog), &HandSignConfig::default());
    session.start(Timestamp(0));
    let mut clock = Clock(0);

    let mut pinky = fixtures::fist();
    fixtures::unfold(&mut pinky, fixtures::Finger::Pinky);
    let events = hold(&mut session, &mut clock, &pinky, 16);

    assert_eq!(committed(&events), vec!["I"]);
    assert_eq!(session.recognizer().catalog().len(), 2);
}

#[test]
fn test_reset_then_same_sign_again() {
    let (mut session, mut clock) = started_session();
    hold(&mut session, &mut clock, &fixtures::pointing(), 16);
    session.reset(clock.tick());

    let events = hold(&mut session, &mut clock, &fixtures::pointing(), 16);
    assert_eq!(committed(&events), vec!["no"]);
    assert_eq!(session.text(), "no");
}
