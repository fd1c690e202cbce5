//! Recognition session: one camera run from start to stop.
//!
//! Wraps a [`GestureRecognizer`] with the lifecycle of the sign-to-text view
//! and reports what changed as [`RecognitionEvent`]s.

use std::sync::Arc;

use handsign_core::config::{HandSignConfig, TrackingConfig};
use handsign_core::source::DetectorResult;
use handsign_core::{LandmarkFrame, RecognitionEvent, Timestamp};
use uuid::Uuid;

use crate::catalog::GestureCatalog;
use crate::recognizer::{FrameOutcome, GestureRecognizer};

/// The progress bar is hidden once confidence reaches this value.
pub const PROGRESS_HIDE_CONFIDENCE: u8 = 95;

pub struct RecognitionSession {
    id: Uuid,
    recognizer: GestureRecognizer,
    tracking: TrackingConfig,
    running: bool,
    frames: u64,
    commits: u64,
}

impl RecognitionSession {
    pub fn new(catalog: Arc<GestureCatalog>, config: &HandSignConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            recognizer: GestureRecognizer::new(catalog, config.recognition.clone()),
            tracking: config.tracking.clone(),
            running: false,
            frames: 0,
            commits: 0,
        }
    }

    /// Session over the builtin vocabulary.
    pub fn with_builtin_catalog(config: &HandSignConfig) -> Self {
        Self::new(Arc::new(GestureCatalog::builtin()), config)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin accepting frames. Clears the transcript of any previous run.
    ///
    /// Returns `None` if the session is already running.
    pub fn start(&mut self, now: Timestamp) -> Option<RecognitionEvent> {
        if self.running {
            tracing::debug!(session = %self.id, "Session already running");
            return None;
        }
        self.running = true;
        self.frames = 0;
        self.commits = 0;
        self.recognizer.clear_transcript();
        tracing::info!(session = %self.id, "Recognition session started");
        Some(RecognitionEvent::SessionStarted {
            session_id: self.id,
            timestamp: now,
        })
    }

    /// Stop accepting frames. The transcript is kept.
    ///
    /// Returns `None` if the session was not running.
    pub fn stop(&mut self, now: Timestamp) -> Option<RecognitionEvent> {
        if !self.running {
            return None;
        }
        self.running = false;
        tracing::info!(
            session = %self.id,
            frames = self.frames,
            commits = self.commits,
            "Recognition session stopped"
        );
        Some(RecognitionEvent::SessionStopped {
            session_id: self.id,
            frames: self.frames,
            commits: self.commits,
            timestamp: now,
        })
    }

    /// Clear transcript, confidence and evidence. Allowed in any state.
    pub fn reset(&mut self, now: Timestamp) -> RecognitionEvent {
        self.recognizer.reset();
        tracing::info!(session = %self.id, "Recognition session reset");
        RecognitionEvent::SessionReset {
            session_id: self.id,
            timestamp: now,
        }
    }

    /// Feed one raw tracker result. Hands the tracker settings reject count
    /// as no hand.
    pub fn submit(&mut self, result: &DetectorResult, now: Timestamp) -> Vec<RecognitionEvent> {
        let frame = result.primary_frame(&self.tracking);
        self.submit_frame(frame.as_ref(), now)
    }

    /// Feed one decoded frame, or `None` for no hand. Ignored while stopped.
    pub fn submit_frame(
        &mut self,
        frame: Option<&LandmarkFrame>,
        now: Timestamp,
    ) -> Vec<RecognitionEvent> {
        if !self.running {
            tracing::debug!(session = %self.id, "Frame ignored, session not running");
            return Vec::new();
        }
        self.frames += 1;
        let before = self.recognizer.confidence();
        let outcome = self.recognizer.process(frame, now);
        self.events_for(outcome, before, now)
    }

    fn events_for(&mut self, outcome: FrameOutcome, before: u8, now: Timestamp) -> Vec<RecognitionEvent> {
        let mut events = Vec::with_capacity(outcome.commits.len() + 1);
        for commit in outcome.commits {
            self.commits += 1;
            events.push(RecognitionEvent::GestureCommitted {
                session_id: self.id,
                gesture: commit.name,
                text: commit.text,
                timestamp: commit.timestamp,
            });
        }
        if outcome.confidence != before {
            events.push(RecognitionEvent::ConfidenceChanged {
                session_id: self.id,
                confidence: outcome.confidence,
                timestamp: now,
            });
        }
        events
    }

    /// Whether a UI should show the "hold the sign" progress bar.
    pub fn should_show_progress(&self) -> bool {
        self.running && self.recognizer.confidence() < PROGRESS_HIDE_CONFIDENCE
    }

    pub fn text(&self) -> &str {
        self.recognizer.transcript().as_str()
    }

    pub fn confidence(&self) -> u8 {
        self.recognizer.confidence()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn commits(&self) -> u64 {
        self.commits
    }

    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }
}
