//! Temporal recognizer: turns noisy per-frame gesture firings into stable,
//! debounced commits.
//!
//! Every catalog gesture keeps an [`EvidenceRecord`]. A detection adds one to
//! its count, a miss takes `decay_per_frame` away. Once a count passes the
//! commit threshold the gesture's name is appended to the transcript and all
//! evidence starts over.

use std::collections::HashMap;
use std::sync::Arc;

use handsign_core::config::RecognitionConfig;
use handsign_core::{Landmark, LandmarkFrame, Timestamp};

use crate::catalog::{Detections, GestureCatalog, GestureId};

/// Accumulated evidence for one gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvidenceRecord {
    /// Never negative.
    pub detection_count: f64,
    /// `Timestamp::ZERO` until the first detection.
    pub last_detected_at: Timestamp,
}

/// Append-only recognized text. Tokens are joined with single spaces; a
/// token may itself contain spaces ("thank you").
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    tokens: Vec<String>,
    text: String,
}

impl Transcript {
    pub fn push(&mut self, token: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(token);
        self.tokens.push(token.to_string());
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
        self.text.clear();
    }
}

/// A gesture that crossed the commit threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    pub gesture: GestureId,
    pub name: String,
    /// Transcript right after this commit was appended.
    pub text: String,
    pub timestamp: Timestamp,
}

/// What one frame changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Normally at most one; the evidence reset makes a second commit in the
    /// same frame impossible unless the commit threshold is below 1.
    pub commits: Vec<Commit>,
    /// Confidence after the frame, 0-100.
    pub confidence: u8,
}

impl FrameOutcome {
    pub fn committed(&self) -> bool {
        !self.commits.is_empty()
    }
}

/// Frame-driven recognition state over a fixed catalog.
///
/// Not thread-safe by itself; frames are processed one at a time to
/// completion by a single owner.
#[derive(Debug)]
pub struct GestureRecognizer {
    catalog: Arc<GestureCatalog>,
    config: RecognitionConfig,
    evidence: HashMap<GestureId, EvidenceRecord>,
    last_recognized: Option<GestureId>,
    confidence: u8,
    /// Gesture whose evidence produced the current live confidence.
    confidence_source: Option<GestureId>,
    transcript: Transcript,
}

impl GestureRecognizer {
    pub fn new(catalog: Arc<GestureCatalog>, config: RecognitionConfig) -> Self {
        Self {
            catalog,
            config,
            evidence: HashMap::new(),
            last_recognized: None,
            confidence: 0,
            confidence_source: None,
            transcript: Transcript::default(),
        }
    }

    /// Builtin vocabulary with the default policy.
    pub fn with_builtin_catalog() -> Self {
        Self::new(
            Arc::new(GestureCatalog::builtin()),
            RecognitionConfig::default(),
        )
    }

    /// Feed one frame, or `None` when no hand is visible.
    pub fn process(&mut self, frame: Option<&LandmarkFrame>, now: Timestamp) -> FrameOutcome {
        let detections = match frame {
            Some(frame) => self.catalog.evaluate(frame),
            None => self.catalog.no_hand(),
        };
        self.apply(&detections, now)
    }

    /// Feed raw tracker points. Anything but a complete 21-point hand counts
    /// as no hand.
    pub fn process_points(&mut self, points: &[Landmark], now: Timestamp) -> FrameOutcome {
        match LandmarkFrame::from_points(points) {
            Ok(frame) => self.process(Some(&frame), now),
            Err(e) => {
                if !points.is_empty() {
                    tracing::debug!("Treating malformed hand as no hand: {}", e);
                }
                self.process(None, now)
            }
        }
    }

    /// Update evidence from one frame's detections, gesture by gesture in
    /// catalog order.
    pub fn apply(&mut self, detections: &Detections, now: Timestamp) -> FrameOutcome {
        let mut commits = Vec::new();
        let catalog = Arc::clone(&self.catalog);

        for id in catalog.ids() {
            if detections.is_fired(id) {
                let record = self.evidence.entry(id).or_default();
                let previous = record.last_detected_at;
                record.detection_count += 1.0;
                record.last_detected_at = now;
                let count = record.detection_count;

                let fresh = self.last_recognized != Some(id)
                    || now.millis_since(previous) > self.config.retrigger_window_ms;

                if count > self.config.commit_threshold && fresh {
                    let name = catalog.name(id).unwrap_or_default();
                    commits.push(self.commit(id, name, now));
                } else if count > self.config.live_confidence_floor {
                    self.set_live_confidence(id, count);
                }
            } else if let Some(record) = self.evidence.get_mut(&id) {
                record.detection_count =
                    (record.detection_count - self.config.decay_per_frame).max(0.0);
                if self.confidence_source == Some(id)
                    && record.detection_count <= self.config.live_confidence_floor
                {
                    tracing::debug!(gesture = %catalog.name(id).unwrap_or_default(), "Live confidence faded");
                    self.confidence = 0;
                    self.confidence_source = None;
                }
            }
        }

        FrameOutcome {
            commits,
            confidence: self.confidence,
        }
    }

    fn commit(&mut self, id: GestureId, name: &str, now: Timestamp) -> Commit {
        self.last_recognized = Some(id);
        self.confidence = 100;
        self.confidence_source = None;
        self.transcript.push(name);

        // A commit wipes the evidence of every gesture, not just this one, so
        // shapes that co-fired during the hold cannot commit straight after
        // it on leftover counts. Two different signs made in quick succession
        // therefore both need a full run of frames.
        for record in self.evidence.values_mut() {
            *record = EvidenceRecord::default();
        }

        tracing::info!(gesture = %name, text = %self.transcript.as_str(), "Gesture committed");

        Commit {
            gesture: id,
            name: name.to_string(),
            text: self.transcript.as_str().to_string(),
            timestamp: now,
        }
    }

    fn set_live_confidence(&mut self, id: GestureId, count: f64) {
        let percent = (count * 100.0 / self.config.commit_threshold).floor();
        // Live confidence never reaches 100, even with an unvalidated config.
        let cap = self.config.max_live_confidence.min(99);
        let confidence = percent.min(f64::from(cap)) as u8;
        if confidence != self.confidence {
            tracing::debug!(
                gesture = %self.catalog.name(id).unwrap_or_default(),
                count,
                confidence,
                "Live confidence"
            );
        }
        self.confidence = confidence;
        self.confidence_source = Some(id);
    }

    /// Forget everything: evidence, last recognition, transcript, confidence.
    pub fn reset(&mut self) {
        self.evidence.clear();
        self.last_recognized = None;
        self.confidence = 0;
        self.confidence_source = None;
        self.transcript.clear();
        tracing::debug!("Recognizer reset");
    }

    /// Clear the transcript only; evidence and the last recognition stay.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    pub fn catalog(&self) -> &GestureCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &RecognitionConfig {
        &self.config
    }

    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn last_recognized(&self) -> Option<GestureId> {
        self.last_recognized
    }

    pub fn evidence(&self, id: GestureId) -> Option<&EvidenceRecord> {
        self.evidence.get(&id)
    }

    /// Current count for `id`, 0 when it has never been seen.
    pub fn detection_count(&self, id: GestureId) -> f64 {
        self.evidence
            .get(&id)
            .map(|r| r.detection_count)
            .unwrap_or(0.0)
    }

    /// Count for a gesture by name. `None` if the name is not in the catalog.
    pub fn detection_count_of(&self, name: &str) -> Option<f64> {
        self.catalog.lookup(name).map(|id| self.detection_count(id))
    }
}

// =============================================================================
// Tests
// =============================================================================
