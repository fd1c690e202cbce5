use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timestamp;

/// Events emitted by a recognition session.
///
/// Consumed by whatever presents the transcript: the replay binary prints them
/// as JSON lines, a UI would redraw its text box and progress bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RecognitionEvent {
    /// The camera started delivering frames.
    SessionStarted {
        session_id: Uuid,
        timestamp: Timestamp,
    },

    /// The camera stopped. Frames delivered afterwards are ignored.
    SessionStopped {
        session_id: Uuid,
        frames: u64,
        commits: u64,
        timestamp: Timestamp,
    },

    /// A gesture crossed the commit threshold and was appended to the text.
    GestureCommitted {
        session_id: Uuid,
        gesture: String,
        /// Full transcript after appending.
        text: String,
        timestamp: Timestamp,
    },

    /// The live confidence percentage changed.
    ConfidenceChanged {
        session_id: Uuid,
        confidence: u8,
        timestamp: Timestamp,
    },

    /// Transcript, confidence and evidence were cleared.
    SessionReset {
        session_id: Uuid,
        timestamp: Timestamp,
    },
}

impl RecognitionEvent {
    /// Session the event belongs to.
    pub fn session_id(&self) -> Uuid {
        match self {
            Self::SessionStarted { session_id, .. }
            | Self::SessionStopped { session_id, .. }
            | Self::GestureCommitted { session_id, .. }
            | Self::ConfidenceChanged { session_id, .. }
            | Self::SessionReset { session_id, .. } => *session_id,
        }
    }

    /// Short snake_case name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SessionStarted { .. } => "session_started",
            Self::SessionStopped { .. } => "session_stopped",
            Self::GestureCommitted { .. } => "gesture_committed",
            Self::ConfidenceChanged { .. } => "confidence_changed",
            Self::SessionReset { .. } => "session_reset",
        }
    }
}
