//! Replay of recorded tracker output.
//!
//! Input is JSON lines, one video frame per line:
//!
//! ```text
//! {"timestamp_ms": 1000, "hands": [{"handedness": "Right", "score": 0.93, "landmarks": [{"x": 0.5, "y": 0.8, "z": 0.0}, ...]}]}
//! {"timestamp_ms": 1033, "hands": []}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::io::BufRead;
use std::time::Duration;

use handsign_core::error::{HandSignError, Result};
use handsign_core::source::DetectorResult;
use handsign_core::{RecognitionEvent, Timestamp};
use handsign_gesture::RecognitionSession;
use serde::{Deserialize, Serialize};

/// One recorded frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayFrame {
    pub timestamp_ms: i64,
    #[serde(flatten)]
    pub result: DetectorResult,
}

/// Outcome of a finished replay.
#[derive(Debug)]
pub struct ReplaySummary {
    pub text: String,
    pub frames: u64,
    pub commits: u64,
    pub events: usize,
}

/// Parse one input line. `line_no` is 1-based and only used for errors.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<ReplayFrame>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| HandSignError::Replay {
            line: line_no,
            message: e.to_string(),
        })
}

/// Read every frame from `reader`, stopping at the first bad line.
pub fn read_frames(reader: impl BufRead) -> Result<Vec<ReplayFrame>> {
    let mut frames = Vec::new();
    let mut last: Option<i64> = None;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(frame) = parse_line(i + 1, &line)? {
            if last.is_some_and(|prev| frame.timestamp_ms < prev) {
                tracing::warn!(
                    line = i + 1,
                    timestamp_ms = frame.timestamp_ms,
                    "Timestamp goes backwards"
                );
            }
            last = Some(frame.timestamp_ms);
            frames.push(frame);
        }
    }
    Ok(frames)
}

/// Drive `session` through `frames`, handing every event to `on_event`.
///
/// The session is started before the first frame and stopped after the last.
/// With `realtime`, waits between frames for the recorded gap.
pub async fn run<F>(
    session: &mut RecognitionSession,
    frames: &[ReplayFrame],
    realtime: bool,
    mut on_event: F,
) -> ReplaySummary
where
    F: FnMut(&RecognitionEvent),
{
    let mut events = 0usize;
    let mut emit = |event: &RecognitionEvent| {
        events += 1;
        on_event(event);
    };

    let start_at = frames
        .first()
        .map(|f| Timestamp(f.timestamp_ms))
        .unwrap_or_else(Timestamp::now);
    if let Some(event) = session.start(start_at) {
        emit(&event);
    }

    let mut previous: Option<i64> = None;
    for frame in frames {
        if realtime {
            if let Some(prev) = previous {
                let gap = frame.timestamp_ms.saturating_sub(prev).max(0) as u64;
                tokio::time::sleep(Duration::from_millis(gap)).await;
            }
        }
        previous = Some(frame.timestamp_ms);

        for event in session.submit(&frame.result, Timestamp(frame.timestamp_ms)) {
            emit(&event);
        }
    }

    let end_at = previous.map(Timestamp).unwrap_or(start_at);
    if let Some(event) = session.stop(end_at) {
        emit(&event);
    }

    ReplaySummary {
        text: session.text().to_string(),
        frames: session.frames(),
        commits: session.commits(),
        events,
    }
}
