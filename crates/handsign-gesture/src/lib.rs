//! HandSign gesture crate - rule-based hand-shape classification and temporal
//! recognition.
//!
//! A [`GestureCatalog`] maps gesture names to pure predicates over a 21-point
//! landmark frame. The [`GestureRecognizer`] accumulates per-gesture evidence
//! across frames and commits a gesture once it has been held long enough.
//! [`RecognitionSession`] wraps both in the start/stop/reset lifecycle of a
//! camera run.

pub mod catalog;
pub mod error;
#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;
pub mod geometry;
pub mod letters;
pub mod recognizer;
pub mod session;
pub mod words;

pub use catalog::{Detections, GestureCatalog, GestureDefinition, GestureId, GesturePredicate};
pub use error::CatalogError;
pub use recognizer::{Commit, EvidenceRecord, FrameOutcome, GestureRecognizer, Transcript};
pub use session::RecognitionSession;
