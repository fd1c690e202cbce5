use std::ops::Index;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{HandSignError, Result};

// =============================================================================
// Landmark indices
// =============================================================================

/// Number of landmarks in a tracked hand.
pub const LANDMARK_COUNT: usize = 21;

/// Hand landmark indices (MediaPipe hand model convention).
pub mod landmarks {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_DIP: usize = 7;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_DIP: usize = 15;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;

    /// Fingertips, thumb first.
    pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

    /// Base joint paired with each entry of `FINGERTIPS`.
    pub const FINGER_BASES: [usize; 5] = [THUMB_MCP, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

    /// The four non-thumb fingertips.
    pub const FOUR_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

    /// Knuckles paired with `FOUR_TIPS`.
    pub const FOUR_BASES: [usize; 4] = [INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];
}

// =============================================================================
// Landmarks
// =============================================================================

/// A single hand landmark in normalized image coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, 0.0 (left) to 1.0 (right).
    pub x: f32,
    /// Vertical position, 0.0 (top) to 1.0 (bottom).
    pub y: f32,
    /// Relative depth. More negative is closer to the camera.
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in all three dimensions.
    pub fn distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// One fully populated hand: exactly 21 landmarks.
///
/// Invariant: a frame can only be constructed with all 21 points, so
/// predicates may index it with the constants in [`landmarks`] freely.
/// [`LandmarkFrame::new`] takes the points as given; [`from_points`] also
/// rejects NaN and infinite coordinates.
///
/// [`from_points`]: LandmarkFrame::from_points
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    points: [Landmark; LANDMARK_COUNT],
}

impl LandmarkFrame {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build a frame from a slice, rejecting anything that is not exactly 21
    /// finite points.
    pub fn from_points(points: &[Landmark]) -> Result<Self> {
        let points: [Landmark; LANDMARK_COUNT] =
            points.try_into().map_err(|_| HandSignError::InvalidFrame {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            })?;
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(HandSignError::NonFiniteLandmark { index });
        }
        Ok(Self { points })
    }

    /// Every coordinate of every point is a finite number.
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(Landmark::is_finite)
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    /// Mutable access, mostly useful for building fixtures.
    pub fn point_mut(&mut self, index: usize) -> Option<&mut Landmark> {
        self.points.get_mut(index)
    }

    pub fn wrist(&self) -> Landmark {
        self.points[landmarks::WRIST]
    }
}

impl Index<usize> for LandmarkFrame {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.points[index]
    }
}

// =============================================================================
// Hands
// =============================================================================

/// Which hand the tracker reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

// =============================================================================
// Time
// =============================================================================

/// Milliseconds since the Unix epoch.
///
/// `Timestamp::ZERO` doubles as "never" for evidence records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Milliseconds elapsed from `earlier` to `self`. Negative if `earlier` is later.
    pub fn millis_since(&self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}
