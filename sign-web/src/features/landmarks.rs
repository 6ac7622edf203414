//! Hand pose storage - 21 MediaPipe hand landmarks
//!
//! A `HandPose` can only be built from input that passed the shape and
//! finiteness checks, so everything downstream can index it freely.

use nalgebra::Vector3;
use serde::Deserialize;

use super::error::FeatureError;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

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

/// Landmarks per hand
pub const LANDMARK_COUNT: usize = 21;

/// Flat values per hand (x, y, z per landmark)
pub const LANDMARK_VALUES: usize = LANDMARK_COUNT * 3;

/// Fingertips, thumb to pinky
pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Wrist plus the four finger bases; their mean is the palm center
pub const FINGER_BASES: [usize; 5] = [WRIST, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

/// Overlay connections drawn by the tracker view
pub const HAND_SKELETON: [(usize, usize); 23] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (MIDDLE_MCP, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (RING_MCP, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (WRIST, PINKY_MCP), (WRIST, MIDDLE_MCP), (WRIST, RING_MCP),
];

/// `HAND_SKELETON` as `[a0, b0, a1, b1, ...]` for line drawing
pub fn skeleton_flat() -> Vec<u32> {
    HAND_SKELETON
        .iter()
        .flat_map(|&(a, b)| [a as u32, b as u32])
        .collect()
}

// ============================================================================
// FINGERS
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

/// Fingers in feature order
pub const FINGERS: [Finger; 5] = [
    Finger::Thumb,
    Finger::Index,
    Finger::Middle,
    Finger::Ring,
    Finger::Pinky,
];

impl Finger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }

    /// (parent, joint, child) triples for the knuckle and middle joint.
    ///
    /// The thumb starts at CMC rather than the wrist, the other fingers at
    /// their MCP base.
    pub fn joints(&self) -> [(usize, usize, usize); 2] {
        match self {
            Finger::Thumb => [(THUMB_CMC, THUMB_MCP, THUMB_IP), (THUMB_MCP, THUMB_IP, THUMB_TIP)],
            Finger::Index => [(INDEX_MCP, INDEX_PIP, INDEX_DIP), (INDEX_PIP, INDEX_DIP, INDEX_TIP)],
            Finger::Middle => [(MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP)],
            Finger::Ring => [(RING_MCP, RING_PIP, RING_DIP), (RING_PIP, RING_DIP, RING_TIP)],
            Finger::Pinky => [(PINKY_MCP, PINKY_PIP, PINKY_DIP), (PINKY_PIP, PINKY_DIP, PINKY_TIP)],
        }
    }

    pub fn tip(&self) -> usize {
        FINGERTIPS[*self as usize]
    }
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single 3D landmark point (normalized image coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f64, // 0-1 across the frame
    pub y: f64, // 0-1 down the frame
    pub z: f64, // Relative depth
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// Landmark as delivered by the tracking library; depth may be absent
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct RawLandmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: Option<f64>,
}

/// One tracked hand: exactly 21 validated landmarks
#[derive(Clone, Debug, PartialEq)]
pub struct HandPose {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandPose {
    /// Build from `[x0, y0, z0, x1, y1, z1, ..., x20, y20, z20]`.
    ///
    /// Rejects anything that is not exactly 63 finite values; never pads
    /// or truncates.
    pub fn from_flat(flat: &[f64]) -> Result<Self, FeatureError> {
        if flat.len() != LANDMARK_VALUES {
            return Err(FeatureError::InvalidInputShape(flat.len()));
        }

        if let Some((index, &value)) = flat.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(FeatureError::InvalidInputType { index, value });
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (landmark, xyz) in landmarks.iter_mut().zip(flat.chunks_exact(3)) {
            *landmark = Landmark::new(xyz[0], xyz[1], xyz[2]);
        }

        Ok(Self { landmarks })
    }

    /// Build from tracker points, defaulting missing depth to 0
    pub fn from_points(points: &[RawLandmark]) -> Result<Self, FeatureError> {
        if points.len() != LANDMARK_COUNT {
            return Err(FeatureError::InvalidInputShape(points.len() * 3));
        }

        let flat: Vec<f64> = points
            .iter()
            .flat_map(|p| [p.x, p.y, p.z.unwrap_or(0.0)])
            .collect();

        Self::from_flat(&flat)
    }

    pub fn landmark(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }

    /// Landmark as a vector, for geometry
    pub fn point(&self, index: usize) -> Vector3<f64> {
        self.landmarks[index].to_vector()
    }

    /// Back to the 63-value wire layout
    pub fn to_flat(&self) -> Vec<f64> {
        self.landmarks
            .iter()
            .flat_map(|l| [l.x, l.y, l.z])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential_flat() -> Vec<f64> {
        (0..LANDMARK_VALUES).map(|i| i as f64 * 0.01).collect()
    }

    #[test]
    fn test_from_flat_preserves_order() {
        let pose = HandPose::from_flat(&sequential_flat()).unwrap();
        assert_eq!(pose.landmark(WRIST), Landmark::new(0.0, 0.01, 0.02));
        let tip = pose.landmark(PINKY_TIP);
        assert!((tip.x - 0.60).abs() < 1e-12);
        assert!((tip.z - 0.62).abs() < 1e-12);
        assert_eq!(pose.to_flat(), sequential_flat());
    }

    #[test]
    fn test_from_flat_rejects_wrong_length() {
        assert_eq!(HandPose::from_flat(&[]), Err(FeatureError::InvalidInputShape(0)));
        assert_eq!(
            HandPose::from_flat(&[0.5; 66]),
            Err(FeatureError::InvalidInputShape(66))
        );
        assert_eq!(
            HandPose::from_flat(&[0.5; 62]),
            Err(FeatureError::InvalidInputShape(62))
        );
    }

    #[test]
    fn test_from_flat_rejects_non_finite() {
        let mut flat = sequential_flat();
        flat[7] = f64::NAN;
        match HandPose::from_flat(&flat) {
            Err(FeatureError::InvalidInputType { index, .. }) => assert_eq!(index, 7),
            other => panic!("expected InvalidInputType, got {:?}", other),
        }

        flat[7] = f64::INFINITY;
        assert!(matches!(
            HandPose::from_flat(&flat),
            Err(FeatureError::InvalidInputType { index: 7, .. })
        ));
    }

    #[test]
    fn test_from_points_defaults_missing_depth() {
        let json = r#"[{"x":0.5,"y":0.9,"visibility":0.8}]"#;
        let one: Vec<RawLandmark> = serde_json::from_str(json).unwrap();
        let points: Vec<RawLandmark> = (0..LANDMARK_COUNT).map(|_| one[0]).collect();
        let pose = HandPose::from_points(&points).unwrap();
        assert_eq!(pose.landmark(MIDDLE_TIP), Landmark::new(0.5, 0.9, 0.0));
    }

    #[test]
    fn test_from_points_rejects_wrong_count() {
        let point = RawLandmark { x: 0.1, y: 0.2, z: Some(0.0) };
        assert_eq!(
            HandPose::from_points(&[point; 20]),
            Err(FeatureError::InvalidInputShape(60))
        );
    }

    #[test]
    fn test_finger_tables() {
        assert_eq!(Finger::Thumb.tip(), THUMB_TIP);
        assert_eq!(Finger::Pinky.tip(), PINKY_TIP);
        assert_eq!(Finger::Ring.joints()[1], (RING_PIP, RING_DIP, RING_TIP));
        assert!(HAND_SKELETON.iter().all(|(a, b)| *a < LANDMARK_COUNT && *b < LANDMARK_COUNT));
    }

    #[test]
    fn test_skeleton_flat_pairs() {
        let flat = skeleton_flat();
        assert_eq!(flat.len(), HAND_SKELETON.len() * 2);
        assert_eq!(&flat[..2], &[WRIST as u32, THUMB_CMC as u32]);
        assert_eq!(&flat[flat.len() - 2..], &[WRIST as u32, RING_MCP as u32]);

        let mut edges: Vec<(u32, u32)> = flat.chunks_exact(2).map(|e| (e[0], e[1])).collect();
        edges.sort_unstable();
        edges.dedup();
        assert_eq!(edges.len(), HAND_SKELETON.len());
    }
}
