//! Fixed feature order shared with the remote classifier
//!
//! The classifier was trained on this exact ordering. Reordering variants
//! silently breaks inference, so `Feature::ALL` and the discriminants must
//! stay in lockstep.

use super::landmarks::Finger;

/// Number of features per frame
pub const FEATURE_COUNT: usize = 30;

/// One named slot of the feature vector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    // Joint angles
    ThumbKnuckleAngle,
    ThumbMiddleJointAngle,
    IndexKnuckleAngle,
    IndexMiddleJointAngle,
    MiddleKnuckleAngle,
    MiddleMiddleJointAngle,
    RingKnuckleAngle,
    RingMiddleJointAngle,
    PinkyKnuckleAngle,
    PinkyMiddleJointAngle,

    // Tip to palm center
    ThumbTipToPalmDist,
    IndexTipToPalmDist,
    MiddleTipToPalmDist,
    RingTipToPalmDist,
    PinkyTipToPalmDist,

    // Tip height over wrist
    ThumbHeight,
    IndexHeight,
    MiddleHeight,
    RingHeight,
    PinkyHeight,

    // Key distances
    ThumbToIndexDist,
    ThumbToPinkyDist,

    // Hand shape
    HandCurvature,
    FingerSpread,
    ThumbPinkyOpposition,

    // Tip to palm plane
    ThumbDistToPalmPlane,
    IndexDistToPalmPlane,
    MiddleDistToPalmPlane,
    RingDistToPalmPlane,
    PinkyDistToPalmPlane,
}

use Feature::*;

impl Feature {
    /// Every feature in contract order
    pub const ALL: [Feature; FEATURE_COUNT] = [
        ThumbKnuckleAngle, ThumbMiddleJointAngle,
        IndexKnuckleAngle, IndexMiddleJointAngle,
        MiddleKnuckleAngle, MiddleMiddleJointAngle,
        RingKnuckleAngle, RingMiddleJointAngle,
        PinkyKnuckleAngle, PinkyMiddleJointAngle,
        ThumbTipToPalmDist, IndexTipToPalmDist, MiddleTipToPalmDist, RingTipToPalmDist, PinkyTipToPalmDist,
        ThumbHeight, IndexHeight, MiddleHeight, RingHeight, PinkyHeight,
        ThumbToIndexDist, ThumbToPinkyDist,
        HandCurvature, FingerSpread, ThumbPinkyOpposition,
        ThumbDistToPalmPlane, IndexDistToPalmPlane, MiddleDistToPalmPlane, RingDistToPalmPlane, PinkyDistToPalmPlane,
    ];

    /// Position in the feature vector
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        FEATURE_NAMES[self.index()]
    }

    /// Knuckle (`middle_joint == false`) or middle-joint angle of a finger
    pub fn joint_angle(finger: Finger, middle_joint: bool) -> Feature {
        Self::ALL[finger as usize * 2 + middle_joint as usize]
    }

    pub fn tip_to_palm(finger: Finger) -> Feature {
        Self::ALL[ThumbTipToPalmDist.index() + finger as usize]
    }

    pub fn height(finger: Finger) -> Feature {
        Self::ALL[ThumbHeight.index() + finger as usize]
    }

    pub fn dist_to_palm_plane(finger: Finger) -> Feature {
        Self::ALL[ThumbDistToPalmPlane.index() + finger as usize]
    }
}

/// Stable feature names, in contract order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "thumb_knuckle_angle",
    "thumb_middle_joint_angle",
    "index_knuckle_angle",
    "index_middle_joint_angle",
    "middle_knuckle_angle",
    "middle_middle_joint_angle",
    "ring_knuckle_angle",
    "ring_middle_joint_angle",
    "pinky_knuckle_angle",
    "pinky_middle_joint_angle",
    "thumb_tip_to_palm_dist",
    "index_tip_to_palm_dist",
    "middle_tip_to_palm_dist",
    "ring_tip_to_palm_dist",
    "pinky_tip_to_palm_dist",
    "thumb_height",
    "index_height",
    "middle_height",
    "ring_height",
    "pinky_height",
    "thumb_to_index_dist",
    "thumb_to_pinky_dist",
    "hand_curvature",
    "finger_spread",
    "thumb_pinky_opposition",
    "thumb_dist_to_palm_plane",
    "index_dist_to_palm_plane",
    "middle_dist_to_palm_plane",
    "ring_dist_to_palm_plane",
    "pinky_dist_to_palm_plane",
];

/// 30 features for one frame, in contract order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub(crate) fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }

    /// (name, value) pairs in contract order
    pub fn iter_named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }
}
