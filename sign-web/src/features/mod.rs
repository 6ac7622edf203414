//! Feature module - hand landmarks to classifier features
//!
//! Pure geometry only: no I/O, no shared state. The bridge and the session
//! call into this once per tracked frame.

mod error;
mod extract;
mod landmarks;
mod layout;
mod vector;

pub use error::FeatureError;
pub use extract::{extract, extract_pose, validate_features};
pub use landmarks::{
    skeleton_flat, Finger, HandPose, Landmark, RawLandmark,
    FINGERS, FINGERTIPS, FINGER_BASES, HAND_SKELETON, LANDMARK_COUNT, LANDMARK_VALUES,
    WRIST, THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};
pub use layout::{Feature, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use vector::{distance, joint_angle, mean, palm_normal};
