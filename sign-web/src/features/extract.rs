//! Feature extraction for sign classification
//!
//! Turns one 21-landmark hand pose into the 30 features the remote
//! classifier was trained on.

use nalgebra::Vector3;

use super::error::FeatureError;
use super::landmarks::{
    HandPose, FINGERS, FINGERTIPS, FINGER_BASES, INDEX_MCP, INDEX_TIP, PINKY_MCP, PINKY_TIP,
    THUMB_TIP, WRIST,
};
use super::layout::{Feature, FeatureVector, FEATURE_COUNT};
use super::vector::{distance, joint_angle, mean, palm_normal};

/// Extract features from a flat `[x0, y0, z0, ..., x20, y20, z20]` frame
pub fn extract(flat: &[f64]) -> Result<FeatureVector, FeatureError> {
    let pose = HandPose::from_flat(flat)?;
    Ok(extract_pose(&pose))
}

/// Extract 30 features from a validated hand pose
///
/// Features (order fixed by `Feature::ALL`):
/// - 0-9: knuckle and middle-joint angle per finger, thumb to pinky (radians)
/// - 10-14: fingertip to palm center distance
/// - 15-19: fingertip y minus wrist y (signed)
/// - 20-21: thumb tip to index tip, thumb tip to pinky tip
/// - 22: hand curvature (mean tip to palm distance)
/// - 23: finger spread (mean adjacent tip distance)
/// - 24: thumb tip to pinky base
/// - 25-29: fingertip distance to the palm plane
pub fn extract_pose(pose: &HandPose) -> FeatureVector {
    let mut values = [0.0; FEATURE_COUNT];
    let mut set = |feature: Feature, value: f64| values[feature.index()] = value;

    let wrist = pose.point(WRIST);
    // Mean of offsets from the wrist, so a collapsed hand lands exactly on it.
    // Rounds differently from summing p / 5 (off by at most a few ulp), in
    // exchange for exact zero distances on a single-point hand.
    let palm_center = wrist
        + FINGER_BASES
            .iter()
            .fold(Vector3::zeros(), |sum: Vector3<f64>, &i| sum + (pose.point(i) - wrist))
            / FINGER_BASES.len() as f64;

    // 1. Joint angles
    for finger in FINGERS {
        let [knuckle, middle] = finger.joints();
        for (joint, is_middle) in [(knuckle, false), (middle, true)] {
            let (a, b, c) = joint;
            let angle = joint_angle(pose.point(a), pose.point(b), pose.point(c));
            set(Feature::joint_angle(finger, is_middle), angle);
        }
    }

    // 2. Tip to palm center, 3. tip height over wrist
    let mut tip_to_palm = [0.0; 5];
    for finger in FINGERS {
        let tip = pose.point(finger.tip());
        let dist = distance(tip, palm_center);
        tip_to_palm[finger as usize] = dist;
        set(Feature::tip_to_palm(finger), dist);
        set(Feature::height(finger), tip.y - wrist.y);
    }

    // 4. Key finger distances
    let thumb_tip = pose.point(THUMB_TIP);
    set(Feature::ThumbToIndexDist, distance(thumb_tip, pose.point(INDEX_TIP)));
    set(Feature::ThumbToPinkyDist, distance(thumb_tip, pose.point(PINKY_TIP)));

    // 5. Hand shape
    set(Feature::HandCurvature, mean(&tip_to_palm));

    let spread: [f64; 4] = std::array::from_fn(|i| {
        distance(pose.point(FINGERTIPS[i]), pose.point(FINGERTIPS[i + 1]))
    });
    set(Feature::FingerSpread, mean(&spread));

    set(Feature::ThumbPinkyOpposition, distance(thumb_tip, pose.point(PINKY_MCP)));

    // 6. Tip to palm plane (wrist, index base, pinky base)
    let normal = palm_normal(wrist, pose.point(INDEX_MCP), pose.point(PINKY_MCP));
    for finger in FINGERS {
        let to_tip = pose.point(finger.tip()) - wrist;
        set(Feature::dist_to_palm_plane(finger), to_tip.dot(&normal).abs());
    }

    // Extreme coordinates can still overflow a norm
    for value in values.iter_mut() {
        if !value.is_finite() {
            *value = 0.0;
        }
    }

    FeatureVector::from_array(values)
}

/// Check a candidate feature sequence before it goes to the classifier
pub fn validate_features(features: &[f64]) -> Result<FeatureVector, FeatureError> {
    let values: [f64; FEATURE_COUNT] = features
        .try_into()
        .map_err(|_| FeatureError::InvalidFeatureShape(features.len()))?;
    Ok(FeatureVector::from_array(values))
}
