//! Feature extractor properties
//!
//! Shape, finiteness, determinism and scale behaviour over random poses,
//! plus the fixed contract order.

use proptest::prelude::*;
use sign_web::features::{extract, Feature, FeatureError, FEATURE_COUNT, FEATURE_NAMES, LANDMARK_VALUES};

fn pose() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0f64..1.0, LANDMARK_VALUES)
}

fn is_angle(i: usize) -> bool {
    i < Feature::ThumbTipToPalmDist.index()
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn wrong_length_is_rejected(values in prop::collection::vec(-1.0f64..1.0, 0..200)) {
        prop_assume!(values.len() != LANDMARK_VALUES);
        prop_assert_eq!(extract(&values), Err(FeatureError::InvalidInputShape(values.len())));
    }

    #[test]
    fn valid_pose_gives_thirty_finite_values(flat in pose()) {
        let features = extract(&flat).unwrap();
        prop_assert_eq!(features.as_slice().len(), FEATURE_COUNT);
        prop_assert!(features.as_slice().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn extraction_is_deterministic(flat in pose()) {
        let a = extract(&flat).unwrap();
        let b = extract(&flat).unwrap();
        let a_bits: Vec<u64> = a.as_slice().iter().map(|v| v.to_bits()).collect();
        let b_bits: Vec<u64> = b.as_slice().iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(a_bits, b_bits);
    }

    #[test]
    fn angles_lie_in_zero_to_pi(flat in pose()) {
        let features = extract(&flat).unwrap();
        for (i, &v) in features.as_slice().iter().enumerate().filter(|(i, _)| is_angle(*i)) {
            prop_assert!((0.0..=std::f64::consts::PI).contains(&v), "{} = {}", FEATURE_NAMES[i], v);
        }
    }

    #[test]
    fn uniform_scale_scales_lengths_not_angles(flat in pose(), k in 0.25f64..4.0) {
        let scaled: Vec<f64> = flat.iter().map(|v| v * k).collect();
        let base = extract(&flat).unwrap();
        let grown = extract(&scaled).unwrap();

        for i in 0..FEATURE_COUNT {
            let (b, g) = (base.as_slice()[i], grown.as_slice()[i]);
            if is_angle(i) {
                prop_assert!(close(b, g, 1e-6), "{}: {} vs {}", FEATURE_NAMES[i], b, g);
            } else {
                prop_assert!(close(b * k, g, 1e-9), "{}: {} * {} vs {}", FEATURE_NAMES[i], b, k, g);
            }
        }
    }
}

#[test]
fn single_point_hand_is_all_zero() {
    for p in [0.0, 0.5, 1.0] {
        let features = extract(&[p; LANDMARK_VALUES]).unwrap();
        assert_eq!(features.as_slice(), &[0.0; FEATURE_COUNT][..]);
    }
}

#[test]
fn contract_order_is_stable() {
    let expected = [
        "thumb_knuckle_angle", "thumb_middle_joint_angle",
        "index_knuckle_angle", "index_middle_joint_angle",
        "middle_knuckle_angle", "middle_middle_joint_angle",
        "ring_knuckle_angle", "ring_middle_joint_angle",
        "pinky_knuckle_angle", "pinky_middle_joint_angle",
        "thumb_tip_to_palm_dist", "index_tip_to_palm_dist", "middle_tip_to_palm_dist",
        "ring_tip_to_palm_dist", "pinky_tip_to_palm_dist",
        "thumb_height", "index_height", "middle_height", "ring_height", "pinky_height",
        "thumb_to_index_dist", "thumb_to_pinky_dist",
        "hand_curvature", "finger_spread", "thumb_pinky_opposition",
        "thumb_dist_to_palm_plane", "index_dist_to_palm_plane", "middle_dist_to_palm_plane",
        "ring_dist_to_palm_plane", "pinky_dist_to_palm_plane",
    ];
    assert_eq!(FEATURE_NAMES, expected);
    for (i, feature) in Feature::ALL.iter().enumerate() {
        assert_eq!(feature.name(), expected[i]);
    }
}
