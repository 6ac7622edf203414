//! Joint angle and palm plane math on landmark vectors
//!
//! Every helper substitutes 0 for an indeterminate result (zero-length
//! segment, collapsed palm) instead of returning NaN.

use nalgebra::Vector3;

/// Angle at `joint` between the segments toward `parent` and `child`, in radians
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns angle in [0, π]:
/// - π = straight (segments point opposite ways)
/// - 0 = folded back on itself, or either segment has zero length
pub fn joint_angle(parent: Vector3<f64>, joint: Vector3<f64>, child: Vector3<f64>) -> f64 {
    let v1 = parent - joint;
    let v2 = child - joint;

    let mag1 = v1.norm();
    let mag2 = v2.norm();

    if mag1 <= 0.0 || mag2 <= 0.0 {
        return 0.0;
    }

    // Clamp guards acos against overshoot from rounding
    let cos_angle = (v1 / mag1).dot(&(v2 / mag2)).clamp(-1.0, 1.0);
    cos_angle.acos()
}

/// Unit normal of the plane through wrist, index base and pinky base
///
/// Zero vector when the three points are collinear or coincide.
pub fn palm_normal(
    wrist: Vector3<f64>,
    index_base: Vector3<f64>,
    pinky_base: Vector3<f64>,
) -> Vector3<f64> {
    let normal = (index_base - wrist).cross(&(pinky_base - wrist));
    let len = normal.norm();

    if len > 0.0 {
        normal / len
    } else {
        Vector3::zeros()
    }
}

pub fn distance(a: Vector3<f64>, b: Vector3<f64>) -> f64 {
    (a - b).norm()
}

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_straight_joint() {
        let angle = joint_angle(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.5, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
        );
        assert!((angle - PI).abs() < 1e-9);
    }

    #[test]
    fn test_right_angle_joint() {
        let angle = joint_angle(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.5, 0.0, 0.0),
            Vector3::new(0.5, 0.0, 0.5),
        );
        assert!((angle - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_zero_length_segment_gives_zero() {
        let p = Vector3::new(0.3, 0.3, 0.0);
        assert_eq!(joint_angle(p, p, Vector3::new(1.0, 0.0, 0.0)), 0.0);
        assert_eq!(joint_angle(Vector3::new(1.0, 0.0, 0.0), p, p), 0.0);
    }

    #[test]
    fn test_palm_normal_is_unit() {
        let n = palm_normal(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
        );
        assert!((n - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_degenerate_palm_normal_is_zero() {
        let n = palm_normal(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(2.0, 2.0, 0.0),
        );
        assert_eq!(n, Vector3::zeros());
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert!((mean(&[1.0, 2.0, 6.0]) - 3.0).abs() < 1e-12);
    }
}
