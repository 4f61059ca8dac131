//! Per-frame motion of the star group.
//!
//! The whole group shares one transform derived from an accumulated angle
//! `theta` (in degrees): it tumbles around all three axes by
//! `5 * sin(theta)` radians and breathes with a uniform scale of
//! `cos(2 * theta)`. The scale crosses zero at `theta = 45` and goes negative
//! past it, which mirrors the group. Renderers must accept that.

use glam::{DAffine3, DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Peak rotation, in radians, around each axis.
pub const ROTATION_AMPLITUDE: f64 = 5.0;

/// Accumulated angle driving the starfield motion.
///
/// Starts at zero and only ever grows by the step passed to [`tick`](Self::tick).
/// One state belongs to one render loop; `tick` takes `&mut self`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StarfieldState {
    theta: f64,
}

impl StarfieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated angle in degrees.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Advance by `step` degrees and return the transform for the new angle.
    ///
    /// A zero step freezes the motion. Non-finite steps are not checked and
    /// poison every later frame with NaN.
    pub fn tick(&mut self, step: f64) -> FrameTransform {
        self.theta += step;
        FrameTransform::from_theta(self.theta)
    }
}

/// Rigid transform applied to the star group for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameTransform {
    /// Euler angles in radians, applied in XYZ order. All three components are equal.
    pub rotation: DVec3,
    /// Scale factors. All three components are equal and may be negative.
    pub scale: DVec3,
}

impl FrameTransform {
    /// The transform for an accumulated angle of `theta` degrees.
    pub fn from_theta(theta: f64) -> Self {
        let r = ROTATION_AMPLITUDE * theta.to_radians().sin();
        let s = (theta * 2.0).to_radians().cos();
        Self {
            rotation: DVec3::splat(r),
            scale: DVec3::splat(s),
        }
    }

    /// No rotation, unit scale.
    pub const IDENTITY: Self = Self {
        rotation: DVec3::ZERO,
        scale: DVec3::ONE,
    };

    /// Rotation as a quaternion, matching a scene graph that applies XYZ Euler angles.
    pub fn orientation(&self) -> DQuat {
        DQuat::from_rotation_x(self.rotation.x)
            * DQuat::from_rotation_y(self.rotation.y)
            * DQuat::from_rotation_z(self.rotation.z)
    }

    /// Scale, then rotate, then move to `origin`.
    pub fn to_affine(&self, origin: DVec3) -> DAffine3 {
        DAffine3::from_scale_rotation_translation(self.scale, self.orientation(), origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_first_tick_small_step() {
        let mut state = StarfieldState::new();
        let transform = state.tick(0.01);

        assert_eq!(state.theta(), 0.01);
        let expected_r = 5.0 * (0.01 * std::f64::consts::PI / 180.0).sin();
        let expected_s = (0.02 * std::f64::consts::PI / 180.0).cos();
        assert!((transform.rotation.x - expected_r).abs() < EPS);
        assert!((transform.rotation.x - 0.000_872_665).abs() < 1e-9);
        assert!((transform.scale.x - expected_s).abs() < EPS);
        assert!((transform.scale.x - 0.999_999_94).abs() < 1e-8);
    }

    #[test]
    fn test_components_are_uniform() {
        let transform = FrameTransform::from_theta(123.4);
        assert_eq!(transform.rotation, DVec3::splat(transform.rotation.x));
        assert_eq!(transform.scale, DVec3::splat(transform.scale.x));
    }

    #[test]
    fn test_repeated_ticks_match_single_large_step() {
        let step = 0.01;
        let n = 300;

        let mut many = StarfieldState::new();
        let mut last = FrameTransform::IDENTITY;
        for _ in 0..n {
            last = many.tick(step);
        }

        let mut once = StarfieldState::new();
        let single = once.tick(step * n as f64);

        assert!((many.theta() - once.theta()).abs() < 1e-9);
        assert!((last.rotation - single.rotation).abs().max_element() < 1e-9);
        assert!((last.scale - single.scale).abs().max_element() < 1e-9);
    }

    #[test]
    fn test_fifty_dense_ticks_reach_one_degree() {
        let mut state = StarfieldState::new();
        let mut last = FrameTransform::IDENTITY;
        for _ in 0..50 {
            last = state.tick(0.02);
        }

        assert!((state.theta() - 1.0).abs() < 1e-12);
        let direct = FrameTransform::from_theta(1.0);
        assert!((last.rotation.x - direct.rotation.x).abs() < 1e-12);
        assert!((last.scale.x - direct.scale.x).abs() < 1e-12);
        assert!((direct.rotation.x - 5.0 * 1f64.to_radians().sin()).abs() < EPS);
        assert!((direct.scale.x - 2f64.to_radians().cos()).abs() < EPS);
    }

    #[test]
    fn test_scale_reaches_zero_then_mirrors() {
        assert!(FrameTransform::from_theta(45.0).scale.x.abs() < EPS);
        assert!(FrameTransform::from_theta(46.0).scale.x < 0.0);
        assert!(FrameTransform::from_theta(90.0).scale.x + 1.0 < EPS);
    }

    #[test]
    fn test_zero_step_freezes_motion() {
        let mut state = StarfieldState::new();
        let first = state.tick(0.0);
        let second = state.tick(0.0);
        assert_eq!(state.theta(), 0.0);
        assert_eq!(first, second);
        assert_eq!(first.rotation, DVec3::ZERO);
        assert_eq!(first.scale, DVec3::ONE);
    }

    #[test]
    fn test_theta_is_monotonic_for_positive_step() {
        let mut state = StarfieldState::new();
        let mut previous = state.theta();
        for _ in 0..1000 {
            state.tick(0.02);
            assert!(state.theta() > previous);
            previous = state.theta();
        }
    }

    #[test]
    fn test_non_finite_step_propagates_nan() {
        let mut state = StarfieldState::new();
        let transform = state.tick(f64::INFINITY);
        assert!(transform.rotation.x.is_nan());
        assert!(transform.scale.x.is_nan());
    }

    #[test]
    fn test_affine_matches_manual_composition() {
        let transform = FrameTransform::from_theta(60.0);
        let origin = DVec3::new(1.0, -2.0, 3.0);
        let point = DVec3::new(100.0, -50.0, 25.0);

        let r = transform.rotation.x;
        let s = transform.scale.x;
        // Rx * Ry * Rz applied to the scaled point.
        let rotated = glam::DMat3::from_rotation_x(r)
            * glam::DMat3::from_rotation_y(r)
            * glam::DMat3::from_rotation_z(r)
            * (point * s);
        let expected = rotated + origin;

        let actual = transform.to_affine(origin).transform_point3(point);
        assert!(
            (actual - expected).length() < 1e-9,
            "affine gave {actual}, expected {expected}"
        );
    }

    #[test]
    fn test_identity_affine_leaves_points_alone() {
        let point = DVec3::new(-400.0, 0.5, 399.9);
        let moved = FrameTransform::IDENTITY
            .to_affine(DVec3::ZERO)
            .transform_point3(point);
        assert!((moved - point).length() < 1e-12);
    }

    #[test]
    fn test_transform_serializes_as_arrays() {
        let json = serde_json::to_value(FrameTransform::IDENTITY).unwrap();
        assert_eq!(json["rotation"], serde_json::json!([0.0, 0.0, 0.0]));
        assert_eq!(json["scale"], serde_json::json!([1.0, 1.0, 1.0]));
    }
}
