//! Stateless helpers on 2D and 3D vectors.
//!
//! Positive angles are counter-clockwise throughout.

use nalgebra::Rotation2;

use super::{
    vec_unit_planar, Point2, SVector, Vector2, Vector3, DEFAULT_TOLERANCE_MULTIPLIER,
    MACHINE_EPSILON, TANGENT_DECIMALS,
};
use crate::error::{GeometryError, Result};

/// Displacement, direction and left tangent of a two-point segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDescription {
    /// `end - start`.
    pub distance: Vector2,
    /// `distance` scaled to unit length, or zero for coincident points.
    pub unit: Vector2,
    /// `unit` rotated 90° counter-clockwise, rounded to [`TANGENT_DECIMALS`].
    pub tangent: Vector2,
}

/// The +Z unit normal of the drawing plane.
#[must_use]
pub fn normal_z() -> Vector3 {
    Vector3::new(0.0, 0.0, 1.0)
}

/// Rotates `point` about `origin` by `radians`.
#[must_use]
pub fn rotate_around_point(point: Point2, radians: f64, origin: Point2) -> Point2 {
    origin + Rotation2::new(radians) * (point - origin)
}

/// Rotates `vector` about the origin by `radians`.
#[must_use]
pub fn rotate(vector: &Vector2, radians: f64) -> Vector2 {
    Rotation2::new(radians) * vector
}

/// Polar angle of `vector` measured from the +X axis, in `(-π, π]`.
#[must_use]
pub fn angle(vector: &Vector2) -> f64 {
    vector.y.atan2(vector.x)
}

/// Unsigned angle in `[0, π]` between the planar directions of `v1` and `v2`.
///
/// Both vectors go through [`vec_unit_planar`] first; a zero planar part
/// therefore yields `π / 2`.
///
/// # Errors
///
/// Returns `GeometryError::InvalidDimension` if `D` is neither 2 nor 3.
pub fn angle_between<const D: usize>(v1: &SVector<D>, v2: &SVector<D>) -> Result<f64> {
    let u1 = vec_unit_planar(v1)?;
    let u2 = vec_unit_planar(v2)?;
    let dot = u1[0] * u2[0] + u1[1] * u2[1];
    Ok(dot.clamp(-1.0, 1.0).acos())
}

/// Lifts a 2D vector into 3D at height `z`.
#[must_use]
pub fn add_z(vector: &Vector2, z: f64) -> Vector3 {
    Vector3::new(vector.x, vector.y, z)
}

/// Lifts every vector of a sequence into 3D at height `z`.
#[must_use]
pub fn add_z_all(vectors: &[Vector2], z: f64) -> Vec<Vector3> {
    vectors.iter().map(|v| add_z(v, z)).collect()
}

/// Euclidean length of `vector`.
#[must_use]
pub fn norm(vector: &Vector2) -> f64 {
    vector.norm()
}

/// `vector` divided by its length. A zero vector produces NaN components.
#[must_use]
pub fn normed(vector: &Vector2) -> Vector2 {
    vector / vector.norm()
}

/// Returns whether `vector` is shorter than `tol * ε`.
#[must_use]
pub fn is_zero<const D: usize>(vector: &SVector<D>, tol: f64) -> bool {
    vector.norm() < tol * MACHINE_EPSILON
}

/// [`are_same_within`] using the default tolerance multiplier.
#[must_use]
pub fn are_same<const D: usize>(v1: &SVector<D>, v2: &SVector<D>) -> bool {
    are_same_within(v1, v2, DEFAULT_TOLERANCE_MULTIPLIER)
}

/// Returns whether `v1 - v2` is zero within `tol * ε`.
#[must_use]
pub fn are_same_within<const D: usize>(v1: &SVector<D>, v2: &SVector<D>, tol: f64) -> bool {
    is_zero(&(v1 - v2), tol)
}

/// Describes the segment between exactly two points.
///
/// Coincident points are not an error: the returned vectors are zero and the
/// condition is reported at debug level.
///
/// # Errors
///
/// Returns `GeometryError::InvalidArgumentCount` unless `points` holds two points.
pub fn two_points_described(points: &[Point2]) -> Result<SegmentDescription> {
    let [start, end] = points else {
        return Err(GeometryError::InvalidArgumentCount {
            expected: 2,
            found: points.len(),
        }
        .into());
    };

    let distance = end - start;
    let length = distance.norm();
    let unit = if length > 0.0 {
        distance / length
    } else {
        Vector2::zeros()
    };
    let tangent =
        rotate(&unit, std::f64::consts::FRAC_PI_2).map(|c| round_to(c, TANGENT_DECIMALS));

    if is_zero(&distance, DEFAULT_TOLERANCE_MULTIPLIER) {
        tracing::debug!(
            %start,
            %end,
            "two_points_described got coincident points; segment is degenerate"
        );
    }

    Ok(SegmentDescription {
        distance,
        unit,
        tangent,
    })
}

/// Snaps `vector` to the unit axis of its dominant component, keeping its sign.
///
/// With `flip` the other axis is used. Ties pick the X axis.
#[must_use]
pub fn snap_unit_vector(vector: &Vector2, flip: bool) -> Vector2 {
    let dominant = usize::from(vector.y.abs() > vector.x.abs());
    let axis = if flip { 1 - dominant } else { dominant };
    let mut out = Vector2::zeros();
    out[axis] = sign(vector[axis]);
    out
}

fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::error::DrawError;

    const TOL: f64 = 1e-12;

    fn sample_vectors() -> Vec<Vector2> {
        vec![
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, -2.0),
            Vector2::new(3.0, 4.0),
            Vector2::new(-1.5, 0.25),
            Vector2::new(1e4, -3e3),
        ]
    }

    // ── rotation ──

    #[test]
    fn rotate_quarter_turn_is_ccw() {
        let r = rotate(&Vector2::new(1.0, 0.0), FRAC_PI_2);
        assert_abs_diff_eq!(r, Vector2::new(0.0, 1.0), epsilon = TOL);
    }

    #[test]
    fn rotate_by_zero_is_identity() {
        for v in sample_vectors() {
            assert_relative_eq!(rotate(&v, 0.0), v);
        }
    }

    #[test]
    fn rotate_round_trip() {
        for v in sample_vectors() {
            for theta in [0.3, -1.2, PI, 5.0] {
                let back = rotate(&rotate(&v, theta), -theta);
                assert_abs_diff_eq!(back, v, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn rotate_around_offset_origin() {
        let p = rotate_around_point(Point2::new(2.0, 1.0), FRAC_PI_2, Point2::new(1.0, 1.0));
        assert_abs_diff_eq!(p, Point2::new(1.0, 2.0), epsilon = TOL);
    }

    #[test]
    fn rotate_around_origin_matches_rotate() {
        let v = Vector2::new(3.0, -2.0);
        let p = rotate_around_point(Point2::from(v), 0.7, Point2::origin());
        assert_abs_diff_eq!(p.coords, rotate(&v, 0.7), epsilon = TOL);
    }

    #[test]
    fn negative_angle_is_clockwise() {
        let p = rotate_around_point(Point2::new(0.0, 1.0), -FRAC_PI_2, Point2::origin());
        assert_abs_diff_eq!(p, Point2::new(1.0, 0.0), epsilon = TOL);
    }

    // ── angles ──

    #[test]
    fn polar_angle() {
        assert_relative_eq!(angle(&Vector2::new(1.0, 1.0)), FRAC_PI_4);
        assert_relative_eq!(angle(&Vector2::new(-1.0, 0.0)), PI);
        assert_relative_eq!(angle(&Vector2::new(0.0, -1.0)), -FRAC_PI_2);
    }

    #[test]
    fn angle_between_self_and_opposite() {
        for v in sample_vectors() {
            assert_abs_diff_eq!(angle_between(&v, &v).unwrap(), 0.0, epsilon = 1e-7);
            assert_abs_diff_eq!(angle_between(&v, &-v).unwrap(), PI, epsilon = 1e-7);
        }
    }

    #[test]
    fn angle_between_perpendicular() {
        let a = angle_between(&Vector2::new(2.0, 0.0), &Vector2::new(0.0, 5.0)).unwrap();
        assert_relative_eq!(a, FRAC_PI_2, epsilon = TOL);
    }

    #[test]
    fn angle_between_ignores_z() {
        let a = angle_between(&Vector3::new(1.0, 0.0, 4.0), &Vector3::new(1.0, 1.0, -2.0)).unwrap();
        assert_relative_eq!(a, FRAC_PI_4, epsilon = TOL);
    }

    #[test]
    fn angle_between_zero_vector() {
        let a = angle_between(&Vector2::zeros(), &Vector2::new(1.0, 0.0)).unwrap();
        assert_relative_eq!(a, FRAC_PI_2);
    }

    #[test]
    fn angle_between_rejects_4d() {
        let v = nalgebra::Vector4::new(1.0, 0.0, 0.0, 0.0);
        assert!(matches!(
            angle_between(&v, &v),
            Err(DrawError::Geometry(GeometryError::InvalidDimension { found: 4 }))
        ));
    }

    // ── comparison ──

    #[test]
    fn zero_detection() {
        assert!(is_zero(&Vector2::new(1e-16, -1e-16), DEFAULT_TOLERANCE_MULTIPLIER));
        assert!(!is_zero(&Vector2::new(1e-10, 0.0), DEFAULT_TOLERANCE_MULTIPLIER));
        assert!(is_zero(&Vector2::new(1e-10, 0.0), 1e7));
    }

    #[test]
    fn sameness() {
        for v in sample_vectors() {
            assert!(are_same(&v, &v));
        }
        assert!(!are_same(&Vector2::new(1.0, 0.0), &Vector2::new(0.0, 1.0)));
        assert!(are_same(
            &Vector3::new(1.0, 2.0, 3.0),
            &Vector3::new(1.0 + 1e-15, 2.0, 3.0)
        ));
        assert!(!are_same_within(
            &Vector2::new(1.0, 0.0),
            &Vector2::new(1.0 + 1e-12, 0.0),
            1.0
        ));
    }

    // ── segment description ──

    #[test]
    fn describes_segment() {
        let d = two_points_described(&[Point2::new(1.0, 1.0), Point2::new(4.0, 5.0)]).unwrap();
        assert_relative_eq!(d.distance, Vector2::new(3.0, 4.0));
        assert_relative_eq!(d.unit, Vector2::new(0.6, 0.8), epsilon = TOL);
        assert_relative_eq!(d.tangent, Vector2::new(-0.8, 0.6), epsilon = TOL);
    }

    #[test]
    fn tangent_is_rounded() {
        let d = two_points_described(&[Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)]).unwrap();
        // cos(π/2) noise is rounded away.
        assert_eq!(d.tangent.x.abs(), 0.0);
        assert_eq!(d.tangent.y, 1.0);
    }

    #[test]
    fn coincident_points_are_degenerate_not_fatal() {
        let p = Point2::new(2.0, -1.0);
        let d = two_points_described(&[p, p]).unwrap();
        assert_eq!(d.distance, Vector2::zeros());
        assert_eq!(d.unit, Vector2::zeros());
        assert_eq!(d.tangent.norm(), 0.0);
    }

    #[test]
    fn wrong_point_count_rejected() {
        let pts = [Point2::origin(), Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)];
        let err = two_points_described(&pts).unwrap_err();
        assert!(matches!(
            err,
            DrawError::Geometry(GeometryError::InvalidArgumentCount {
                expected: 2,
                found: 3
            })
        ));
        assert!(two_points_described(&[Point2::origin()]).is_err());
    }

    // ── snapping and misc ──

    #[test]
    fn snaps_to_dominant_axis() {
        assert_eq!(snap_unit_vector(&Vector2::new(0.9, -0.2), false), Vector2::new(1.0, 0.0));
        assert_eq!(snap_unit_vector(&Vector2::new(0.1, -0.7), false), Vector2::new(0.0, -1.0));
    }

    #[test]
    fn snap_flip_uses_other_axis() {
        assert_eq!(snap_unit_vector(&Vector2::new(0.9, -0.2), true), Vector2::new(0.0, -1.0));
        assert_eq!(snap_unit_vector(&Vector2::new(3.0, 0.0), true), Vector2::new(0.0, 0.0));
    }

    #[test]
    fn snap_tie_prefers_x() {
        assert_eq!(snap_unit_vector(&Vector2::new(-1.0, 1.0), false), Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn lifts_into_3d() {
        assert_eq!(add_z(&Vector2::new(1.0, 2.0), 3.0), Vector3::new(1.0, 2.0, 3.0));
        let lifted = add_z_all(&[Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)], 0.0);
        assert_eq!(lifted, vec![Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)]);
        assert_eq!(normal_z(), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn norm_and_normed() {
        let v = Vector2::new(3.0, 4.0);
        assert_relative_eq!(norm(&v), 5.0);
        assert_relative_eq!(normed(&v), Vector2::new(0.6, 0.8), epsilon = TOL);
    }
}
