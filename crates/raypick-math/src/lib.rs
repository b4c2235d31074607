#![warn(missing_docs)]

//! Math types for the raypick intersection engine.
//!
//! Thin wrappers around nalgebra providing the point, vector and transform
//! types a ray is built from, plus the bounding volumes the engine tests
//! against: [`Box3`], [`Sphere`], [`Plane`] and [`Frustum`].

use nalgebra::{Isometry3, Matrix4, Unit, UnitQuaternion, Vector3, Vector4};

mod frustum;
mod volume;

pub use frustum::Frustum;
pub use volume::{Box3, Plane, Sphere};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A unit quaternion describing a rotation about the origin.
pub type Rotation = UnitQuaternion<f64>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Wrap an existing affine matrix.
    pub fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// Translation by `offset`.
    pub fn translation(offset: Vec3) -> Self {
        Self {
            matrix: Matrix4::new_translation(&offset),
        }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&Vec3::new(sx, sy, sz)),
        }
    }

    /// Rotation about the origin.
    pub fn rotation(rotation: &Rotation) -> Self {
        Self {
            matrix: rotation.to_homogeneous(),
        }
    }

    /// Compose: `self` then `other` applied to the result, i.e. `other * self`.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Anything that can map a point in space to another point.
///
/// Rays are transformed through this trait so that rigid rotations and full
/// affine matrices share one code path.
pub trait PointTransform {
    /// Map `p` through this transform.
    fn transform_point(&self, p: &Point3) -> Point3;
}

/// Apply the affine part of `m`; the bottom row is ignored.
fn affine_point(m: &Matrix4<f64>, p: &Point3) -> Point3 {
    let v = m * Vector4::new(p.x, p.y, p.z, 1.0);
    Point3::new(v.x, v.y, v.z)
}

impl PointTransform for Transform {
    fn transform_point(&self, p: &Point3) -> Point3 {
        affine_point(&self.matrix, p)
    }
}

impl PointTransform for Matrix4<f64> {
    fn transform_point(&self, p: &Point3) -> Point3 {
        affine_point(self, p)
    }
}

impl PointTransform for Rotation {
    fn transform_point(&self, p: &Point3) -> Point3 {
        UnitQuaternion::transform_point(self, p)
    }
}

impl PointTransform for Isometry3<f64> {
    fn transform_point(&self, p: &Point3) -> Point3 {
        Isometry3::transform_point(self, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity_transform() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = Transform::identity().transform_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = Transform::translation(Vec3::new(10.0, 20.0, 30.0));
        let result = t.transform_point(&Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(result, Point3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn test_scale() {
        let t = Transform::scale(2.0, 3.0, 4.0);
        let result = t.transform_point(&Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(result, Point3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_rotation_matches_quaternion() {
        let q = Rotation::from_axis_angle(&Vec3::z_axis(), FRAC_PI_2);
        let p = Point3::new(1.0, 0.0, 0.0);
        let by_matrix = Transform::rotation(&q).transform_point(&p);
        let by_quat = q.transform_point(&p);
        assert_relative_eq!(by_matrix, by_quat, epsilon = 1e-12);
        assert_relative_eq!(by_quat, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_then_applies_self_first() {
        // translate to (1,0,0), then scale by 2 -> (2,0,0)
        let t = Transform::translation(Vec3::new(1.0, 0.0, 0.0))
            .then(&Transform::scale(2.0, 2.0, 2.0));
        let result = t.transform_point(&Point3::origin());
        assert!((result.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse() {
        let t = Transform::translation(Vec3::new(1.0, 2.0, 3.0));
        let inv = t.inverse().unwrap();
        let p = Point3::new(5.0, 6.0, 7.0);
        let result = t.then(&inv).transform_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_isometry_and_matrix_agree() {
        let iso = Isometry3::new(Vec3::new(1.0, -2.0, 0.5), Vec3::new(0.3, 0.2, 0.1));
        let p = Point3::new(0.25, 4.0, -1.0);
        let via_matrix = iso.to_homogeneous().transform_point(&p);
        assert_relative_eq!(
            PointTransform::transform_point(&iso, &p),
            via_matrix,
            epsilon = 1e-12
        );
    }
}
