//! Six-plane view frustum with its own ray test.

use nalgebra::Matrix4;

use crate::{Plane, Point3, Vec3};

/// Rays whose direction is this close to a plane's surface are treated as parallel to it.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Convex region bounded by six planes whose normals point inward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Frustum {
    /// Build a frustum from six inward-facing planes.
    ///
    /// Order is left, right, bottom, top, near, far, though the ray test does
    /// not depend on it.
    pub fn from_planes(planes: [Plane; 6]) -> Self {
        Self { planes }
    }

    /// Extract the frustum of a view-projection matrix using OpenGL clip
    /// conventions (`-w <= x, y, z <= w`), as produced by
    /// `nalgebra::Perspective3`.
    ///
    /// Returns `None` if any extracted plane is degenerate.
    pub fn from_matrix(m: &Matrix4<f64>) -> Option<Self> {
        let row = |i: usize| m.row(i).transpose();
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        let plane = |v: nalgebra::Vector4<f64>| Plane::from_coefficients(v.x, v.y, v.z, v.w);

        Some(Self {
            planes: [
                plane(r3 + r0)?,
                plane(r3 - r0)?,
                plane(r3 + r1)?,
                plane(r3 - r1)?,
                plane(r3 + r2)?,
                plane(r3 - r2)?,
            ],
        })
    }

    /// The bounding planes.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Test whether `p` lies inside or on the boundary.
    pub fn contains(&self, p: &Point3) -> bool {
        self.planes.iter().all(|plane| plane.distance_to(p) >= 0.0)
    }

    /// Distance along `origin + t * direction` to where the ray enters the
    /// frustum, `0.0` when `origin` is already inside.
    ///
    /// Clips the parametric interval `[0, inf)` against every plane and
    /// returns its start if anything remains.
    pub fn ray_distance(&self, origin: &Point3, direction: &Vec3) -> Option<f64> {
        let mut t_near = 0.0_f64;
        let mut t_far = f64::INFINITY;

        for plane in &self.planes {
            let dist = plane.distance_to(origin);
            let denom = plane.normal.dot(direction);

            if denom.abs() < PARALLEL_EPSILON {
                if dist < 0.0 {
                    return None;
                }
                continue;
            }

            let t = -dist / denom;
            if denom > 0.0 {
                // Moving toward the inside: this plane is an entry.
                t_near = t_near.max(t);
            } else {
                t_far = t_far.min(t);
            }

            if t_near > t_far {
                return None;
            }
        }

        Some(t_near)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Perspective3;

    fn unit_cube() -> Frustum {
        Frustum::from_planes([
            Plane::new(Vec3::new(1.0, 0.0, 0.0), 1.0),
            Plane::new(Vec3::new(-1.0, 0.0, 0.0), 1.0),
            Plane::new(Vec3::new(0.0, 1.0, 0.0), 1.0),
            Plane::new(Vec3::new(0.0, -1.0, 0.0), 1.0),
            Plane::new(Vec3::new(0.0, 0.0, 1.0), 1.0),
            Plane::new(Vec3::new(0.0, 0.0, -1.0), 1.0),
        ])
    }

    #[test]
    fn test_contains() {
        let f = unit_cube();
        assert!(f.contains(&Point3::origin()));
        assert!(f.contains(&Point3::new(1.0, 1.0, 1.0)));
        assert!(!f.contains(&Point3::new(1.5, 0.0, 0.0)));
    }

    #[test]
    fn test_ray_from_outside() {
        let f = unit_cube();
        let t = f
            .ray_distance(&Point3::new(-3.0, 0.0, 0.0), &Vec3::new(1.0, 0.0, 0.0))
            .unwrap();
        assert!((t - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_ray_from_inside() {
        let f = unit_cube();
        let t = f.ray_distance(&Point3::new(0.2, 0.0, 0.0), &Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(t, Some(0.0));
    }

    #[test]
    fn test_ray_misses() {
        let f = unit_cube();
        // parallel to the x slabs and outside them
        assert!(f
            .ray_distance(&Point3::new(-3.0, 5.0, 0.0), &Vec3::new(1.0, 0.0, 0.0))
            .is_none());
        // pointing away
        assert!(f
            .ray_distance(&Point3::new(-3.0, 0.0, 0.0), &Vec3::new(-1.0, 0.0, 0.0))
            .is_none());
        // diagonal that passes beside a corner
        assert!(f
            .ray_distance(&Point3::new(-3.0, 0.0, 0.0), &Vec3::new(1.0, 1.0, 0.0))
            .is_none());
    }

    #[test]
    fn test_from_perspective_matrix() {
        let proj = Perspective3::new(1.0, std::f64::consts::FRAC_PI_2, 1.0, 100.0);
        let f = Frustum::from_matrix(proj.as_matrix()).unwrap();

        assert!(f.contains(&Point3::new(0.0, 0.0, -10.0)));
        assert!(!f.contains(&Point3::new(0.0, 0.0, 10.0)));

        // from the eye, straight down the view axis: enters at the near plane
        let t = f
            .ray_distance(&Point3::origin(), &Vec3::new(0.0, 0.0, -1.0))
            .unwrap();
        assert!((t - 1.0).abs() < 1e-9);
    }
}
