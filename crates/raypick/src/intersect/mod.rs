//! Ray-volume intersection algorithms.
//!
//! Each shape has a dedicated closed-form test reporting the parametric
//! distance `t` of the first hit at or after the ray's start. `Some(0.0)`
//! means the start position is inside or touching the shape.

mod aabb;
mod frustum;
mod plane;
mod sphere;
mod triangle;

pub use aabb::intersect_box;
pub use frustum::{intersect_frustum, FrustumRayTest};
pub use plane::intersect_plane;
pub use sphere::intersect_sphere;
pub use triangle::{
    closest_triangle_hit, first_triangle_hit, hits_any_triangle, triangle_hits, TriangleHit,
    TriangleHits,
};

use raypick_math::{Box3, Plane, Sphere};

use crate::{Ray, RayTolerance};

/// A bounding volume with a closed-form ray test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Volume {
    /// Axis-aligned box.
    Box(Box3),
    /// Sphere.
    Sphere(Sphere),
    /// Infinite plane.
    Plane(Plane),
}

impl From<Box3> for Volume {
    fn from(b: Box3) -> Self {
        Volume::Box(b)
    }
}

impl From<Sphere> for Volume {
    fn from(s: Sphere) -> Self {
        Volume::Sphere(s)
    }
}

impl From<Plane> for Volume {
    fn from(p: Plane) -> Self {
        Volume::Plane(p)
    }
}

/// Intersect a ray with any [`Volume`].
///
/// This dispatches to the test for the volume's shape.
pub fn intersect_volume(ray: &Ray, volume: &Volume, tolerance: &RayTolerance) -> Option<f64> {
    match volume {
        Volume::Box(b) => intersect_box(ray, b, tolerance),
        Volume::Sphere(s) => intersect_sphere(ray, s),
        Volume::Plane(p) => intersect_plane(ray, p, tolerance),
    }
}
