//! Bounding volumes a ray can be tested against.

use crate::{Point3, Vec3};

/// Axis-aligned box given by its minimum corner and extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box3 {
    /// Minimum corner.
    pub position: Point3,
    /// Non-negative extents along each axis.
    pub size: Vec3,
}

impl Box3 {
    /// Create a box from its minimum corner and size.
    pub fn new(position: Point3, size: Vec3) -> Self {
        Self { position, size }
    }

    /// Create a box spanning two corners, in any order.
    pub fn from_corners(a: Point3, b: Point3) -> Self {
        let min = a.inf(&b);
        let max = a.sup(&b);
        Self {
            position: min,
            size: max - min,
        }
    }

    /// Minimum corner.
    #[inline]
    pub fn min(&self) -> Point3 {
        self.position
    }

    /// Maximum corner, `position + size`.
    #[inline]
    pub fn max(&self) -> Point3 {
        self.position + self.size
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        self.position + self.size * 0.5
    }

    /// Test whether `p` lies inside or on the boundary.
    pub fn contains(&self, p: &Point3) -> bool {
        let max = self.max();
        (0..3).all(|i| p[i] >= self.position[i] && p[i] <= max[i])
    }
}

/// Sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point.
    pub center: Point3,
    /// Radius, expected to be `>= 0`.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Infinite plane `dot(normal, p) + d = 0`.
///
/// `normal` is assumed to be unit length; distances reported by
/// [`Plane::distance_to`] are only metric when it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal.
    pub normal: Vec3,
    /// Signed offset term of the plane equation.
    pub d: f64,
}

impl Plane {
    /// Create a plane from its equation coefficients.
    pub fn new(normal: Vec3, d: f64) -> Self {
        Self { normal, d }
    }

    /// Plane through `point` facing `normal`. The normal is normalized.
    pub fn from_point_normal(point: &Point3, normal: &Vec3) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            d: -normal.dot(&point.coords),
        }
    }

    /// Plane from raw `(a, b, c, d)` coefficients, rescaled so the normal is unit.
    ///
    /// Returns `None` when the normal part is zero.
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64) -> Option<Self> {
        let normal = Vec3::new(a, b, c);
        let len = normal.norm();
        if len == 0.0 {
            return None;
        }
        Some(Self {
            normal: normal / len,
            d: d / len,
        })
    }

    /// Signed distance from `p`, positive on the side the normal points to.
    #[inline]
    pub fn distance_to(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords) + self.d
    }
}
