//! Ray representation and the value-type contract.

use std::fmt;
use std::hash::{Hash, Hasher};

use raypick_math::{Box3, Plane, Point3, PointTransform, Sphere, Vec3};

use crate::error::Result;
use crate::intersect::{
    first_triangle_hit, hits_any_triangle, intersect_box, intersect_frustum, intersect_plane,
    intersect_sphere, triangle_hits, FrustumRayTest, TriangleHit, TriangleHits,
};
use crate::mesh::TriangleMesh;
use crate::tolerance::RayTolerance;

/// A ray in 3D space defined by a start position and a direction.
///
/// The direction is stored as given and is not required to be unit length.
/// Only [`Ray::intersect_sphere`] assumes it is; see [`Ray::normalized`].
///
/// Rays are immutable values. Methods that "change" a ray return a new one.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    position: Point3,
    direction: Vec3,
}

impl Ray {
    /// Create a new ray from a start position and direction.
    pub fn new(position: Point3, direction: Vec3) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Start position of the ray.
    #[inline]
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Direction of the ray, as given at construction.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Evaluate the ray at parameter `t`: `position + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.position + t * self.direction
    }

    /// Split the ray into `(position, direction)`.
    #[inline]
    pub fn into_parts(self) -> (Point3, Vec3) {
        (self.position, self.direction)
    }

    /// Same direction, new start position.
    pub fn with_position(&self, position: Point3) -> Self {
        Self::new(position, self.direction)
    }

    /// Same start position, new direction.
    pub fn with_direction(&self, direction: Vec3) -> Self {
        Self::new(self.position, direction)
    }

    /// Same ray with a unit-length direction.
    ///
    /// A zero direction yields a non-finite result.
    pub fn normalized(&self) -> Self {
        Self::new(self.position, self.direction.normalize())
    }

    /// Map this ray through a rotation or affine transform.
    ///
    /// The direction is rebuilt from the transformed endpoint
    /// `position + direction` rather than transformed as a free vector, so
    /// non-uniform scale and shear need no separate normal matrix. The
    /// result always has a unit-length direction, or a non-finite one if
    /// the transform collapses the direction to zero.
    pub fn transform<T: PointTransform + ?Sized>(&self, transform: &T) -> Self {
        let a = transform.transform_point(&self.position);
        let b = transform.transform_point(&(self.position + self.direction));
        Self::new(a, (b - a).normalize())
    }

    /// Distance to an axis-aligned box, using default tolerances.
    pub fn intersect_box(&self, aabb: &Box3) -> Option<f64> {
        intersect_box(self, aabb, &RayTolerance::DEFAULT)
    }

    /// Distance to a sphere. The direction must be unit length for the
    /// result to be in world units.
    pub fn intersect_sphere(&self, sphere: &Sphere) -> Option<f64> {
        intersect_sphere(self, sphere)
    }

    /// Distance to a plane, using default tolerances.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<f64> {
        intersect_plane(self, plane, &RayTolerance::DEFAULT)
    }

    /// Distance reported by a frustum's own ray test.
    pub fn intersect_frustum<F: FrustumRayTest + ?Sized>(
        &self,
        frustum: Option<&F>,
    ) -> Result<Option<f64>> {
        intersect_frustum(self, frustum)
    }

    /// Lazily enumerate every triangle of `mesh` this ray hits, using
    /// default tolerances.
    pub fn triangle_hits<'a>(&self, mesh: &TriangleMesh<'a>) -> TriangleHits<'a> {
        triangle_hits(self, mesh, &RayTolerance::DEFAULT)
    }

    /// First triangle hit in index-buffer order, using default tolerances.
    pub fn first_triangle_hit(&self, mesh: &TriangleMesh<'_>) -> Option<TriangleHit> {
        first_triangle_hit(self, mesh, &RayTolerance::DEFAULT)
    }

    /// Whether this ray hits any triangle of `mesh`, using default tolerances.
    pub fn hits_any_triangle(&self, mesh: &TriangleMesh<'_>) -> bool {
        hits_any_triangle(self, mesh, &RayTolerance::DEFAULT)
    }
}

/// Bit pattern used for equality and hashing: `-0.0` folds onto `0.0` and
/// every NaN onto one canonical NaN, so equality stays reflexive.
#[inline]
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0_f64.to_bits()
    } else if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

fn canonical_key(ray: &Ray) -> [u64; 6] {
    let p = ray.position;
    let d = ray.direction;
    [p.x, p.y, p.z, d.x, d.y, d.z].map(canonical_bits)
}

impl PartialEq for Ray {
    fn eq(&self, other: &Self) -> bool {
        canonical_key(self) == canonical_key(other)
    }
}

impl Eq for Ray {}

impl Hash for Ray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_key(self).hash(state);
    }
}

struct Angled<'a>(&'a [f64; 3]);

impl fmt::Display for Angled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "<{x}, {y}, {z}>")
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = [self.position.x, self.position.y, self.position.z];
        let d = [self.direction.x, self.direction.y, self.direction.z];
        write!(f, "{{Position:{} Direction:{}}}", Angled(&p), Angled(&d))
    }
}

impl From<Ray> for (Point3, Vec3) {
    fn from(ray: Ray) -> Self {
        ray.into_parts()
    }
}
