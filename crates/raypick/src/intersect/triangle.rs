//! Ray-triangle intersection over indexed meshes.
//!
//! Uses the Möller-Trumbore formulation: the hit is solved directly for the
//! ray parameter `t` and barycentric coordinates `(u, v)` with Cramer's rule,
//! without computing the triangle's plane.

use std::iter::FusedIterator;

use crate::mesh::TriangleMesh;
use crate::{Ray, RayTolerance};

/// A ray hitting one triangle of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Index of the triangle in the index buffer (index triple / 3).
    pub triangle: usize,
    /// Parameter along the ray, always `>= 0`.
    pub t: f64,
    /// Barycentric weight of the triangle's second corner.
    pub u: f64,
    /// Barycentric weight of the triangle's third corner.
    pub v: f64,
}

/// Lazy sequence of the triangles a ray hits, in index-buffer order.
///
/// Each call to `next` scans forward only until the next hit, so stopping
/// early skips the remaining triangles. The sequence is finite and, once
/// exhausted, stays exhausted.
#[derive(Debug, Clone)]
pub struct TriangleHits<'a> {
    ray: Ray,
    mesh: TriangleMesh<'a>,
    tolerance: RayTolerance,
    next: usize,
}

impl TriangleHits<'_> {
    fn test(&self, i: usize) -> Option<TriangleHit> {
        let [a, b, c] = self.mesh.triangle(i);
        let origin = self.ray.position();
        let dir = self.ray.direction();

        let edge1 = b - a;
        let edge2 = c - a;

        let h = dir.cross(&edge2);
        let det = edge1.dot(&h);

        if det.abs() < self.tolerance.triangle_determinant {
            log::trace!("triangle {i}: parallel to ray (det = {det})");
            return None;
        }

        let inv_det = 1.0 / det;
        let s = origin - a;

        let u = s.dot(&h) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&edge1);
        let v = dir.dot(&q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(&q) * inv_det;
        if t < 0.0 {
            // Triangle is behind the ray start.
            return None;
        }

        log::trace!("triangle {i}: hit at t = {t} (u = {u}, v = {v})");
        Some(TriangleHit { triangle: i, t, u, v })
    }
}

impl Iterator for TriangleHits<'_> {
    type Item = TriangleHit;

    fn next(&mut self) -> Option<TriangleHit> {
        let count = self.mesh.triangle_count();
        while self.next < count {
            let i = self.next;
            self.next += 1;
            if let Some(hit) = self.test(i) {
                return Some(hit);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.mesh.triangle_count() - self.next))
    }
}

impl FusedIterator for TriangleHits<'_> {}

/// Enumerate every triangle of `mesh` the ray hits.
///
/// Hits come in index-buffer order, not sorted by distance. Triangles
/// parallel to the ray (determinant magnitude below
/// `tolerance.triangle_determinant`) are skipped. Triangles behind the start
/// are excluded.
pub fn triangle_hits<'a>(
    ray: &Ray,
    mesh: &TriangleMesh<'a>,
    tolerance: &RayTolerance,
) -> TriangleHits<'a> {
    TriangleHits {
        ray: *ray,
        mesh: *mesh,
        tolerance: *tolerance,
        next: 0,
    }
}

/// First hit in index-buffer order. This is not necessarily the nearest;
/// see [`closest_triangle_hit`].
pub fn first_triangle_hit(
    ray: &Ray,
    mesh: &TriangleMesh<'_>,
    tolerance: &RayTolerance,
) -> Option<TriangleHit> {
    triangle_hits(ray, mesh, tolerance).next()
}

/// Whether the ray hits any triangle of `mesh`. Stops at the first hit.
pub fn hits_any_triangle(ray: &Ray, mesh: &TriangleMesh<'_>, tolerance: &RayTolerance) -> bool {
    first_triangle_hit(ray, mesh, tolerance).is_some()
}

/// Nearest hit over the whole mesh. Ties keep the earlier triangle.
pub fn closest_triangle_hit(
    ray: &Ray,
    mesh: &TriangleMesh<'_>,
    tolerance: &RayTolerance,
) -> Option<TriangleHit> {
    triangle_hits(ray, mesh, tolerance).reduce(|best, hit| if hit.t < best.t { hit } else { best })
}
