//! Borrowed view over triangle index/vertex buffers.

use raypick_math::Point3;

use crate::error::{RayError, Result};

/// Indexed triangle soup borrowed from the caller.
///
/// Each consecutive triple of `indices` is one triangle whose corners are
/// looked up in `vertices`. Indices are checked once, when the view is
/// built, so the intersection tests can index without bounds failures.
#[derive(Debug, Clone, Copy)]
pub struct TriangleMesh<'a> {
    indices: &'a [u32],
    vertices: &'a [Point3],
}

impl<'a> TriangleMesh<'a> {
    /// Wrap index and vertex buffers, validating every index.
    pub fn new(indices: &'a [u32], vertices: &'a [Point3]) -> Result<Self> {
        if indices.len() % 3 != 0 {
            log::warn!("rejecting mesh with {} indices", indices.len());
            return Err(RayError::MeshIndexCount(indices.len()));
        }

        let vertex_count = vertices.len();
        if let Some((pos, &index)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &i)| (i as usize) >= vertex_count)
        {
            log::warn!("rejecting mesh: index {index} out of range for {vertex_count} vertices");
            return Err(RayError::MeshIndexOutOfBounds {
                triangle: pos / 3,
                index,
                vertex_count,
            });
        }

        Ok(Self { indices, vertices })
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Corners `[a, b, c]` of triangle `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.triangle_count()`.
    #[inline]
    pub fn triangle(&self, i: usize) -> [Point3; 3] {
        let tri = &self.indices[i * 3..i * 3 + 3];
        [
            self.vertices[tri[0] as usize],
            self.vertices[tri[1] as usize],
            self.vertices[tri[2] as usize],
        ]
    }

    /// The index buffer.
    pub fn indices(&self) -> &'a [u32] {
        self.indices
    }

    /// The vertex buffer.
    pub fn vertices(&self) -> &'a [Point3] {
        self.vertices
    }
}
