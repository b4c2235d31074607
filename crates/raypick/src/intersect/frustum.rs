//! Ray-frustum intersection, delegated to the frustum.

use raypick_math::Frustum;

use crate::error::{RayError, Result};
use crate::Ray;

/// A volume that owns its ray test.
///
/// [`intersect_frustum`] only forwards to this; the algorithm and its
/// tolerances belong to the implementor.
pub trait FrustumRayTest {
    /// Distance along `ray` to the first point inside the volume, `Some(0.0)`
    /// if the ray starts inside, `None` if it never enters.
    fn ray_distance(&self, ray: &Ray) -> Option<f64>;
}

impl FrustumRayTest for Frustum {
    fn ray_distance(&self, ray: &Ray) -> Option<f64> {
        Frustum::ray_distance(self, &ray.position(), &ray.direction())
    }
}

/// Intersect a ray with a frustum by delegating to its own test.
///
/// Fails with [`RayError::MissingFrustum`] if no frustum is given.
pub fn intersect_frustum<F: FrustumRayTest + ?Sized>(
    ray: &Ray,
    frustum: Option<&F>,
) -> Result<Option<f64>> {
    let Some(frustum) = frustum else {
        log::warn!("frustum test requested without a frustum");
        return Err(RayError::MissingFrustum);
    };
    Ok(frustum.ray_distance(ray))
}
