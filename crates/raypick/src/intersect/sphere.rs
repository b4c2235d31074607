//! Ray-sphere intersection.

use raypick_math::Sphere;

use crate::Ray;

/// Intersect a ray with a sphere, returning the distance to the near hit.
///
/// The direction is assumed to be unit length: the separation vector is
/// projected onto it and the result combined with lengths by Pythagoras. For
/// a non-unit direction the returned distance is not in world units, so
/// normalize first (see [`Ray::normalized`]). The direction is not
/// re-normalized here.
///
/// Returns `Some(0.0)` if the ray starts strictly inside the sphere, `None`
/// if the sphere is behind the start or missed.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<f64> {
    let difference = sphere.center - ray.position();

    let difference_len_sq = difference.norm_squared();
    let radius_sq = sphere.radius * sphere.radius;

    if difference_len_sq < radius_sq {
        return Some(0.0);
    }

    // Distance along the ray to the point closest to the center.
    let projection = ray.direction().dot(&difference);
    if projection < 0.0 {
        return None;
    }

    let discriminant = radius_sq + projection * projection - difference_len_sq;
    if discriminant < 0.0 {
        return None;
    }

    Some(projection - discriminant.sqrt())
}
