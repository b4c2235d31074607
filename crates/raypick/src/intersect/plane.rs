//! Ray-plane intersection (closed-form).

use raypick_math::Plane;

use crate::{Ray, RayTolerance};

/// Intersect a ray with an infinite plane.
///
/// Returns `None` if the ray is parallel to the plane (within
/// `tolerance.plane_parallel`) or the plane lies behind the start. Hits at
/// most `tolerance.plane_behind` behind the start are reported as `0.0`.
pub fn intersect_plane(ray: &Ray, plane: &Plane, tolerance: &RayTolerance) -> Option<f64> {
    let denom = ray.direction().dot(&plane.normal);

    // Ray is parallel to plane
    if denom.abs() < tolerance.plane_parallel {
        return None;
    }

    let t = (-plane.d - plane.normal.dot(&ray.position().coords)) / denom;

    if t < 0.0 {
        if t < -tolerance.plane_behind {
            return None;
        }
        return Some(0.0);
    }

    Some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use raypick_math::{Point3, Vec3};

    fn xy_plane() -> Plane {
        Plane::new(Vec3::new(0.0, 0.0, 1.0), 0.0)
    }

    fn hit(ray: &Ray, plane: &Plane) -> Option<f64> {
        intersect_plane(ray, plane, &RayTolerance::default())
    }

    #[test]
    fn test_ray_plane_perpendicular() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let t = hit(&ray, &xy_plane()).unwrap();
        assert!((t - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_plane_from_back_side() {
        let ray = Ray::new(Point3::new(3.0, 4.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        let t = hit(&ray, &xy_plane()).unwrap();
        assert!((t - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_plane_offset() {
        // z = 2 written as dot(n, p) - 2 = 0
        let plane = Plane::new(Vec3::new(0.0, 0.0, 1.0), -2.0);
        let ray = Ray::new(Point3::new(1.0, 1.0, 7.0), Vec3::new(0.0, 0.0, -1.0));
        let t = hit(&ray, &plane).unwrap();
        assert!((t - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_plane_angled() {
        let ray = Ray::new(
            Point3::new(0.0, 0.0, 10.0),
            Vec3::new(1.0, 0.0, -1.0).normalize(),
        );
        let t = hit(&ray, &xy_plane()).unwrap();
        let expected = 10.0 * 2.0_f64.sqrt();
        assert!((t - expected).abs() < 1e-10);
    }

    #[test]
    fn test_ray_plane_parallel() {
        for z in [-3.0, 0.0, 5.0] {
            let ray = Ray::new(Point3::new(0.0, 0.0, z), Vec3::new(1.0, 0.0, 0.0));
            assert!(hit(&ray, &xy_plane()).is_none());
        }
        // nearly parallel, below plane_parallel
        let ray = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, -1e-6));
        assert!(hit(&ray, &xy_plane()).is_none());
    }

    #[test]
    fn test_ray_plane_behind() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(hit(&ray, &xy_plane()).is_none());
    }

    #[test]
    fn test_grazing_behind_clamps_to_zero() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5e-6), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(hit(&ray, &xy_plane()), Some(0.0));

        let ray = Ray::new(Point3::new(0.0, 0.0, -5e-5), Vec3::new(0.0, 0.0, -1.0));
        assert!(hit(&ray, &xy_plane()).is_none());
    }

    #[test]
    fn test_start_on_plane() {
        let ray = Ray::new(Point3::new(2.0, 2.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(hit(&ray, &xy_plane()), Some(0.0));
    }
}
