//! Ray-box intersection (slab method).

use raypick_math::Box3;

use crate::{Ray, RayTolerance};

/// Intersect a ray with an axis-aligned box.
///
/// Axes are processed X, Y, Z. An axis whose direction component is below
/// `tolerance.box_parallel` is treated as parallel to that slab and only
/// checks that the start position lies between the slab planes; every other
/// axis narrows a running `[t_min, t_max]` interval.
///
/// Returns `Some(0.0)` when the ray starts inside the box, `None` if the box
/// is missed or lies entirely behind the start. A zero-length direction
/// constrains no axis and never hits.
pub fn intersect_box(ray: &Ray, aabb: &Box3, tolerance: &RayTolerance) -> Option<f64> {
    let min = aabb.min();
    let max = aabb.max();
    let origin = ray.position();
    let dir = ray.direction();

    let mut interval: Option<(f64, f64)> = None;

    for axis in 0..3 {
        if dir[axis].abs() < tolerance.box_parallel {
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return None;
            }
            continue;
        }

        let mut t0 = (min[axis] - origin[axis]) / dir[axis];
        let mut t1 = (max[axis] - origin[axis]) / dir[axis];
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        interval = match interval {
            None => Some((t0, t1)),
            Some((t_min, t_max)) => {
                if t_min > t1 || t0 > t_max {
                    return None;
                }
                Some((t_min.max(t0), t_max.min(t1)))
            }
        };
    }

    let (t_min, t_max) = interval?;

    // Negative entry with positive exit: the start is inside.
    if t_min < 0.0 && t_max > 0.0 {
        return Some(0.0);
    }

    // Entry behind the start: the box is behind the ray.
    if t_min < 0.0 {
        return None;
    }

    Some(t_min)
}
