#![warn(missing_docs)]

//! Ray casting against bounding volumes and triangle meshes.
//!
//! A [`Ray`] is an immutable start position plus direction. The
//! [`intersect`] module answers "does this ray hit that shape, and at what
//! parametric distance `t`" with closed-form tests, where the hit point is
//! `ray.at(t)`.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray value type, transforms, and shorthand queries
//! - [`intersect`] - Box, sphere, plane, frustum and triangle tests
//! - [`TriangleMesh`] - Validated view over index/vertex buffers
//! - [`RayTolerance`] - Epsilons used by the tests
//!
//! # Example
//!
//! ```
//! use raypick::{Ray, TriangleMesh};
//! use raypick_math::{Box3, Point3, Sphere, Vec3};
//!
//! let ray = Ray::new(Point3::new(-2.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
//!
//! let cube = Box3::new(Point3::new(-1.0, -1.0, -1.0), Vec3::new(2.0, 2.0, 2.0));
//! assert_eq!(ray.intersect_box(&cube), Some(1.0));
//!
//! let ball = Sphere::new(Point3::new(3.0, 0.0, 0.0), 1.0);
//! assert_eq!(ray.intersect_sphere(&ball), Some(4.0));
//!
//! let vertices = [
//!     Point3::new(0.0, -1.0, -1.0),
//!     Point3::new(0.0, 1.0, -1.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ];
//! let mesh = TriangleMesh::new(&[0, 1, 2], &vertices).unwrap();
//! let hit = ray.first_triangle_hit(&mesh).unwrap();
//! assert_eq!((hit.triangle, hit.t), (0, 2.0));
//! ```

pub mod error;
pub mod intersect;
mod mesh;
mod ray;
mod tolerance;

pub use error::{RayError, Result};
pub use intersect::{FrustumRayTest, TriangleHit, TriangleHits, Volume};
pub use mesh::TriangleMesh;
pub use ray::Ray;
pub use tolerance::RayTolerance;
