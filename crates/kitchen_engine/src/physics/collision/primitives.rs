//! Rays, planes and their intersection tests
//!
//! Rays are finite segments from the near clip plane to the far clip plane.
//! The segment length only fixes the parameterisation: intersections are
//! reported for any `t >= 0` (box entry may even be behind the start), so the
//! far plane is not a hard limit.

use super::aabb::AxisAlignedBounds;
use crate::foundation::math::Vec3;

/// `|direction · normal|` at or below this is treated as parallel
pub const PLANE_PARALLEL_EPSILON: f32 = 1e-6;

/// A world-space ray segment produced by unprojecting a pointer position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Point on the near clip plane
    pub start: Vec3,
    /// Point on the far clip plane
    pub end: Vec3,
}

impl Ray {
    /// Creates a new ray segment
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Unnormalised direction, `end - start`
    pub fn direction(&self) -> Vec3 {
        self.end - self.start
    }

    /// Point at parameter `t` (0 = start, 1 = end)
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.start + self.direction() * t
    }

    /// Parameter of the plane crossing, if it lies at or ahead of `start`
    pub fn plane_parameter(&self, plane: &Plane) -> Option<f32> {
        let denom = self.direction().dot(&plane.normal);
        if denom.abs() <= PLANE_PARALLEL_EPSILON {
            return None;
        }

        let t = (plane.point - self.start).dot(&plane.normal) / denom;
        if t.is_nan() || t < 0.0 {
            return None;
        }
        Some(t)
    }

    /// Slab-method entry parameter against a box
    ///
    /// Axes are visited x, y, z; the test bails out as soon as one slab
    /// interval fails to overlap the running interval. Direction components
    /// of exactly zero are handled as parallel slabs (hit only when the start
    /// lies inside the slab) so that `0 / 0` never reaches a comparison.
    pub fn box_entry_parameter<B: AxisAlignedBounds + ?Sized>(&self, target: &B) -> Option<f32> {
        let bounds = target.bounds();
        if bounds.is_degenerate() {
            return None;
        }

        let dir = self.direction();
        let (mut tmin, mut tmax) = slab(bounds.min.x, bounds.max.x, self.start.x, dir.x)?;

        for axis in 1..3 {
            let (axis_min, axis_max) =
                slab(bounds.min[axis], bounds.max[axis], self.start[axis], dir[axis])?;

            if tmin > axis_max || axis_min > tmax {
                return None;
            }
            if axis_min > tmin {
                tmin = axis_min;
            }
            if axis_max < tmax {
                tmax = axis_max;
            }
        }

        // Zero-length rays have no entry point
        tmin.is_finite().then_some(tmin)
    }
}

/// Per-axis `[t_enter, t_exit]`, or `None` for a parallel ray outside the slab
fn slab(min: f32, max: f32, origin: f32, dir: f32) -> Option<(f32, f32)> {
    if dir == 0.0 {
        return (origin >= min && origin <= max).then_some((f32::NEG_INFINITY, f32::INFINITY));
    }

    let t0 = (min - origin) / dir;
    let t1 = (max - origin) / dir;
    if t0 > t1 {
        Some((t1, t0))
    } else {
        Some((t0, t1))
    }
}

/// An infinite plane through `point` with normal `normal` (need not be unit)
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Plane {
    /// Any point on the plane
    pub point: Vec3,
    /// Plane normal
    pub normal: Vec3,
}

impl Plane {
    /// Creates a plane from a point and a normal
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Horizontal plane at height `y`
    pub fn horizontal(y: f32) -> Self {
        Self::new(Vec3::new(0.0, y, 0.0), Vec3::y())
    }

    /// Where `ray` crosses this plane, see [`intersect_ray_plane`]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Vec3> {
        ray.plane_parameter(self).map(|t| ray.point_at(t))
    }
}

/// Entry point of `ray` into the box of `target`, or `None` on a miss
///
/// The returned point is at the smallest parameter inside all three slabs,
/// which may precede `ray.start` when the start is inside the box.
pub fn intersect_ray_box<B: AxisAlignedBounds + ?Sized>(target: &B, ray: &Ray) -> Option<Vec3> {
    ray.box_entry_parameter(target).map(|t| ray.point_at(t))
}

/// Where `ray` crosses the plane through `plane_point` with `plane_normal`
///
/// Misses when the ray is parallel to the plane or the crossing lies behind
/// `ray.start`. Crossings beyond `ray.end` are still reported.
pub fn intersect_ray_plane(ray: &Ray, plane_normal: Vec3, plane_point: Vec3) -> Option<Vec3> {
    Plane::new(plane_point, plane_normal).intersect_ray(ray)
}
