//! AABB collision tests between placed objects
//!
//! Pure functions: nothing here owns state. The per-frame sweep over static
//! colliders is a linear scan; the kitchen has a handful of statics so no
//! broad-phase structure is needed.

use crate::physics::collision::AxisAlignedBounds;

/// True iff the boxes of `a` and `b` overlap or touch on all three axes
///
/// Symmetric by construction. Degenerate (zero-scale) boxes never collide,
/// not even with themselves.
pub fn is_colliding<A, B>(a: &A, b: &B) -> bool
where
    A: AxisAlignedBounds + ?Sized,
    B: AxisAlignedBounds + ?Sized,
{
    a.bounds().intersects(&b.bounds())
}

/// Index of the first static collider touching `moving`, if any
pub fn blocking_collider<M, S>(moving: &M, statics: &[S]) -> Option<usize>
where
    M: AxisAlignedBounds + ?Sized,
    S: AxisAlignedBounds,
{
    let moving_box = moving.bounds();
    statics
        .iter()
        .position(|collider| collider.bounds().intersects(&moving_box))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Mat4, Mat4Ext, Vec3};
    use crate::physics::collision::AxisAlignedPlacement;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const SWEEP_SAMPLES: usize = 2_000;

    fn unit_at(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4::scale_then_translate(Vec3::new(1.0, 1.0, 1.0), Vec3::new(x, y, z))
    }

    fn random_placement(rng: &mut StdRng) -> Mat4 {
        let scale = Vec3::new(
            rng.gen_range(0.05..5.0),
            rng.gen_range(0.05..5.0),
            rng.gen_range(0.05..5.0),
        );
        let offset = Vec3::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        );
        Mat4::scale_then_translate(scale, offset)
    }

    #[test]
    fn test_collision_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(0x6b69_6d63);
        let mut hits = 0;
        for _ in 0..SWEEP_SAMPLES {
            let a = random_placement(&mut rng);
            let b = random_placement(&mut rng);
            let ab = is_colliding(&a, &b);
            assert_eq!(ab, is_colliding(&b, &a), "asymmetric for {a:?} / {b:?}");
            hits += usize::from(ab);
        }
        // The sweep should exercise both outcomes
        assert!(hits > 0 && hits < SWEEP_SAMPLES);
    }

    #[test]
    fn test_self_collision() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..SWEEP_SAMPLES {
            let a = random_placement(&mut rng);
            assert!(is_colliding(&a, &a));
        }
    }

    #[test]
    fn test_touching_faces_collide() {
        // max_a.x == 1 == min_b.x
        let a = unit_at(0.0, 0.0, 0.0);
        let b = unit_at(2.0, 0.0, 0.0);
        assert!(is_colliding(&a, &b));
        assert!(is_colliding(&b, &a));
    }

    #[test]
    fn test_separated_on_one_axis_does_not_collide() {
        let a = unit_at(0.0, 0.0, 0.0);
        for axis in 0..3 {
            let mut offset = Vec3::zeros();
            offset[axis] = 2.001;
            let b = Mat4::scale_then_translate(Vec3::new(1.0, 1.0, 1.0), offset);
            assert!(!is_colliding(&a, &b), "should separate on axis {axis}");
            assert!(!is_colliding(&b, &a));
        }
    }

    #[test]
    fn test_overlap_with_mixed_scales() {
        // Countertop and the tofu dropped on top of it
        let countertop = Mat4::scale_then_translate(Vec3::new(3.0, 4.0, 8.0), Vec3::new(-3.0, 0.0, 0.625));
        let resting = AxisAlignedPlacement::from_center(Vec3::new(-9.0, 4.3, 3.0), Vec3::new(0.4, 0.4, 0.6));
        let floating = AxisAlignedPlacement::from_center(Vec3::new(-9.0, 4.5, 3.0), Vec3::new(0.4, 0.4, 0.6));

        assert!(is_colliding(&countertop, &resting));
        assert!(!is_colliding(&countertop, &floating));
    }

    #[test]
    fn test_zero_scale_never_collides() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..SWEEP_SAMPLES {
            let other = random_placement(&mut rng);
            let mut consumed = random_placement(&mut rng);
            let axis = rng.gen_range(0..3);
            consumed[(axis, axis)] = 0.0;

            assert!(!is_colliding(&consumed, &other));
            assert!(!is_colliding(&other, &consumed));
        }

        // Even a zeroed box sitting at the origin inside another box
        let big = Mat4::scale_then_translate(Vec3::new(100.0, 100.0, 100.0), Vec3::zeros());
        assert!(!is_colliding(&Mat4::zeros(), &big));
        assert!(!is_colliding(&Mat4::zeros(), &Mat4::zeros()));
    }

    #[test]
    fn test_blocking_collider_reports_first_hit() {
        let statics = [
            unit_at(10.0, 0.0, 0.0),
            unit_at(0.0, -1.5, 0.0),
            unit_at(0.0, 1.5, 0.0),
        ];
        assert_eq!(blocking_collider(&unit_at(0.0, 0.0, 0.0), &statics), Some(1));
        assert_eq!(blocking_collider(&unit_at(0.0, 5.0, 0.0), &statics), None);

        let empty: [Mat4; 0] = [];
        assert_eq!(blocking_collider(&unit_at(0.0, 0.0, 0.0), &empty), None);
    }
}
