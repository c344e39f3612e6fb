//! Axis-aligned boxes derived from placement transforms
//!
//! Every object in the kitchen is the canonical unit cube `[-1, 1]^3` pushed
//! through a scale + translation transform. Instead of transforming the eight
//! corners, the box is recovered algebraically from the matrix diagonal and
//! translation column. This only holds while the transform carries no
//! rotation or shear; [`AxisAlignedPlacement::from_matrix`] checks that.
//!
//! A zero scale component makes the box degenerate: the recovered offset is
//! `x / 0` (±∞ or NaN) and multiplying it back by zero gives NaN bounds.
//! Every comparison against NaN is false, so a degenerate box never collides
//! and is never hit by a ray. The kitchen relies on this to "consume" an
//! ingredient by scaling it to zero.

use super::GeometryError;
use crate::foundation::math::{Mat4, Mat4Ext, Vec3};

/// Largest off-diagonal magnitude accepted as "no rotation/shear"
pub const AXIS_ALIGNMENT_EPSILON: f32 = 1e-6;

/// World-space axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its corners (no reordering is applied)
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Closed-interval overlap test on all three axes
    ///
    /// Touching faces count as overlapping. No epsilon is applied.
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && self.max[i] >= other.min[i])
    }

    /// True when any bound is NaN (zero-scale placement)
    pub fn is_degenerate(&self) -> bool {
        self.min.iter().chain(self.max.iter()).any(|v| v.is_nan())
    }

    /// Center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-extents of the box
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }
}

/// Anything that can be reduced to a world-space [`Aabb`]
pub trait AxisAlignedBounds {
    /// Compute the world-space box. Recomputed on every call.
    fn bounds(&self) -> Aabb;
}

impl AxisAlignedBounds for Aabb {
    fn bounds(&self) -> Aabb {
        *self
    }
}

impl AxisAlignedBounds for Mat4 {
    fn bounds(&self) -> Aabb {
        extract_box(self)
    }
}

impl<T: AxisAlignedBounds + ?Sized> AxisAlignedBounds for &T {
    fn bounds(&self) -> Aabb {
        (**self).bounds()
    }
}

/// Derive the world box of the unit cube under `transform`
///
/// Reads only the diagonal scale terms and the translation column; any
/// rotation or shear in `transform` is silently ignored.
pub fn extract_box(transform: &Mat4) -> Aabb {
    box_from_components(transform.diagonal_scale(), transform.translation_column())
}

fn box_from_components(scale: Vec3, translation: Vec3) -> Aabb {
    let mut min = Vec3::zeros();
    let mut max = Vec3::zeros();
    for i in 0..3 {
        // Translation column holds the offset already multiplied by the scale
        let offset = translation[i] / scale[i];
        min[i] = (-1.0 + offset) * scale[i];
        max[i] = (1.0 + offset) * scale[i];
    }
    Aabb::new(min, max)
}

/// Scale + translation placement of a unit cube
///
/// `translation` is the matrix translation column, i.e. the local offset
/// already multiplied by `scale`. Keeping the column (rather than the local
/// offset) preserves the degenerate behaviour of a zero scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignedPlacement {
    /// Half-extents of the placed cube along each axis
    pub scale: Vec3,
    /// World-space translation column of the placement matrix
    pub translation: Vec3,
}

impl AxisAlignedPlacement {
    /// Placement equivalent to `scale(scale) * translation(offset)`
    pub fn new(scale: Vec3, offset: Vec3) -> Self {
        Self {
            scale,
            translation: scale.component_mul(&offset),
        }
    }

    /// Placement centred at `center` with half-extents `half_extents`
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            scale: half_extents,
            translation: center,
        }
    }

    /// Validate that `matrix` is a pure scale + translation and decompose it
    pub fn from_matrix(matrix: &Mat4) -> Result<Self, GeometryError> {
        for row in 0..4 {
            for col in 0..3 {
                if row == col {
                    continue;
                }
                let value = matrix[(row, col)];
                if value.abs() > AXIS_ALIGNMENT_EPSILON {
                    return Err(GeometryError::NotAxisAligned { row, col, value });
                }
            }
        }
        let w = matrix[(3, 3)];
        if (w - 1.0).abs() > AXIS_ALIGNMENT_EPSILON {
            return Err(GeometryError::NotAxisAligned { row: 3, col: 3, value: w });
        }

        Ok(Self {
            scale: matrix.diagonal_scale(),
            translation: matrix.translation_column(),
        })
    }

    /// Rebuild the 4x4 matrix for this placement
    pub fn to_matrix(&self) -> Mat4 {
        let mut m = Mat4::scaling(self.scale);
        m[(0, 3)] = self.translation.x;
        m[(1, 3)] = self.translation.y;
        m[(2, 3)] = self.translation.z;
        m
    }

    /// Local (pre-scale) offset, `translation / scale`
    pub fn local_offset(&self) -> Vec3 {
        self.translation.component_div(&self.scale)
    }

    /// Equivalent of post-multiplying `translation(offset)`
    ///
    /// `offset` is in local units, so the world displacement is
    /// `scale ∘ offset`.
    #[must_use]
    pub fn translated_local(&self, offset: Vec3) -> Self {
        Self {
            scale: self.scale,
            translation: self.translation + self.scale.component_mul(&offset),
        }
    }

    /// Equivalent of post-multiplying `scaling(0, 0, 0)`
    ///
    /// The translation column is untouched, the diagonal collapses to zero and
    /// the resulting box is degenerate.
    #[must_use]
    pub fn consumed(&self) -> Self {
        Self {
            scale: Vec3::zeros(),
            translation: self.translation,
        }
    }

    /// True when any scale component is zero
    pub fn is_consumed(&self) -> bool {
        self.scale.iter().any(|s| *s == 0.0)
    }
}

impl AxisAlignedBounds for AxisAlignedPlacement {
    fn bounds(&self) -> Aabb {
        box_from_components(self.scale, self.translation)
    }
}

impl From<AxisAlignedPlacement> for Mat4 {
    fn from(placement: AxisAlignedPlacement) -> Self {
        placement.to_matrix()
    }
}

impl TryFrom<&Mat4> for AxisAlignedPlacement {
    type Error = GeometryError;

    fn try_from(matrix: &Mat4) -> Result<Self, Self::Error> {
        Self::from_matrix(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_is_unit_cube() {
        let b = extract_box(&Mat4::identity());
        assert_relative_eq!(b.min, Vec3::new(-1.0, -1.0, -1.0));
        assert_relative_eq!(b.max, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_scaled_translated_box() {
        // Tofu starting placement from the prep layout
        let m = Mat4::scale_then_translate(Vec3::new(0.4, 0.4, 0.6), Vec3::new(-26.0, 11.0, 14.0));
        let b = extract_box(&m);

        assert_relative_eq!(b.min, Vec3::new(-10.8, 4.0, 7.8), epsilon = 1e-4);
        assert_relative_eq!(b.max, Vec3::new(-10.0, 4.8, 9.0), epsilon = 1e-4);
        assert_relative_eq!(b.center(), Vec3::new(-10.4, 4.4, 8.4), epsilon = 1e-4);
        assert_relative_eq!(b.half_extents(), Vec3::new(0.4, 0.4, 0.6), epsilon = 1e-4);
    }

    #[test]
    fn test_placement_matches_matrix_path() {
        let scale = Vec3::new(1.2, 0.2, 1.6);
        let offset = Vec3::new(-7.0, 21.0, 5.5);
        let placement = AxisAlignedPlacement::new(scale, offset);
        let matrix = Mat4::scale_then_translate(scale, offset);

        assert_relative_eq!(placement.bounds().min, extract_box(&matrix).min, epsilon = 1e-5);
        assert_relative_eq!(placement.bounds().max, extract_box(&matrix).max, epsilon = 1e-5);
        assert_relative_eq!(placement.to_matrix(), matrix, epsilon = 1e-5);
        assert_relative_eq!(placement.local_offset(), offset, epsilon = 1e-5);
    }

    #[test]
    fn test_from_matrix_accepts_scale_translate() {
        let matrix = Mat4::scale_then_translate(Vec3::new(3.0, 4.0, 8.0), Vec3::new(-3.0, 0.0, 0.625));
        let placement = AxisAlignedPlacement::from_matrix(&matrix).unwrap();

        assert_relative_eq!(placement.scale, Vec3::new(3.0, 4.0, 8.0));
        assert_relative_eq!(placement.translation, Vec3::new(-9.0, 0.0, 5.0));
    }

    #[test]
    fn test_from_matrix_rejects_rotation() {
        let rotation = Mat4::from_axis_angle(&Vec3::x_axis(), std::f32::consts::FRAC_PI_2);
        let matrix = rotation * Mat4::scale_then_translate(Vec3::new(1.2, 1.2, 2.0), Vec3::zeros());

        match AxisAlignedPlacement::from_matrix(&matrix) {
            Err(GeometryError::NotAxisAligned { .. }) => {}
            other => panic!("expected NotAxisAligned, got {other:?}"),
        }
    }

    #[test]
    fn test_from_matrix_rejects_projective_row() {
        let mut matrix = Mat4::identity();
        matrix[(3, 2)] = 1.0;
        assert!(AxisAlignedPlacement::try_from(&matrix).is_err());
    }

    #[test]
    fn test_translated_local_moves_in_scaled_units() {
        let placement = AxisAlignedPlacement::new(Vec3::new(0.5, 0.5, 0.5), Vec3::zeros());
        let moved = placement.translated_local(Vec3::new(0.0, -0.5, 2.0));

        assert_relative_eq!(moved.translation, Vec3::new(0.0, -0.25, 1.0));
        assert_relative_eq!(moved.scale, placement.scale);
    }

    #[test]
    fn test_zero_scale_box_is_nan() {
        let placement = AxisAlignedPlacement::new(Vec3::new(0.4, 0.35, 0.4), Vec3::new(-26.0, 12.5, 26.0));
        let consumed = placement.consumed();

        assert!(consumed.is_consumed());
        assert!(!placement.is_consumed());
        assert_eq!(consumed.translation, placement.translation);
        assert!(consumed.bounds().is_degenerate());
        assert!(!placement.bounds().is_degenerate());
    }

    #[test]
    fn test_zero_scale_at_origin_is_still_degenerate() {
        // 0 / 0 is NaN rather than infinity, same outcome
        let b = extract_box(&Mat4::zeros());
        assert!(b.is_degenerate());
        assert!(!b.intersects(&b));
    }

    #[test]
    fn test_single_zero_axis_is_degenerate() {
        let m = Mat4::scale_then_translate(Vec3::new(1.0, 0.0, 1.0), Vec3::zeros());
        assert!(extract_box(&m).is_degenerate());
    }
}
