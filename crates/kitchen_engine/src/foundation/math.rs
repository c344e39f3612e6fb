//! Math utilities and types
//!
//! Thin aliases over `nalgebra` plus the handful of matrix builders the
//! kitchen scene uses. Transforms follow the scene-graph convention of
//! post-multiplication: `scale(s) * translation(t)` places the unit cube at
//! `s ∘ t` with half-extents `s`.

pub use nalgebra::{Matrix4, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (homogeneous coordinates)
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Extension trait for Mat4 with the builders used by scene placement code
pub trait Mat4Ext {
    /// Non-uniform scaling matrix
    fn scaling(scale: Vec3) -> Mat4;

    /// Pure translation matrix
    fn translation(offset: Vec3) -> Mat4;

    /// `scaling(scale) * translation(offset)`
    ///
    /// The resulting fourth column is `scale ∘ offset`, which is what the box
    /// extractor divides back out.
    fn scale_then_translate(scale: Vec3, offset: Vec3) -> Mat4;

    /// Scale diagonal `(m00, m11, m22)`
    fn diagonal_scale(&self) -> Vec3;

    /// Translation column `(m03, m13, m23)`
    fn translation_column(&self) -> Vec3;
}

impl Mat4Ext for Mat4 {
    fn scaling(scale: Vec3) -> Mat4 {
        Mat4::new_nonuniform_scaling(&scale)
    }

    fn translation(offset: Vec3) -> Mat4 {
        Mat4::new_translation(&offset)
    }

    fn scale_then_translate(scale: Vec3, offset: Vec3) -> Mat4 {
        Self::scaling(scale) * Self::translation(offset)
    }

    fn diagonal_scale(&self) -> Vec3 {
        Vec3::new(self[(0, 0)], self[(1, 1)], self[(2, 2)])
    }

    fn translation_column(&self) -> Vec3 {
        Vec3::new(self[(0, 3)], self[(1, 3)], self[(2, 3)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_then_translate_stores_scaled_offset() {
        let m = Mat4::scale_then_translate(Vec3::new(0.4, 0.35, 0.4), Vec3::new(-26.0, 12.5, 26.0));

        assert_relative_eq!(m.diagonal_scale(), Vec3::new(0.4, 0.35, 0.4));
        assert_relative_eq!(m.translation_column(), Vec3::new(-10.4, 4.375, 10.4), epsilon = 1e-5);
        assert_relative_eq!(m[(3, 3)], 1.0);
    }

    #[test]
    fn test_post_multiplied_translation_moves_in_local_units() {
        let base = Mat4::scale_then_translate(Vec3::new(2.0, 2.0, 2.0), Vec3::zeros());
        let moved = base * Mat4::translation(Vec3::new(0.0, -0.5, 0.0));

        // One local unit is two world units under a 2x scale
        assert_relative_eq!(moved.translation_column(), Vec3::new(0.0, -1.0, 0.0));
    }
}
