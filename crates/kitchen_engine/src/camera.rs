//! Camera state consumed by pointer unprojection
//!
//! The core never moves the camera; it only reads the view ("camera
//! inverse") and projection matrices the scene layer last used to draw.
//! Projections follow the OpenGL clip convention (`z` in `[-1, 1]`), which is
//! what unprojection assumes for the near and far planes.

use crate::foundation::math::{Mat4, Point3, Vec3};
use crate::physics::GeometryError;

/// Camera-inverse (view) and projection matrices of the active camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// World-to-view transform
    pub camera_inverse: Mat4,
    /// View-to-clip transform
    pub projection: Mat4,
}

impl CameraState {
    /// Wrap externally supplied matrices
    pub fn new(camera_inverse: Mat4, projection: Mat4) -> Self {
        Self {
            camera_inverse,
            projection,
        }
    }

    /// Right-handed look-at camera with a perspective projection
    ///
    /// # Arguments
    /// * `eye` - Camera position in world space
    /// * `target` - Point the camera looks at
    /// * `up` - Up direction
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect` - Viewport width / height
    /// * `near` - Near clip distance
    /// * `far` - Far clip distance
    pub fn look_at(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let view = Mat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &up);
        let projection = Mat4::new_perspective(aspect, fov_y, near, far);
        Self::new(view, projection)
    }

    /// The kitchen's opening view for a viewport with the given aspect ratio
    pub fn kitchen_overview(aspect: f32) -> Self {
        Self::look_at(
            Vec3::new(0.0, 10.0, 35.0),
            Vec3::new(0.0, 7.0, 0.0),
            Vec3::y(),
            std::f32::consts::FRAC_PI_4,
            aspect,
            0.1,
            1000.0,
        )
    }

    /// `projection * camera_inverse`
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.camera_inverse
    }

    /// Clip-to-world transform, `inverse(projection * camera_inverse)`
    pub fn inverse_view_projection(&self) -> Result<Mat4, GeometryError> {
        self.view_projection()
            .try_inverse()
            .ok_or(GeometryError::SingularCamera)
    }

}

impl Default for CameraState {
    /// Overview camera for a 16:9 viewport
    fn default() -> Self {
        Self::kitchen_overview(16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_overview_view_puts_eye_at_origin() {
        let camera = CameraState::kitchen_overview(1.5);
        let eye = camera.camera_inverse.transform_point(&Point3::new(0.0, 10.0, 35.0));
        assert_relative_eq!(eye.coords, Vec3::zeros(), epsilon = 1e-4);

        // Target lies straight ahead on the view axis
        let target = camera.camera_inverse.transform_point(&Point3::new(0.0, 7.0, 0.0));
        assert_relative_eq!(target.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(target.y, 0.0, epsilon = 1e-4);
        assert!(target.z < 0.0);
    }

    #[test]
    fn test_singular_projection_is_reported() {
        let camera = CameraState::new(Mat4::identity(), Mat4::zeros());
        assert_eq!(camera.inverse_view_projection(), Err(GeometryError::SingularCamera));
    }

    #[test]
    fn test_view_projection_round_trip() {
        let camera = CameraState::default();
        let inverse = camera.inverse_view_projection().unwrap();
        assert_relative_eq!(inverse * camera.view_projection(), Mat4::identity(), epsilon = 1e-3);
    }
}
