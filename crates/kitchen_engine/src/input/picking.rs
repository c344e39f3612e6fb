//! Pointer state and screen-to-world ray construction
//!
//! Pointer events arrive in client (page) pixels. They are made relative to
//! the canvas, normalised to clip space and pushed back through
//! `inverse(projection * camera_inverse)` at the near (`z = -1`) and far
//! (`z = 1`) planes to form a world-space [`Ray`].

use crate::camera::CameraState;
use crate::foundation::math::{Mat4, Vec3, Vec4};
use crate::physics::{GeometryError, Ray};

/// Canvas rectangle in client pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Client X of the canvas' left edge
    pub left: f32,
    /// Client Y of the canvas' top edge
    pub top: f32,
    /// Canvas width in pixels
    pub width: f32,
    /// Canvas height in pixels
    pub height: f32,
}

impl Viewport {
    /// Canvas anchored at the client origin
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Canvas with an explicit client-space origin
    pub fn with_origin(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Width / height
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Convert client coordinates to Normalized Device Coordinates (NDC)
    ///
    /// NDC range: [-1, 1] where:
    /// - X: -1 = left, +1 = right
    /// - Y: +1 = top, -1 = bottom (screen Y is flipped)
    pub fn to_ndc(&self, client_x: f32, client_y: f32) -> (f32, f32) {
        let x = client_x - self.left;
        let y = client_y - self.top;
        let ndc_x = x / self.width * 2.0 - 1.0;
        let ndc_y = 1.0 - y / self.height * 2.0;
        (ndc_x, ndc_y)
    }

    /// Inverse of [`Viewport::to_ndc`]
    pub fn from_ndc(&self, ndc_x: f32, ndc_y: f32) -> (f32, f32) {
        let x = (ndc_x + 1.0) * 0.5 * self.width;
        let y = (1.0 - ndc_y) * 0.5 * self.height;
        (x + self.left, y + self.top)
    }
}

/// Build the world-space pick ray under a pointer position
///
/// # Panics
/// Panics if `projection * camera_inverse` is singular. A valid perspective
/// camera never produces one; use [`try_unproject_pointer`] to propagate
/// the error instead.
pub fn unproject_pointer(screen_x: f32, screen_y: f32, viewport: &Viewport, camera: &CameraState) -> Ray {
    try_unproject_pointer(screen_x, screen_y, viewport, camera)
        .expect("Failed to invert view-projection matrix")
}

/// Fallible variant of [`unproject_pointer`]
pub fn try_unproject_pointer(
    screen_x: f32,
    screen_y: f32,
    viewport: &Viewport,
    camera: &CameraState,
) -> Result<Ray, GeometryError> {
    let (ndc_x, ndc_y) = viewport.to_ndc(screen_x, screen_y);
    let inverse = camera.inverse_view_projection()?;
    let ray = unproject_ndc(ndc_x, ndc_y, &inverse);
    log::trace!("pointer ({screen_x}, {screen_y}) -> ndc ({ndc_x}, {ndc_y}) -> {ray:?}");
    Ok(ray)
}

/// Unproject an NDC position through a clip-to-world matrix
pub fn unproject_ndc(ndc_x: f32, ndc_y: f32, inverse_view_projection: &Mat4) -> Ray {
    // 4D homogeneous clip coordinates on the near and far planes
    let near = inverse_view_projection * Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
    let far = inverse_view_projection * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

    Ray::new(perspective_divide(&near), perspective_divide(&far))
}

/// Client coordinates at which `point` is drawn
///
/// Returns `None` for points behind the camera.
pub fn project_to_screen(point: Vec3, viewport: &Viewport, camera: &CameraState) -> Option<(f32, f32)> {
    let clip = camera.view_projection() * Vec4::new(point.x, point.y, point.z, 1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = perspective_divide(&clip);
    Some(viewport.from_ndc(ndc.x, ndc.y))
}

fn perspective_divide(h: &Vec4) -> Vec3 {
    Vec3::new(h.x / h.w, h.y / h.w, h.z / h.w)
}
