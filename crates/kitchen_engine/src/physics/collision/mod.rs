//! Geometric primitives for collision and picking
//!
//! Everything here works on axis-aligned placements of the unit cube:
//! boxes are recomputed from the placement on every query and never cached.
//!
//! # Module Organization
//!
//! - [`aabb`] - Box extraction from scale + translation transforms
//! - [`primitives`] - Rays, planes and the slab / plane intersection tests
//!
//! # Key Types
//!
//! - [`Aabb`] - World-space box derived from a placement
//! - [`AxisAlignedPlacement`] - Checked scale + translation transform
//! - [`Ray`], [`Plane`] - Inputs to the intersection tests

pub mod aabb;
pub mod primitives;

use thiserror::Error;

// Re-export commonly used types
pub use aabb::{extract_box, Aabb, AxisAlignedBounds, AxisAlignedPlacement};
pub use primitives::{intersect_ray_box, intersect_ray_plane, Plane, Ray};

/// Errors raised when geometry preconditions are violated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Transform carries rotation, shear or a projective row
    #[error("transform is not a pure scale + translation: element ({row}, {col}) = {value}")]
    NotAxisAligned {
        /// Matrix row of the offending element
        row: usize,
        /// Matrix column of the offending element
        col: usize,
        /// Offending value
        value: f32,
    },

    /// `projection * camera_inverse` has no inverse
    #[error("camera/projection matrix product is not invertible")]
    SingularCamera,
}
