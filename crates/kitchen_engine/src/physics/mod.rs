//! Physics module for collision detection
//!
//! Closed-interval AABB overlap between placed unit cubes plus the ray
//! primitives used for pointer picking.

pub mod collision;
pub mod collision_system;

pub use collision::{
    Aabb,
    AxisAlignedBounds,
    AxisAlignedPlacement,
    GeometryError,
    Plane,
    Ray,
};
pub use collision_system::{blocking_collider, is_colliding};
