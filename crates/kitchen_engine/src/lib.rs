//! # Kitchen Engine
//!
//! Interaction core for a 3D cooking scene: every object is a unit cube placed
//! by a scale + translation matrix, and collision and picking are derived
//! directly from that matrix.
//!
//! ## Features
//!
//! - **Box Extraction**: World AABBs recovered from placement matrices
//! - **Collision**: Closed-interval overlap tests and static sweeps
//! - **Picking**: Pointer unprojection with ray/box and ray/plane tests
//! - **Kitchen Session**: Drag, gravity, chopping, stages and scoring
//! - **Configuration**: Kitchen layouts loaded from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kitchen_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     kitchen_engine::foundation::logging::init();
//!
//!     let mut session = KitchenSession::new(KitchenConfig::default());
//!     let viewport = Viewport::new(1280.0, 720.0);
//!     let camera = CameraState::kitchen_overview(viewport.aspect_ratio());
//!
//!     session.toggle_move();
//!     session.handle_pointer(PointerEvent::Down { x: 420.0, y: 380.0 }, &viewport, &camera)?;
//!     session.handle_pointer(PointerEvent::Up, &viewport, &camera)?;
//!     for _frame in 0..60 {
//!         session.step();
//!     }
//!     println!("score: {}", session.score());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod camera;
pub mod config;
pub mod core;
pub mod foundation;
pub mod input;
pub mod kitchen;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        camera::CameraState,
        config::{Config, ConfigError, ConfigFormat},
        core::KitchenConfig,
        foundation::math::{Mat4, Mat4Ext, Vec3},
        input::{project_to_screen, unproject_pointer, PointerEvent, Viewport},
        kitchen::{Ingredient, KitchenSession, PickOutcome, Stage, StepOutcome, ToolMode},
        physics::{
            collision::{extract_box, intersect_ray_box, intersect_ray_plane},
            is_colliding,
            Aabb,
            AxisAlignedBounds,
            AxisAlignedPlacement,
            GeometryError,
            Plane,
            Ray,
        },
    };
}
