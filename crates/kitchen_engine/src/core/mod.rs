//! Core kitchen data

pub mod config;

pub use config::{IngredientLayout, KitchenConfig, PlacementSpec, StaticCollider};
