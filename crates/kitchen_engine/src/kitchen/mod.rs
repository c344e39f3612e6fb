//! Kitchen interaction layer
//!
//! Ties picking, dragging and gravity together into the recipe flow: chop
//! ingredients on the cutting board, drop them into the pot, get scored.

pub mod ingredient;
pub mod session;

pub use ingredient::{Ingredient, IngredientState};
pub use session::{HeldIngredient, KitchenSession, PickOutcome, Stage, StepOutcome, ToolMode};
