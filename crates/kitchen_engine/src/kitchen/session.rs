//! Interaction session: picking, dragging, gravity and scoring
//!
//! All mutable interaction state lives in [`KitchenSession`] and is updated
//! through `&mut self` from pointer events and per-frame [`KitchenSession::step`]
//! calls. Nothing is global.

use crate::camera::CameraState;
use crate::core::config::KitchenConfig;
use crate::foundation::math::Vec3;
use crate::input::{try_unproject_pointer, PointerEvent, Viewport};
use crate::physics::{blocking_collider, is_colliding, AxisAlignedPlacement, GeometryError, Ray};

use super::ingredient::{Ingredient, IngredientState};

/// Which tool the pointer currently drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Clicks only report what was hit
    #[default]
    Idle,
    /// Clicks pick up ingredients
    Move,
    /// Clicks chop ingredients lying on the cutting board
    Chop,
}

/// Phase of the recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Ingredients on the countertop next to the cutting board
    #[default]
    Prep,
    /// Ingredients beside the stove, ready for the pot
    Cooking,
    /// Dish is served and scored
    Plating,
}

/// An ingredient currently attached to the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeldIngredient {
    /// What is being held
    pub ingredient: Ingredient,
    /// Placement at the moment it was picked up
    pub anchor: AxisAlignedPlacement,
    /// Interaction-plane point under the pointer at pick time
    pub grab_point: Option<Vec3>,
    /// Interaction-plane point under the pointer at the last move
    pub drag_point: Option<Vec3>,
}

/// Result of a pointer press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Ray hit no ingredient
    Missed,
    /// Ingredient hit with no tool selected
    Touched(Ingredient),
    /// Ingredient picked up for dragging
    Grabbed(Ingredient),
    /// Ingredient chopped on the cutting board
    Chopped(Ingredient),
    /// Chop attempted on an ingredient that is not on the board
    NotOnBoard(Ingredient),
}

impl PickOutcome {
    /// Ingredient under the pointer, if any
    pub fn ingredient(&self) -> Option<Ingredient> {
        match *self {
            Self::Missed => None,
            Self::Touched(i) | Self::Grabbed(i) | Self::Chopped(i) | Self::NotOnBoard(i) => Some(i),
        }
    }
}

/// Result of one gravity frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing falling, or the falling ingredient is still held
    Idle,
    /// Falling ingredient dropped by one gravity step
    Fell(Ingredient),
    /// Falling ingredient is supported by a static collider
    Resting {
        /// Ingredient at rest
        ingredient: Ingredient,
        /// Index of the supporting collider in the config
        collider: usize,
    },
    /// Falling ingredient landed in the pot and was consumed
    Consumed(Ingredient),
}

/// Interaction state for one play-through of the recipe
#[derive(Debug, Clone)]
pub struct KitchenSession {
    config: KitchenConfig,
    colliders: Vec<AxisAlignedPlacement>,
    cutting_board: AxisAlignedPlacement,
    pot_bottom: AxisAlignedPlacement,
    ingredients: [IngredientState; 3],
    mode: ToolMode,
    stage: Stage,
    held: Option<HeldIngredient>,
    falling: Option<Ingredient>,
    cooking_started: bool,
    final_score: Option<u8>,
}

impl KitchenSession {
    /// Start a session with the prep layout
    pub fn new(config: KitchenConfig) -> Self {
        let ingredients = Ingredient::ALL.map(|i| IngredientState::new(config.prep_layout.get(i).placement()));
        Self {
            colliders: config.collider_placements(),
            cutting_board: config.cutting_board.placement(),
            pot_bottom: config.pot_bottom.placement(),
            ingredients,
            mode: ToolMode::Idle,
            stage: Stage::Prep,
            held: None,
            falling: None,
            cooking_started: false,
            final_score: None,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &KitchenConfig {
        &self.config
    }

    /// Current tool
    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    /// Current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Ingredient attached to the pointer, if any
    pub fn held(&self) -> Option<&HeldIngredient> {
        self.held.as_ref()
    }

    /// Ingredient subject to gravity, if any
    pub fn falling(&self) -> Option<Ingredient> {
        self.falling
    }

    /// State of one ingredient
    pub fn ingredient(&self, ingredient: Ingredient) -> &IngredientState {
        &self.ingredients[ingredient.index()]
    }

    /// Current placement of one ingredient
    pub fn placement(&self, ingredient: Ingredient) -> AxisAlignedPlacement {
        self.ingredient(ingredient).placement
    }

    /// Toggle the move tool; turning it on turns chopping off
    pub fn toggle_move(&mut self) -> ToolMode {
        self.mode = if self.mode == ToolMode::Move { ToolMode::Idle } else { ToolMode::Move };
        log::debug!("tool mode: {:?}", self.mode);
        self.mode
    }

    /// Toggle the chop tool; turning it on turns moving off
    pub fn toggle_chop(&mut self) -> ToolMode {
        self.mode = if self.mode == ToolMode::Chop { ToolMode::Idle } else { ToolMode::Chop };
        log::debug!("tool mode: {:?}", self.mode);
        self.mode
    }

    /// Nearest ingredient whose box the ray enters
    fn pick(&self, ray: &Ray) -> Option<Ingredient> {
        Ingredient::ALL
            .into_iter()
            .filter_map(|i| {
                ray.box_entry_parameter(&self.ingredients[i.index()].placement)
                    .map(|t| (i, t))
            })
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
    }

    /// Handle a primary-button press along `ray`
    pub fn pointer_down(&mut self, ray: &Ray) -> PickOutcome {
        let Some(ingredient) = self.pick(ray) else {
            log::trace!("pointer down hit nothing");
            return PickOutcome::Missed;
        };

        match self.mode {
            ToolMode::Idle => PickOutcome::Touched(ingredient),
            ToolMode::Move => {
                let grab_point = self.config.interaction_plane.intersect_ray(ray);
                if grab_point.is_none() {
                    log::warn!("pick ray misses the interaction plane; {ingredient} cannot be dragged");
                }
                self.held = Some(HeldIngredient {
                    ingredient,
                    anchor: self.placement(ingredient),
                    grab_point,
                    drag_point: None,
                });
                self.falling = Some(ingredient);
                log::info!("picked up {ingredient}");
                PickOutcome::Grabbed(ingredient)
            }
            ToolMode::Chop => {
                let state = &mut self.ingredients[ingredient.index()];
                if is_colliding(&self.cutting_board, &state.placement) {
                    state.cut = true;
                    log::info!("chopped {ingredient}");
                    PickOutcome::Chopped(ingredient)
                } else {
                    log::debug!("{ingredient} is not on the cutting board");
                    PickOutcome::NotOnBoard(ingredient)
                }
            }
        }
    }

    /// Drag the held ingredient to follow `ray`; returns whether it moved
    pub fn pointer_move(&mut self, ray: &Ray) -> bool {
        let Some(held) = self.held.as_mut() else {
            return false;
        };
        held.drag_point = self.config.interaction_plane.intersect_ray(ray);

        let (Some(grab), Some(drag)) = (held.grab_point, held.drag_point) else {
            return false;
        };
        let placement = held.anchor.translated_local(self.config.lift + (drag - grab));
        let ingredient = held.ingredient;
        self.ingredients[ingredient.index()].placement = placement;
        log::trace!("dragging {ingredient} to {:?}", placement.translation);
        true
    }

    /// Release whatever is held
    pub fn pointer_up(&mut self) -> Option<Ingredient> {
        let released = self.held.take().map(|h| h.ingredient);
        if let Some(ingredient) = released {
            log::debug!("released {ingredient}");
        }
        released
    }

    /// Unproject a raw pointer event and dispatch it
    ///
    /// Returns the pick outcome for presses and `None` for moves and releases.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        viewport: &Viewport,
        camera: &CameraState,
    ) -> Result<Option<PickOutcome>, GeometryError> {
        match event {
            PointerEvent::Down { x, y } => {
                let ray = try_unproject_pointer(x, y, viewport, camera)?;
                Ok(Some(self.pointer_down(&ray)))
            }
            PointerEvent::Move { x, y } => {
                if self.held.is_some() {
                    let ray = try_unproject_pointer(x, y, viewport, camera)?;
                    self.pointer_move(&ray);
                }
                Ok(None)
            }
            PointerEvent::Up => {
                self.pointer_up();
                Ok(None)
            }
        }
    }

    /// Advance gravity by one frame
    pub fn step(&mut self) -> StepOutcome {
        if self.held.is_some() {
            return StepOutcome::Idle;
        }
        let Some(ingredient) = self.falling else {
            return StepOutcome::Idle;
        };

        let state = &mut self.ingredients[ingredient.index()];
        if is_colliding(&self.pot_bottom, &state.placement) {
            state.placement = state.placement.consumed();
            state.added = true;
            self.falling = None;
            log::info!("{ingredient} dropped into the pot");
            return StepOutcome::Consumed(ingredient);
        }

        if let Some(collider) = blocking_collider(&state.placement, &self.colliders) {
            log::trace!("{ingredient} resting on {}", self.config.colliders[collider].name);
            return StepOutcome::Resting { ingredient, collider };
        }

        state.placement = state.placement.translated_local(self.config.gravity_step);
        StepOutcome::Fell(ingredient)
    }

    /// Move to `stage`
    ///
    /// The first entry into [`Stage::Cooking`] lays the ingredients out next
    /// to the stove. The first entry into [`Stage::Plating`] freezes the score.
    pub fn enter_stage(&mut self, stage: Stage) {
        match stage {
            Stage::Prep => {}
            Stage::Cooking if !self.cooking_started => {
                for ingredient in Ingredient::ALL {
                    self.ingredients[ingredient.index()].placement =
                        self.config.cooking_layout.get(ingredient).placement();
                }
                self.held = None;
                self.falling = None;
                self.cooking_started = true;
            }
            Stage::Cooking => {}
            Stage::Plating => {
                if self.final_score.is_none() {
                    let score = self.score();
                    self.final_score = Some(score);
                    log::info!("dish served with score {score}/6");
                }
            }
        }
        log::info!("entering stage {stage:?}");
        self.stage = stage;
    }

    /// One point per chopped ingredient plus one per ingredient in the pot
    pub fn score(&self) -> u8 {
        self.ingredients.iter().map(IngredientState::points).sum()
    }

    /// Score frozen when plating began
    pub fn final_score(&self) -> Option<u8> {
        self.final_score
    }
}

impl Default for KitchenSession {
    fn default() -> Self {
        Self::new(KitchenConfig::default())
    }
}
