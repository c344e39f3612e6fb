//! Kitchen demo application
//!
//! Plays through the recipe headlessly: the tofu is dragged onto the cutting
//! board and chopped, every ingredient is dropped into the pot, and the dish
//! is served. Pointer events are generated in screen space and go through the
//! same unprojection path a windowed front end would use.
//!
//! Usage: `kitchen_demo [kitchen.toml|kitchen.ron]`

use std::path::PathBuf;

use kitchen_engine::foundation::logging;
use kitchen_engine::prelude::*;

/// Frames of gravity to run before giving up on an ingredient settling
const MAX_SETTLE_FRAMES: usize = 120;

/// Demo application errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Kitchen config could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Pointer could not be unprojected
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Point is behind the camera
    #[error("{0} is not visible from the camera")]
    OffScreen(Ingredient),

    /// Click landed on something else
    #[error("expected to pick {expected}, got {outcome:?}")]
    UnexpectedPick {
        /// Ingredient the gesture aimed at
        expected: Ingredient,
        /// What the session reported
        outcome: Option<PickOutcome>,
    },

    /// Pick ray never reached the interaction plane
    #[error("{0} was picked but cannot be dragged")]
    NotDraggable(Ingredient),
}

struct KitchenDemo {
    session: KitchenSession,
    viewport: Viewport,
    camera: CameraState,
}

impl KitchenDemo {
    fn new(config: KitchenConfig) -> Self {
        let viewport = Viewport::new(1280.0, 720.0);
        Self {
            session: KitchenSession::new(config),
            camera: CameraState::kitchen_overview(viewport.aspect_ratio()),
            viewport,
        }
    }

    fn screen_position(&self, point: Vec3, ingredient: Ingredient) -> Result<(f32, f32), AppError> {
        project_to_screen(point, &self.viewport, &self.camera).ok_or(AppError::OffScreen(ingredient))
    }

    fn send(&mut self, event: PointerEvent) -> Result<Option<PickOutcome>, AppError> {
        Ok(self.session.handle_pointer(event, &self.viewport, &self.camera)?)
    }

    /// Press and release over the centre of an ingredient
    fn click(&mut self, ingredient: Ingredient) -> Result<PickOutcome, AppError> {
        let center = self.session.placement(ingredient).bounds().center();
        let (x, y) = self.screen_position(center, ingredient)?;
        let outcome = self.send(PointerEvent::Down { x, y })?;
        self.send(PointerEvent::Up)?;

        match outcome {
            Some(outcome) if outcome.ingredient() == Some(ingredient) => Ok(outcome),
            other => Err(AppError::UnexpectedPick { expected: ingredient, outcome: other }),
        }
    }

    /// Pick up an ingredient and release it hovering over `target`
    fn drag_over(&mut self, ingredient: Ingredient, target: Vec3) -> Result<(), AppError> {
        let placement = self.session.placement(ingredient);
        let (x, y) = self.screen_position(placement.bounds().center(), ingredient)?;
        let outcome = self.send(PointerEvent::Down { x, y })?;
        if outcome != Some(PickOutcome::Grabbed(ingredient)) {
            return Err(AppError::UnexpectedPick { expected: ingredient, outcome });
        }

        let grab = self
            .session
            .held()
            .and_then(|held| held.grab_point)
            .ok_or(AppError::NotDraggable(ingredient))?;

        // Drag offsets are applied in the ingredient's local units
        let normal = self.session.config().interaction_plane.normal;
        let local = (target - placement.bounds().center()).component_div(&placement.scale);
        let along_plane = local - normal * (local.dot(&normal) / normal.norm_squared());

        let (x, y) = self.screen_position(grab + along_plane, ingredient)?;
        self.send(PointerEvent::Move { x, y })?;
        self.send(PointerEvent::Up)?;
        Ok(())
    }

    fn settle(&mut self) -> StepOutcome {
        let mut outcome = StepOutcome::Idle;
        for _ in 0..MAX_SETTLE_FRAMES {
            outcome = self.session.step();
            if !matches!(outcome, StepOutcome::Fell(_)) {
                break;
            }
        }
        outcome
    }

    fn run(&mut self) -> Result<u8, AppError> {
        log::info!("Prep: chopping the tofu");
        let board = self.session.config().cutting_board.placement().bounds().center();
        self.session.toggle_move();
        self.drag_over(Ingredient::Tofu, board)?;
        log::info!("tofu settled: {:?}", self.settle());

        self.session.toggle_chop();
        let chopped = self.click(Ingredient::Tofu)?;
        log::info!("chop result: {chopped:?}");

        log::info!("Cooking: filling the pot");
        self.session.enter_stage(Stage::Cooking);
        self.session.toggle_move();
        let pot = self.session.config().pot_bottom.placement().bounds().center();
        // The onion hides part of the tofu from this camera, so it goes first
        for ingredient in Ingredient::ALL {
            self.drag_over(ingredient, pot)?;
            log::info!("{ingredient}: {:?}", self.settle());
        }

        self.session.enter_stage(Stage::Plating);
        Ok(self.session.final_score().unwrap_or_else(|| self.session.score()))
    }
}

fn main() -> Result<(), AppError> {
    logging::init();
    log::info!("Starting kitchen demo");

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("Loading kitchen config from {}", path.display());
            KitchenConfig::load_validated(&path)?
        }
        None => KitchenConfig::default(),
    };

    let mut demo = KitchenDemo::new(config);
    match demo.run() {
        Ok(score) => {
            log::info!("Dish served, score {score}/6");
            Ok(())
        }
        Err(e) => {
            log::error!("Demo failed: {e}");
            Err(e)
        }
    }
}
