//! # Kitchen Configuration
//!
//! Layout of the kitchen as seen by the interaction layer: which boxes are
//! solid, where the cutting board and pot sit, where the ingredients start in
//! each stage, and the drag/gravity constants.
//!
//! Placements are written the way scene code builds them, as a scale followed
//! by a translation in local (pre-scale) units:
//!
//! ```toml
//! [cutting_board]
//! scale = [1.2, 0.2, 1.6]
//! offset = [-7.0, 21.0, 5.5]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::foundation::math::Vec3;
use crate::kitchen::Ingredient;
use crate::physics::{AxisAlignedPlacement, Plane};

/// `scale(scale) * translation(offset)` placement as written in config files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementSpec {
    /// Half-extents of the unit cube
    pub scale: Vec3,
    /// Translation applied after the scale, in local units
    pub offset: Vec3,
}

impl PlacementSpec {
    /// Create a placement spec
    pub fn new(scale: Vec3, offset: Vec3) -> Self {
        Self { scale, offset }
    }

    /// Resolve into a world placement
    pub fn placement(&self) -> AxisAlignedPlacement {
        AxisAlignedPlacement::new(self.scale, self.offset)
    }
}

/// A named solid box that falling ingredients come to rest on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticCollider {
    /// Name used in log output
    pub name: String,
    /// Where the box sits
    pub placement: PlacementSpec,
}

impl StaticCollider {
    /// Create a named collider
    pub fn new(name: impl Into<String>, placement: PlacementSpec) -> Self {
        Self {
            name: name.into(),
            placement,
        }
    }
}

/// Starting placement of every ingredient for one stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngredientLayout {
    /// Onion placement
    pub onion: PlacementSpec,
    /// Tofu placement
    pub tofu: PlacementSpec,
    /// Kimchi placement
    pub kimchi: PlacementSpec,
}

impl IngredientLayout {
    /// Placement spec of one ingredient
    pub fn get(&self, ingredient: Ingredient) -> PlacementSpec {
        match ingredient {
            Ingredient::Onion => self.onion,
            Ingredient::Tofu => self.tofu,
            Ingredient::Kimchi => self.kimchi,
        }
    }

    /// Countertop layout used while prepping
    pub fn prep() -> Self {
        Self {
            onion: PlacementSpec::new(Vec3::new(0.4, 0.35, 0.4), Vec3::new(-26.0, 12.5, 26.0)),
            tofu: PlacementSpec::new(Vec3::new(0.4, 0.4, 0.6), Vec3::new(-26.0, 11.0, 14.0)),
            kimchi: PlacementSpec::new(Vec3::new(0.6, 0.4, 0.8), Vec3::new(-16.0, 11.0, 7.0)),
        }
    }

    /// Stove-side layout used while cooking
    pub fn cooking() -> Self {
        Self {
            onion: PlacementSpec::new(Vec3::new(0.4, 0.35, 0.4), Vec3::new(-10.0, 12.5, 5.0)),
            tofu: PlacementSpec::new(Vec3::new(0.4, 0.4, 0.6), Vec3::new(-10.0, 11.0, 0.0)),
            kimchi: PlacementSpec::new(Vec3::new(0.6, 0.4, 0.8), Vec3::new(-4.0, 11.0, 0.0)),
        }
    }
}

/// Everything the interaction session needs to know about the kitchen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenConfig {
    /// Plane the held ingredient is dragged along
    pub interaction_plane: Plane,
    /// Local offset applied to a held ingredient so it hovers while dragged
    pub lift: Vec3,
    /// Local offset applied per gravity frame
    pub gravity_step: Vec3,
    /// Box an ingredient must touch to be chopped
    pub cutting_board: PlacementSpec,
    /// Box that swallows ingredients dropped into the pot
    pub pot_bottom: PlacementSpec,
    /// Ingredient placements at the start of the prep stage
    pub prep_layout: IngredientLayout,
    /// Ingredient placements once the cooking stage begins
    pub cooking_layout: IngredientLayout,
    /// Solid boxes that stop falling ingredients
    pub colliders: Vec<StaticCollider>,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        let cutting_board = PlacementSpec::new(Vec3::new(1.2, 0.2, 1.6), Vec3::new(-7.0, 21.0, 5.5));
        Self {
            interaction_plane: Plane::new(Vec3::new(6.0, 4.0, 8.0), Vec3::y()),
            lift: Vec3::new(0.0, 3.0, 0.0),
            gravity_step: Vec3::new(0.0, -0.5, 0.0),
            cutting_board,
            // Centred at (2.5, 4.0, 1.5) on top of the back-left burner
            pot_bottom: PlacementSpec::new(
                Vec3::new(1.19, 1.2, 1.19),
                Vec3::new(2.5 / 1.19, 4.0 / 1.2, 1.5 / 1.19),
            ),
            prep_layout: IngredientLayout::prep(),
            cooking_layout: IngredientLayout::cooking(),
            colliders: vec![
                StaticCollider::new(
                    "countertop",
                    PlacementSpec::new(Vec3::new(3.0, 4.0, 8.0), Vec3::new(-3.0, 0.0, 0.625)),
                ),
                StaticCollider::new("stove", PlacementSpec::new(Vec3::new(6.0, 4.0, 3.0), Vec3::zeros())),
                StaticCollider::new(
                    "plating",
                    PlacementSpec::new(Vec3::new(6.0, 4.0, 3.0), Vec3::new(2.0, 0.0, 0.0)),
                ),
                StaticCollider::new(
                    "back wall",
                    PlacementSpec::new(Vec3::new(30.0, 30.0, 1.0), Vec3::new(0.0, 0.0, -5.0)),
                ),
                StaticCollider::new(
                    "side wall",
                    PlacementSpec::new(Vec3::new(1.0, 30.0, 30.0), Vec3::new(-13.0, 0.0, 0.0)),
                ),
                StaticCollider::new(
                    "floor",
                    PlacementSpec::new(Vec3::new(30.0, 1.0, 30.0), Vec3::new(0.0, -6.0, 0.0)),
                ),
                StaticCollider::new("cutting board", cutting_board),
            ],
        }
    }
}

impl Config for KitchenConfig {}

impl KitchenConfig {
    /// Reject layouts the box algebra cannot represent
    ///
    /// Every scale component must be strictly positive: zero marks a consumed
    /// object and negative scales invert the box. The interaction plane needs
    /// a non-zero normal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut placements: Vec<(String, PlacementSpec)> = vec![
            ("cutting_board".to_string(), self.cutting_board),
            ("pot_bottom".to_string(), self.pot_bottom),
        ];
        for ingredient in Ingredient::ALL {
            placements.push((format!("prep_layout.{ingredient}"), self.prep_layout.get(ingredient)));
            placements.push((format!("cooking_layout.{ingredient}"), self.cooking_layout.get(ingredient)));
        }
        placements.extend(
            self.colliders
                .iter()
                .map(|collider| (format!("colliders.{}", collider.name), collider.placement)),
        );

        for (name, spec) in &placements {
            if spec.scale.iter().any(|s| !(s.is_finite() && *s > 0.0)) {
                return Err(ConfigError::Invalid(format!(
                    "{name}: scale must be positive and finite, got {:?}",
                    spec.scale
                )));
            }
            if spec.offset.iter().any(|o| !o.is_finite()) {
                return Err(ConfigError::Invalid(format!("{name}: offset must be finite")));
            }
        }

        if self.interaction_plane.normal.norm_squared() == 0.0 {
            return Err(ConfigError::Invalid("interaction_plane: normal is zero".to_string()));
        }
        Ok(())
    }

    /// Load and validate a config file
    pub fn load_validated(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// World placements of the static colliders, in declaration order
    pub fn collider_placements(&self) -> Vec<AxisAlignedPlacement> {
        self.colliders.iter().map(|c| c.placement.placement()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;
    use crate::physics::AxisAlignedBounds;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_valid() {
        KitchenConfig::default().validate().unwrap();
    }

    #[test]
    fn test_pot_bottom_center() {
        let pot = KitchenConfig::default().pot_bottom.placement();
        assert_relative_eq!(pot.bounds().center(), Vec3::new(2.5, 4.0, 1.5), epsilon = 1e-5);
        assert_relative_eq!(pot.bounds().half_extents(), Vec3::new(1.19, 1.2, 1.19), epsilon = 1e-5);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = KitchenConfig::default();
        let text = config.to_string_as(ConfigFormat::Toml).unwrap();
        let parsed = KitchenConfig::from_str_as(&text, ConfigFormat::Toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let config = KitchenConfig::default();
        let text = config.to_string_as(ConfigFormat::Ron).unwrap();
        let parsed = KitchenConfig::from_str_as(&text, ConfigFormat::Ron).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("kitchen_config_{}.toml", std::process::id()));
        let mut config = KitchenConfig::default();
        config.gravity_step = Vec3::new(0.0, -0.25, 0.0);

        config.save_to_file(&path).unwrap();
        let loaded = KitchenConfig::load_validated(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.gravity_step, Vec3::new(0.0, -0.25, 0.0));
    }

    #[test]
    fn test_unsupported_extension() {
        match KitchenConfig::load_from_file("kitchen.yaml") {
            Err(ConfigError::UnsupportedFormat(path)) => assert!(path.ends_with("kitchen.yaml")),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        let mut config = KitchenConfig::default();
        config.colliders[1].placement.scale.y = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("colliders.stove"), "{err}");
    }

    #[test]
    fn test_zero_plane_normal_is_rejected() {
        let mut config = KitchenConfig::default();
        config.interaction_plane.normal = Vec3::zeros();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = KitchenConfig::from_str_as("lift = \"up\"", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
