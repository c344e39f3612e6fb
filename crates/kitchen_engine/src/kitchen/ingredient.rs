//! Ingredients and their per-session state

use std::fmt;

use crate::physics::AxisAlignedPlacement;

/// The three ingredients that go into the stew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    /// Onion
    Onion,
    /// Tofu
    Tofu,
    /// Kimchi
    Kimchi,
}

impl Ingredient {
    /// Every ingredient, in pick order
    pub const ALL: [Ingredient; 3] = [Ingredient::Onion, Ingredient::Tofu, Ingredient::Kimchi];

    /// Stable index into per-ingredient arrays
    pub const fn index(self) -> usize {
        match self {
            Self::Onion => 0,
            Self::Tofu => 1,
            Self::Kimchi => 2,
        }
    }

    /// Lowercase display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Onion => "onion",
            Self::Tofu => "tofu",
            Self::Kimchi => "kimchi",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where an ingredient is and what has been done to it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientState {
    /// Current placement; zero scale once dropped into the pot
    pub placement: AxisAlignedPlacement,
    /// Chopped on the cutting board
    pub cut: bool,
    /// Dropped into the pot
    pub added: bool,
}

impl IngredientState {
    /// Fresh, uncut ingredient at `placement`
    pub fn new(placement: AxisAlignedPlacement) -> Self {
        Self {
            placement,
            cut: false,
            added: false,
        }
    }

    /// Points this ingredient contributes to the score
    pub fn points(&self) -> u8 {
        u8::from(self.cut) + u8::from(self.added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_match_all_order() {
        for (i, ingredient) in Ingredient::ALL.iter().enumerate() {
            assert_eq!(ingredient.index(), i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Ingredient::Kimchi.to_string(), "kimchi");
    }
}
