//! Theme sides

use vitrine_stage::contract::{class, gradient, id};

/// One of the two selectable themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Esquerdo,
    Direito,
}

impl Side {
    /// Root theme class for this side.
    pub fn class(&self) -> &'static str {
        match self {
            Side::Esquerdo => class::TEMA_ESQUERDO,
            Side::Direito => class::TEMA_DIREITO,
        }
    }

    /// Value stored in the root `currentTheme` attribute.
    pub fn attr_value(&self) -> &'static str {
        match self {
            Side::Esquerdo => "esquerdo",
            Side::Direito => "direito",
        }
    }

    /// Parse a `currentTheme` attribute value.
    pub fn from_attr_value(value: &str) -> Option<Side> {
        match value {
            "esquerdo" => Some(Side::Esquerdo),
            "direito" => Some(Side::Direito),
            _ => None,
        }
    }

    /// Slide class applied to BOTH figures for this selection. The slide
    /// is symmetric, not mirrored: choosing the left theme slides both
    /// figures out to the right.
    pub fn slide_class(&self) -> &'static str {
        match self {
            Side::Esquerdo => class::SLIDE_OUT_RIGHT,
            Side::Direito => class::SLIDE_OUT_LEFT,
        }
    }

    /// Target for the first gradient stop when this side is chosen.
    pub fn first_stop_target(&self) -> f32 {
        match self {
            Side::Esquerdo => gradient::EDGE_LOW_PERCENT,
            Side::Direito => gradient::EDGE_HIGH_PERCENT,
        }
    }

    /// The theme section this side reveals.
    pub fn section_name(&self) -> &'static str {
        match self {
            Side::Esquerdo => id::WOLVERINE_TEMA,
            Side::Direito => id::DEADPOOL_TEMA,
        }
    }

    pub fn other(&self) -> Side {
        match self {
            Side::Esquerdo => Side::Direito,
            Side::Direito => Side::Esquerdo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_are_symmetric_not_mirrored() {
        assert_eq!(Side::Esquerdo.slide_class(), class::SLIDE_OUT_RIGHT);
        assert_eq!(Side::Direito.slide_class(), class::SLIDE_OUT_LEFT);
    }

    #[test]
    fn first_stop_targets_avoid_gradient_collapse() {
        assert_eq!(Side::Esquerdo.first_stop_target(), 0.1);
        assert_eq!(Side::Direito.first_stop_target(), 99.9);
    }

    #[test]
    fn attr_round_trip() {
        for side in [Side::Esquerdo, Side::Direito] {
            assert_eq!(Side::from_attr_value(side.attr_value()), Some(side));
        }
        assert_eq!(Side::from_attr_value("bogus"), None);
    }
}
