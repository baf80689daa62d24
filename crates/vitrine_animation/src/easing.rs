//! Easing functions for animations

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    /// Symmetric quadratic ease-in-out; the engine default for gradient
    /// tweens.
    #[default]
    EaseInOutQuad,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseInQuad,
            Easing::EaseOutQuad,
            Easing::EaseInOutQuad,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn ease_in_out_quad_is_symmetric() {
        let e = Easing::EaseInOutQuad;
        assert_eq!(e.apply(0.5), 0.5);
        for i in 1..10 {
            let t = i as f32 / 20.0;
            let a = e.apply(t);
            let b = 1.0 - e.apply(1.0 - t);
            assert!((a - b).abs() < 1e-6, "asymmetric at t={t}");
        }
    }

    #[test]
    fn ease_in_out_quad_matches_piecewise_form() {
        let e = Easing::EaseInOutQuad;
        // First half is 2t², second half is -1 + (4 - 2t)t.
        assert!((e.apply(0.25) - 0.125).abs() < 1e-6);
        assert!((e.apply(0.75) - 0.875).abs() < 1e-6);
    }
}
