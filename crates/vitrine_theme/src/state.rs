//! Theme selection state
//!
//! The machine owns this struct as the single source of truth; the same
//! facts are mirrored to the stage root's attributes because those are
//! the styling layer's view of the machine (the `currentTheme` /
//! `selectionLocked` / `animating` / `_themeInitialized` surface).

use crate::side::Side;

/// Explicit theme-selection state.
///
/// Invariants: `animating` disables all theme-switch input; `locked`
/// disables switching but not reset; a completed selection implies
/// `locked`. `initialized` gates whether the next tween without an
/// explicit start value begins at the 50% baseline or at the live
/// computed value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSelectionState {
    pub current: Option<Side>,
    pub animating: bool,
    pub locked: bool,
    pub initialized: bool,
}

impl ThemeSelectionState {
    /// Whether a selection input for `side` passes the guards.
    pub fn accepts_selection(&self, side: Side) -> bool {
        self.current != Some(side) && !self.locked && !self.animating
    }

    /// Whether the reset path is available.
    pub fn accepts_reset(&self) -> bool {
        self.current.is_some() && self.locked && !self.animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pristine_state_accepts_either_side() {
        let state = ThemeSelectionState::default();
        assert!(state.accepts_selection(Side::Esquerdo));
        assert!(state.accepts_selection(Side::Direito));
        assert!(!state.accepts_reset());
    }

    #[test]
    fn animating_blocks_selection() {
        let state = ThemeSelectionState {
            animating: true,
            ..Default::default()
        };
        assert!(!state.accepts_selection(Side::Esquerdo));
    }

    #[test]
    fn locked_blocks_selection_but_not_reset() {
        let state = ThemeSelectionState {
            current: Some(Side::Esquerdo),
            locked: true,
            ..Default::default()
        };
        assert!(!state.accepts_selection(Side::Direito));
        assert!(state.accepts_reset());
    }

    #[test]
    fn reset_requires_a_locked_selection() {
        let state = ThemeSelectionState {
            current: Some(Side::Esquerdo),
            locked: false,
            ..Default::default()
        };
        assert!(!state.accepts_reset());
    }
}
