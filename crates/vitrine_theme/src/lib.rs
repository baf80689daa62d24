//! Vitrine Theme Machine
//!
//! The theme-selection state machine: `Idle` → `Animating` → `Locked` →
//! (on reset) → `Idle`. A selection drives two parallel gradient tweens
//! behind a completion barrier, swaps section visibility, and locks
//! further input until the explicit reset path reverses everything back
//! to the pristine baseline.

pub mod machine;
pub mod side;
pub mod state;

pub use machine::ThemeMachine;
pub use side::Side;
pub use state::ThemeSelectionState;
