//! Input event surface
//!
//! Platform-agnostic input for the landing page's interactive controls.
//! The embedding layer (browser shell, test harness, demo script) maps
//! its native events onto these and feeds them to the engine, which
//! validates guard conditions before mutating any state.

/// The page's interactive controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlId {
    /// Left theme figure (click selects the left theme)
    ThemeLeft,
    /// Right theme figure
    ThemeRight,
    /// The reset-selection button
    ResetChoice,
    /// Navigation: home / choice tab
    NavInicio,
    /// Navigation: about tab
    NavSobre,
    /// Navigation: trailer tab
    NavTrailer,
    /// Ring slider surface (drag target)
    Slider,
    /// Ring slider hold-to-rotate buttons
    RingPrev,
    RingNext,
    /// Trailer carousel step buttons
    TrailerPrev,
    TrailerNext,
    /// A trailer carousel item, by index
    TrailerItem(usize),
}

/// A single input sample.
///
/// Pointer and touch variants carry only the horizontal coordinate the
/// ring slider consumes; nothing else on the page reads positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Click { target: ControlId },
    PointerDown { target: ControlId, x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    PointerEnter { target: ControlId },
    PointerLeave { target: ControlId },
    TouchStart { target: ControlId, x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
}
