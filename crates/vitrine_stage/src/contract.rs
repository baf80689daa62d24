//! The contract with the external styling layer
//!
//! Class names, element names, custom-property names, root attributes,
//! and transition durations are a protocol shared with the stylesheet.
//! They must stay byte-exact; a renamed class or a drifted duration
//! desynchronizes the visual layer from the state machines.

/// CSS class names toggled by the state machines.
pub mod class {
    pub const TEMA_ESQUERDO: &str = "tema-esquerdo";
    pub const TEMA_DIREITO: &str = "tema-direito";
    pub const ANIMATING: &str = "animating";
    pub const ANIMATIONS_COMPLETE: &str = "animations-complete";
    pub const HIDDEN: &str = "hidden";
    pub const EXITING: &str = "exiting";
    pub const EXIT_COMPLETE: &str = "exit-complete";
    pub const SLIDE_OUT_LEFT: &str = "slide-out-left";
    pub const SLIDE_OUT_RIGHT: &str = "slide-out-right";
    pub const VS_HIDDEN: &str = "vs-hidden";
    pub const H2_HIDDEN: &str = "h2-hidden";
    pub const IS_LEFT: &str = "is-left";
    pub const IS_CENTER: &str = "is-center";
    pub const IS_RIGHT: &str = "is-right";
}

/// Well-known element names.
pub mod id {
    pub const ESCOLHA_TEMA: &str = "escolha-tema";
    pub const WOLVERINE_TEMA: &str = "wolverine-tema";
    pub const DEADPOOL_TEMA: &str = "deadpool-tema";
    pub const SOBRE_TEMA: &str = "sobre-tema";
    pub const TRAILER_TEMA: &str = "trailer-tema";
    pub const RESET_ESCOLHA: &str = "resetEscolha";
    pub const VS: &str = "vs";
    pub const ESCOLHA_H2: &str = "escolha-h2";
    pub const FIGURE_LEFT: &str = "escolha-figure-left";
    pub const FIGURE_RIGHT: &str = "escolha-figure-right";
    pub const SLIDER: &str = "slider";
    pub const RING_NEXT: &str = "next";
    pub const RING_PREV: &str = "prev";
    pub const TRAILER_PREV: &str = "trailer-prev";
    pub const TRAILER_NEXT: &str = "trailer-next";

    /// Name of the n-th trailer carousel item.
    pub fn trailer_item(index: usize) -> String {
        format!("trailer-item-{index}")
    }

    /// Name of the n-th ring slider card.
    pub fn projetos_item(index: usize) -> String {
        format!("projetos-item-{index}")
    }
}

/// CSS custom properties written by the tween engine.
///
/// Both are percentage channels feeding the body gradient.
pub mod prop {
    pub const BG_PRIMEIRA_COR: &str = "--bg-primeira-cor";
    pub const BG_SEGUNDA_COR: &str = "--bg-segunda-cor";
}

/// State attributes on the root element.
///
/// This is the whole externally visible state surface of the theme
/// machine; values are either the documented string or absent.
pub mod attr {
    pub const CURRENT_THEME: &str = "currentTheme";
    pub const SELECTION_LOCKED: &str = "selectionLocked";
    pub const ANIMATING: &str = "animating";
    pub const THEME_INITIALIZED: &str = "_themeInitialized";

    pub const FLAG_SET: &str = "1";
}

/// Transition durations, in milliseconds.
///
/// Each constant mirrors a transition duration in the stylesheet and must
/// be kept in sync with it.
pub mod duration {
    /// Gradient-stop tween length.
    pub const TWEEN_MS: u64 = 350;
    /// Grace before the vs divider / heading lose true visibility.
    pub const HEADER_HIDE_GRACE_MS: u64 = 360;
    /// Section exit transition.
    pub const SECTION_EXIT_MS: u64 = 400;
    /// Section exit, settle phase.
    pub const SECTION_EXIT_SETTLE_MS: u64 = 420;
    /// Theme-section exit before `exit-complete` applies.
    pub const THEME_EXIT_COMPLETE_MS: u64 = 600;
    /// Input re-enable after load or reset.
    pub const INPUT_REENABLE_MS: u64 = 300;
    /// Press-and-hold rotation repeat.
    pub const HOLD_REPEAT_MS: u64 = 30;
    /// Micro-delay before removing a hidden class so a visibility
    /// restore is observed first.
    pub const VISIBILITY_RESTORE_MS: u64 = 20;
    /// Extra stagger before showing the about section when the trailer
    /// was visible.
    pub const ABOUT_AFTER_TRAILER_MS: u64 = 200;
    /// Lazy ring-slider initialization after the about section enters.
    pub const SLIDER_INIT_DELAY_MS: u64 = 100;
}

/// Gradient-stop targets for theme selection.
///
/// Tiny offsets from 0/100 keep the gradient from collapsing at the
/// extremes.
pub mod gradient {
    pub const BASELINE_PERCENT: f32 = 50.0;
    pub const EDGE_LOW_PERCENT: f32 = 0.1;
    pub const EDGE_HIGH_PERCENT: f32 = 99.9;
}
