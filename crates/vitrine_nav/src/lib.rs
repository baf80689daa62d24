//! Vitrine Navigation Machine
//!
//! Cross-fades between the three top-level destinations: home (the
//! choice section or the active theme), about, and trailer. Each
//! transition marks the outgoing section `exiting`, waits out the
//! stylesheet's exit duration, then flips the hidden classes and reveals
//! the target. Navigating home while a theme is locked delegates to the
//! theme machine's reset path so the gradient state stays consistent
//! with section visibility.
//!
//! The machine is otherwise stateless: visibility is recomputed from
//! current class membership, and the only memory between commands is the
//! timers in flight plus a busy guard that rejects a second command
//! mid-transition.

use vitrine_core::TimerQueue;
use vitrine_stage::contract::{class, duration, id};
use vitrine_stage::Stage;
use vitrine_theme::ThemeMachine;
use vitrine_widgets::RingSlider;

/// Top-level navigation destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Inicio,
    Sobre,
    Trailer,
}

/// Timer-driven choreography cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavCue {
    /// A section's exit transition finished: hide it and clear the
    /// exiting mark (and its inline display, where the page does).
    SectionExited(&'static str),
    /// Home, with a locked theme: hand over to the theme reset.
    HomeRestore,
    /// Home, no theme: hide the theme sections and reveal the choice.
    HomeShowChoice,
    /// Home settle: a theme section's exit fully finished.
    HomeSettle(&'static str),
    /// About, phase two: finalize the outgoing hides, stagger the
    /// trailer exit, then reveal.
    AboutPhase2 { trailer_was_visible: bool },
    /// Reveal the about section.
    ShowAbout,
    /// Lazily initialize the ring slider after about enters.
    SliderInit,
    /// Trailer, phase two: finalize hides and reveal the trailer.
    TrailerPhase2,
}

pub struct NavMachine {
    timers: TimerQueue<NavCue>,
    busy: bool,
}

impl NavMachine {
    pub fn new() -> Self {
        Self {
            timers: TimerQueue::new(),
            busy: false,
        }
    }

    /// Whether a navigation transition is mid-flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Handle a navigation command. Returns whether it was accepted.
    ///
    /// A command issued while a previous transition is still running is
    /// rejected, mirroring the theme machine's animating guard.
    pub fn navigate(&mut self, stage: &mut Stage, tab: Tab, theme: &ThemeMachine) -> bool {
        if self.busy {
            tracing::debug!(?tab, "navigation ignored, transition in flight");
            return false;
        }
        tracing::debug!(?tab, "navigating");

        match tab {
            Tab::Inicio => self.begin_inicio(stage, theme),
            Tab::Sobre => self.begin_sobre(stage),
            Tab::Trailer => self.begin_trailer(stage),
        }

        self.busy = true;
        true
    }

    /// Advance timers by one frame, running due choreography steps.
    pub fn tick(
        &mut self,
        stage: &mut Stage,
        theme: &mut ThemeMachine,
        ring: &mut RingSlider,
        dt_ms: f64,
    ) {
        for cue in self.timers.advance(dt_ms) {
            self.handle_cue(stage, theme, ring, cue);
        }
        if self.busy && self.timers.pending() == 0 {
            self.busy = false;
        }
    }

    // ========== Command starts ==========

    fn begin_inicio(&mut self, stage: &mut Stage, theme: &ThemeMachine) {
        for name in [id::SOBRE_TEMA, id::TRAILER_TEMA] {
            if let Some(section) = stage.lookup(name) {
                if !stage.has_class(section, class::HIDDEN) {
                    stage.add_class(section, class::EXITING);
                    self.timers
                        .schedule(duration::SECTION_EXIT_MS, NavCue::SectionExited(name));
                }
            }
        }

        // With a locked theme the plain section swap would desync the
        // gradient from the visible sections; the reset path owns both.
        if theme.current_theme().is_some() && theme.is_locked() {
            self.timers
                .schedule(duration::SECTION_EXIT_MS, NavCue::HomeRestore);
        } else {
            self.timers
                .schedule(duration::SECTION_EXIT_MS, NavCue::HomeShowChoice);
        }
    }

    fn begin_sobre(&mut self, stage: &mut Stage) {
        let trailer_was_visible = stage
            .lookup(id::TRAILER_TEMA)
            .map(|t| !stage.has_class(t, class::HIDDEN))
            .unwrap_or(false);

        if let Some(choice) = stage.lookup(id::ESCOLHA_TEMA) {
            if !stage.has_class(choice, class::HIDDEN) {
                stage.add_class(choice, class::EXITING);
            }
        }
        for name in [id::WOLVERINE_TEMA, id::DEADPOOL_TEMA] {
            if let Some(section) = stage.lookup(name) {
                if !stage.has_class(section, class::HIDDEN) {
                    stage.add_class(section, class::HIDDEN);
                    stage.remove_class(section, class::EXIT_COMPLETE);
                }
            }
        }

        self.timers.schedule(
            duration::SECTION_EXIT_SETTLE_MS,
            NavCue::AboutPhase2 { trailer_was_visible },
        );
    }

    fn begin_trailer(&mut self, stage: &mut Stage) {
        if let Some(choice) = stage.lookup(id::ESCOLHA_TEMA) {
            if !stage.has_class(choice, class::HIDDEN) {
                stage.add_class(choice, class::EXITING);
            }
        }
        for name in [id::WOLVERINE_TEMA, id::DEADPOOL_TEMA] {
            if let Some(section) = stage.lookup(name) {
                if !stage.has_class(section, class::HIDDEN) {
                    stage.add_class(section, class::HIDDEN);
                    stage.remove_class(section, class::EXIT_COMPLETE);
                }
            }
        }
        if let Some(sobre) = stage.lookup(id::SOBRE_TEMA) {
            if !stage.has_class(sobre, class::HIDDEN) {
                stage.add_class(sobre, class::EXITING);
                self.timers.schedule(
                    duration::SECTION_EXIT_MS,
                    NavCue::SectionExited(id::SOBRE_TEMA),
                );
            }
        }

        self.timers
            .schedule(duration::SECTION_EXIT_SETTLE_MS, NavCue::TrailerPhase2);
    }

    // ========== Cue handling ==========

    fn handle_cue(
        &mut self,
        stage: &mut Stage,
        theme: &mut ThemeMachine,
        ring: &mut RingSlider,
        cue: NavCue,
    ) {
        match cue {
            NavCue::SectionExited(name) => {
                if let Some(section) = stage.lookup(name) {
                    stage.add_class(section, class::HIDDEN);
                    stage.remove_class(section, class::EXITING);
                    if let Some(el) = stage.element_mut(section) {
                        el.set_display(None);
                    }
                }
            }
            NavCue::HomeRestore => {
                theme.reset(stage);
            }
            NavCue::HomeShowChoice => {
                for name in [id::WOLVERINE_TEMA, id::DEADPOOL_TEMA] {
                    if let Some(section) = stage.lookup(name) {
                        stage.add_class(section, class::HIDDEN);
                        stage.remove_class(section, class::EXIT_COMPLETE);
                        self.timers.schedule(
                            duration::SECTION_EXIT_SETTLE_MS,
                            NavCue::HomeSettle(name),
                        );
                    }
                }
                if let Some(choice) = stage.lookup(id::ESCOLHA_TEMA) {
                    stage.remove_class(choice, class::HIDDEN);
                    stage.remove_class(choice, class::EXIT_COMPLETE);
                    if let Some(el) = stage.element_mut(choice) {
                        el.set_opacity(None);
                    }
                }
            }
            NavCue::HomeSettle(name) => {
                if let Some(section) = stage.lookup(name) {
                    stage.add_class(section, class::EXIT_COMPLETE);
                }
            }
            NavCue::AboutPhase2 { trailer_was_visible } => {
                if let Some(choice) = stage.lookup(id::ESCOLHA_TEMA) {
                    stage.add_class(choice, class::HIDDEN);
                    stage.remove_class(choice, class::EXITING);
                }
                for name in [id::WOLVERINE_TEMA, id::DEADPOOL_TEMA] {
                    if let Some(section) = stage.lookup(name) {
                        stage.add_class(section, class::EXIT_COMPLETE);
                    }
                }

                let reveal_delay = if trailer_was_visible {
                    if let Some(trailer) = stage.lookup(id::TRAILER_TEMA) {
                        stage.add_class(trailer, class::EXITING);
                        self.timers.schedule(
                            duration::SECTION_EXIT_MS,
                            NavCue::SectionExited(id::TRAILER_TEMA),
                        );
                    }
                    duration::ABOUT_AFTER_TRAILER_MS
                } else {
                    0
                };
                self.timers.schedule(reveal_delay, NavCue::ShowAbout);
            }
            NavCue::ShowAbout => {
                if let Some(sobre) = stage.lookup(id::SOBRE_TEMA) {
                    stage.remove_class(sobre, class::HIDDEN);
                    stage.remove_class(sobre, class::EXITING);
                    if let Some(el) = stage.element_mut(sobre) {
                        el.set_display(Some("flex"));
                    }
                    self.timers
                        .schedule(duration::SLIDER_INIT_DELAY_MS, NavCue::SliderInit);
                }
            }
            NavCue::SliderInit => {
                tracing::debug!("initializing ring slider");
                ring.initialize(stage);
            }
            NavCue::TrailerPhase2 => {
                if let Some(choice) = stage.lookup(id::ESCOLHA_TEMA) {
                    stage.add_class(choice, class::HIDDEN);
                    stage.remove_class(choice, class::EXITING);
                }
                for name in [id::WOLVERINE_TEMA, id::DEADPOOL_TEMA] {
                    if let Some(section) = stage.lookup(name) {
                        stage.add_class(section, class::EXIT_COMPLETE);
                    }
                }
                if let Some(trailer) = stage.lookup(id::TRAILER_TEMA) {
                    stage.remove_class(trailer, class::HIDDEN);
                    stage.remove_class(trailer, class::EXITING);
                    if let Some(el) = stage.element_mut(trailer) {
                        el.set_display(Some("flex"));
                    }
                }
            }
        }
    }
}

impl Default for NavMachine {
    fn default() -> Self {
        Self::new()
    }
}
