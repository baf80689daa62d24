//! Theme selection machine
//!
//! Orchestrates the select → animate → lock → reset cycle: two parallel
//! gradient tweens behind a completion barrier, figure slides, the
//! vs/heading hide grace, section swaps, and the reset path that reverses
//! all of it. Every stage lookup is existence-checked; an absent element
//! skips its own step and nothing else.

use crate::side::Side;
use crate::state::ThemeSelectionState;
use rustc_hash::FxHashMap;
use vitrine_animation::{CompletionBarrier, PropertyAnimator};
use vitrine_core::{TimerId, TimerQueue};
use vitrine_stage::contract::{attr, class, duration, gradient, id, prop};
use vitrine_stage::{ElementId, Stage, Visibility};

/// Timer-driven choreography cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ThemeCue {
    /// The vs divider's hide transition finished; drop it from flow.
    VsHidden,
    /// The heading's hide transition finished; drop it from flow.
    HeadingHidden,
    /// Selection settled; hide the choice section.
    HideChoiceSection,
    /// The losing theme section's exit transition finished.
    LoserExitComplete(Side),
    /// Reset: theme-section exits settled, start the return tweens.
    ResetExitSettled,
    /// Reset: remove the vs hidden class after the visibility restore
    /// has been observed.
    VsRestore,
    /// Re-enable interaction after load or reset.
    InputReenable,
}

/// Which gradient stop a tween drives (completion token).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GradientStop {
    First,
    Second,
}

/// The transition the active barrier belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    Select(Side),
    Reset,
}

/// The theme selection state machine.
pub struct ThemeMachine {
    state: ThemeSelectionState,
    animator: PropertyAnimator<GradientStop>,
    timers: TimerQueue<ThemeCue>,
    /// Pending vs/heading hide-grace timers, keyed by element. Owned
    /// here, not stashed on the nodes.
    hide_timers: FxHashMap<ElementId, TimerId>,
    barrier: Option<CompletionBarrier>,
    pending: Option<Pending>,
}

impl ThemeMachine {
    pub fn new() -> Self {
        Self {
            state: ThemeSelectionState::default(),
            animator: PropertyAnimator::new(),
            timers: TimerQueue::new(),
            hide_timers: FxHashMap::default(),
            barrier: None,
            pending: None,
        }
    }

    pub fn state(&self) -> &ThemeSelectionState {
        &self.state
    }

    pub fn current_theme(&self) -> Option<Side> {
        self.state.current
    }

    pub fn is_animating(&self) -> bool {
        self.state.animating
    }

    pub fn is_locked(&self) -> bool {
        self.state.locked
    }

    /// Page-load baseline: never persist a theme across reloads, and
    /// re-enable interaction once the entry animations settle.
    pub fn on_load(&mut self, stage: &mut Stage) {
        let root = stage.root();
        stage.remove_class(root, class::TEMA_ESQUERDO);
        stage.remove_class(root, class::TEMA_DIREITO);
        self.timers
            .schedule(duration::INPUT_REENABLE_MS, ThemeCue::InputReenable);
    }

    /// Handle a selection input. Returns whether it was accepted.
    pub fn select(&mut self, stage: &mut Stage, side: Side) -> bool {
        if !self.state.accepts_selection(side) {
            tracing::debug!(?side, state = ?self.state, "selection ignored by guard");
            return false;
        }

        let root = stage.root();
        stage.remove_class(root, class::TEMA_ESQUERDO);
        stage.remove_class(root, class::TEMA_DIREITO);

        // Start values are read before the theme class lands so the
        // computed properties still reflect the outgoing state.
        let (from_first, from_second) = if self.state.initialized {
            (
                stage.percent_value(root, prop::BG_PRIMEIRA_COR),
                stage.percent_value(root, prop::BG_SEGUNDA_COR),
            )
        } else {
            self.state.initialized = true;
            stage.set_attr(root, attr::THEME_INITIALIZED, attr::FLAG_SET);
            (gradient::BASELINE_PERCENT, gradient::BASELINE_PERCENT)
        };

        stage.add_class(root, side.class());

        // Both figures slide the same direction.
        let slide = side.slide_class();
        for name in [id::FIGURE_LEFT, id::FIGURE_RIGHT] {
            if let Some(fig) = stage.lookup(name) {
                stage.remove_class(fig, class::SLIDE_OUT_LEFT);
                stage.remove_class(fig, class::SLIDE_OUT_RIGHT);
                stage.add_class(fig, slide);
            }
        }

        self.hide_with_grace(stage, id::VS, class::VS_HIDDEN, ThemeCue::VsHidden);
        self.hide_with_grace(stage, id::ESCOLHA_H2, class::H2_HIDDEN, ThemeCue::HeadingHidden);

        self.state.animating = true;
        stage.set_attr(root, attr::ANIMATING, attr::FLAG_SET);
        stage.add_class(root, class::ANIMATING);

        self.barrier = Some(CompletionBarrier::new(2));
        self.pending = Some(Pending::Select(side));

        self.animator.animate(
            stage,
            root,
            prop::BG_PRIMEIRA_COR,
            side.first_stop_target(),
            duration::TWEEN_MS,
            Some(from_first),
            GradientStop::First,
        );
        self.animator.animate(
            stage,
            root,
            prop::BG_SEGUNDA_COR,
            gradient::EDGE_LOW_PERCENT,
            duration::TWEEN_MS,
            Some(from_second),
            GradientStop::Second,
        );

        tracing::debug!(?side, "theme selection accepted");
        true
    }

    /// Handle the reset input. Returns whether it was accepted.
    pub fn reset(&mut self, stage: &mut Stage) -> bool {
        if !self.state.accepts_reset() {
            tracing::debug!(state = ?self.state, "reset ignored by guard");
            return false;
        }

        if let Some(btn) = stage.lookup(id::RESET_ESCOLHA) {
            if let Some(el) = stage.element_mut(btn) {
                el.set_disabled(true);
            }
        }

        let root = stage.root();
        stage.remove_class(root, class::ANIMATIONS_COMPLETE);

        // Trigger both theme sections' exit transitions first.
        for name in [id::WOLVERINE_TEMA, id::DEADPOOL_TEMA] {
            if let Some(section) = stage.lookup(name) {
                if !stage.has_class(section, class::HIDDEN) {
                    stage.add_class(section, class::HIDDEN);
                }
            }
        }

        self.timers
            .schedule(duration::THEME_EXIT_COMPLETE_MS, ThemeCue::ResetExitSettled);

        tracing::debug!("theme reset accepted");
        true
    }

    /// Advance timers and tweens by one frame.
    pub fn tick(&mut self, stage: &mut Stage, dt_ms: f64) {
        for cue in self.timers.advance(dt_ms) {
            self.handle_cue(stage, cue);
        }

        for stop in self.animator.tick(stage, dt_ms) {
            tracing::trace!(?stop, "gradient tween finished");
            let released = match self.barrier.as_mut() {
                Some(barrier) => barrier.arrive(),
                None => false,
            };
            if released {
                self.barrier = None;
                match self.pending.take() {
                    Some(Pending::Select(side)) => self.finish_selection(stage, side),
                    Some(Pending::Reset) => self.finish_reset(stage),
                    None => {}
                }
            }
        }
    }

    // ========== Choreography steps ==========

    /// Make an element visible, flush, start its hide transition, and
    /// arrange for true visibility removal after the transition grace.
    /// Re-entry cancels the pending grace timer first.
    fn hide_with_grace(
        &mut self,
        stage: &mut Stage,
        name: &'static str,
        hidden_class: &'static str,
        cue: ThemeCue,
    ) {
        let Some(target) = stage.lookup(name) else {
            return;
        };
        if let Some(el) = stage.element_mut(target) {
            el.set_visibility(Visibility::Inherit);
        }
        if let Some(pending) = self.hide_timers.remove(&target) {
            self.timers.cancel(pending);
        }
        stage.force_reflow(target);
        stage.add_class(target, hidden_class);
        let timer = self.timers.schedule(duration::HEADER_HIDE_GRACE_MS, cue);
        self.hide_timers.insert(target, timer);
    }

    fn finish_hide(&mut self, stage: &mut Stage, name: &'static str) {
        let Some(target) = stage.lookup(name) else {
            return;
        };
        if let Some(el) = stage.element_mut(target) {
            el.set_visibility(Visibility::Hidden);
        }
        self.hide_timers.remove(&target);
    }

    /// Cancel a pending hide grace and restore inline visibility.
    fn cancel_hide(&mut self, stage: &mut Stage, name: &'static str) {
        let Some(target) = stage.lookup(name) else {
            return;
        };
        if let Some(pending) = self.hide_timers.remove(&target) {
            self.timers.cancel(pending);
        }
        if let Some(el) = stage.element_mut(target) {
            el.set_visibility(Visibility::Inherit);
        }
    }

    fn handle_cue(&mut self, stage: &mut Stage, cue: ThemeCue) {
        match cue {
            ThemeCue::VsHidden => self.finish_hide(stage, id::VS),
            ThemeCue::HeadingHidden => self.finish_hide(stage, id::ESCOLHA_H2),
            ThemeCue::HideChoiceSection => {
                if let Some(section) = stage.lookup(id::ESCOLHA_TEMA) {
                    stage.add_class(section, class::HIDDEN);
                }
            }
            ThemeCue::LoserExitComplete(side) => {
                if let Some(section) = stage.lookup(side.section_name()) {
                    stage.add_class(section, class::EXIT_COMPLETE);
                }
            }
            ThemeCue::ResetExitSettled => self.begin_reset_tweens(stage),
            ThemeCue::VsRestore => {
                if let Some(vs) = stage.lookup(id::VS) {
                    stage.remove_class(vs, class::VS_HIDDEN);
                }
            }
            ThemeCue::InputReenable => {
                let root = stage.root();
                stage.add_class(root, class::ANIMATIONS_COMPLETE);
            }
        }
    }

    /// Both selection tweens finished: lock the theme and swap sections.
    fn finish_selection(&mut self, stage: &mut Stage, side: Side) {
        let root = stage.root();

        self.state.animating = false;
        stage.remove_attr(root, attr::ANIMATING);
        stage.remove_class(root, class::ANIMATING);

        self.state.current = Some(side);
        stage.set_attr(root, attr::CURRENT_THEME, side.attr_value());
        self.state.locked = true;
        stage.set_attr(root, attr::SELECTION_LOCKED, attr::FLAG_SET);

        // The choice section's exit animations get their grace before it
        // leaves the layout.
        self.timers
            .schedule(duration::HEADER_HIDE_GRACE_MS, ThemeCue::HideChoiceSection);

        if let Some(winner) = stage.lookup(side.section_name()) {
            stage.remove_class(winner, class::HIDDEN);
            stage.remove_class(winner, class::EXIT_COMPLETE);
        }
        let loser = side.other();
        if let Some(section) = stage.lookup(loser.section_name()) {
            stage.add_class(section, class::HIDDEN);
            self.timers.schedule(
                duration::THEME_EXIT_COMPLETE_MS,
                ThemeCue::LoserExitComplete(loser),
            );
        }

        if let Some(btn) = stage.lookup(id::RESET_ESCOLHA) {
            stage.remove_class(btn, class::HIDDEN);
        }

        tracing::debug!(?side, "theme locked");
    }

    /// Reset phase two: exits settled, figures restored, tweens back to
    /// the baseline.
    fn begin_reset_tweens(&mut self, stage: &mut Stage) {
        for name in [id::WOLVERINE_TEMA, id::DEADPOOL_TEMA] {
            if let Some(section) = stage.lookup(name) {
                stage.add_class(section, class::EXIT_COMPLETE);
            }
        }

        for name in [id::FIGURE_LEFT, id::FIGURE_RIGHT] {
            if let Some(fig) = stage.lookup(name) {
                stage.remove_class(fig, class::SLIDE_OUT_LEFT);
                stage.remove_class(fig, class::SLIDE_OUT_RIGHT);
                if let Some(el) = stage.element_mut(fig) {
                    el.restore_inline();
                }
            }
        }

        let root = stage.root();
        self.state.animating = true;
        stage.set_attr(root, attr::ANIMATING, attr::FLAG_SET);
        stage.add_class(root, class::ANIMATING);

        self.barrier = Some(CompletionBarrier::new(2));
        self.pending = Some(Pending::Reset);

        // Start values resolve from the live computed values; the theme
        // is still initialized at this point.
        self.animator.animate(
            stage,
            root,
            prop::BG_PRIMEIRA_COR,
            gradient::BASELINE_PERCENT,
            duration::TWEEN_MS,
            None,
            GradientStop::First,
        );
        self.animator.animate(
            stage,
            root,
            prop::BG_SEGUNDA_COR,
            gradient::BASELINE_PERCENT,
            duration::TWEEN_MS,
            None,
            GradientStop::Second,
        );

        // The vs divider comes back early: visibility first, then the
        // hidden class once the restore has been observed.
        self.cancel_hide(stage, id::VS);
        self.timers
            .schedule(duration::VISIBILITY_RESTORE_MS, ThemeCue::VsRestore);

        tracing::debug!("reset tweens started");
    }

    /// Both reset tweens finished: back to the pristine baseline.
    fn finish_reset(&mut self, stage: &mut Stage) {
        let root = stage.root();

        stage.remove_class(root, class::TEMA_ESQUERDO);
        stage.remove_class(root, class::TEMA_DIREITO);

        self.state.current = None;
        stage.remove_attr(root, attr::CURRENT_THEME);
        self.state.locked = false;
        stage.remove_attr(root, attr::SELECTION_LOCKED);
        self.state.animating = false;
        stage.remove_attr(root, attr::ANIMATING);
        stage.remove_class(root, class::ANIMATING);
        self.state.initialized = false;
        stage.remove_attr(root, attr::THEME_INITIALIZED);

        for name in [id::FIGURE_LEFT, id::FIGURE_RIGHT] {
            if let Some(fig) = stage.lookup(name) {
                stage.remove_class(fig, class::SLIDE_OUT_LEFT);
                stage.remove_class(fig, class::SLIDE_OUT_RIGHT);
                if let Some(el) = stage.element_mut(fig) {
                    el.restore_inline();
                    el.set_transform(None);
                }
            }
        }

        if let Some(section) = stage.lookup(id::ESCOLHA_TEMA) {
            stage.remove_class(section, class::HIDDEN);
        }

        self.cancel_hide(stage, id::VS);
        if let Some(vs) = stage.lookup(id::VS) {
            stage.remove_class(vs, class::VS_HIDDEN);
        }
        self.cancel_hide(stage, id::ESCOLHA_H2);
        if let Some(h2) = stage.lookup(id::ESCOLHA_H2) {
            stage.remove_class(h2, class::H2_HIDDEN);
        }

        if let Some(btn) = stage.lookup(id::RESET_ESCOLHA) {
            stage.add_class(btn, class::HIDDEN);
            if let Some(el) = stage.element_mut(btn) {
                el.set_disabled(false);
            }
        }

        self.timers
            .schedule(duration::INPUT_REENABLE_MS, ThemeCue::InputReenable);

        tracing::debug!("theme reset complete");
    }
}

impl Default for ThemeMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_stage::landing_stage;

    const STEP_MS: f64 = 10.0;

    fn advance(machine: &mut ThemeMachine, stage: &mut Stage, ms: u64) {
        for _ in 0..(ms as f64 / STEP_MS) as u64 {
            machine.tick(stage, STEP_MS);
        }
    }

    fn setup() -> (ThemeMachine, Stage) {
        let mut stage = landing_stage().unwrap();
        let mut machine = ThemeMachine::new();
        machine.on_load(&mut stage);
        advance(&mut machine, &mut stage, 300);
        (machine, stage)
    }

    #[test]
    fn load_baseline_enables_interaction_after_grace() {
        let mut stage = landing_stage().unwrap();
        let mut machine = ThemeMachine::new();
        machine.on_load(&mut stage);

        let root = stage.root();
        assert!(!stage.has_class(root, class::ANIMATIONS_COMPLETE));
        advance(&mut machine, &mut stage, 300);
        assert!(stage.has_class(root, class::ANIMATIONS_COMPLETE));
    }

    #[test]
    fn selection_runs_to_locked_state() {
        let (mut machine, mut stage) = setup();
        let root = stage.root();

        assert!(machine.select(&mut stage, Side::Esquerdo));
        assert!(machine.is_animating());
        assert!(stage.has_class(root, class::TEMA_ESQUERDO));
        assert!(stage.has_class(root, class::ANIMATING));
        assert_eq!(stage.element(root).unwrap().attr(attr::ANIMATING), Some("1"));

        advance(&mut machine, &mut stage, 360);

        assert!(!machine.is_animating());
        assert_eq!(machine.current_theme(), Some(Side::Esquerdo));
        assert!(machine.is_locked());
        assert_eq!(
            stage.element(root).unwrap().property(prop::BG_PRIMEIRA_COR),
            Some("0.1%")
        );
        assert_eq!(
            stage.element(root).unwrap().property(prop::BG_SEGUNDA_COR),
            Some("0.1%")
        );

        let winner = stage.lookup(id::WOLVERINE_TEMA).unwrap();
        assert!(!stage.has_class(winner, class::HIDDEN));
        let reset_btn = stage.lookup(id::RESET_ESCOLHA).unwrap();
        assert!(!stage.has_class(reset_btn, class::HIDDEN));
    }

    #[test]
    fn first_stop_trends_monotonically_toward_target() {
        let (mut machine, mut stage) = setup();
        let root = stage.root();

        machine.select(&mut stage, Side::Esquerdo);

        let mut prev = 50.0;
        for _ in 0..35 {
            machine.tick(&mut stage, STEP_MS);
            let value = stage.percent_value(root, prop::BG_PRIMEIRA_COR);
            assert!(value <= prev + 1e-4, "gradient stop rose: {prev} -> {value}");
            prev = value;
        }
        assert_eq!(
            stage.element(root).unwrap().property(prop::BG_PRIMEIRA_COR),
            Some("0.1%")
        );
    }

    #[test]
    fn reselecting_the_same_side_is_a_no_op() {
        let (mut machine, mut stage) = setup();

        machine.select(&mut stage, Side::Esquerdo);
        advance(&mut machine, &mut stage, 1500);

        // Locked: both the same side and the other side are rejected.
        assert!(!machine.select(&mut stage, Side::Esquerdo));
        assert!(!machine.select(&mut stage, Side::Direito));
        assert_eq!(machine.current_theme(), Some(Side::Esquerdo));
    }

    #[test]
    fn second_selection_during_animation_is_ignored() {
        let (mut machine, mut stage) = setup();

        assert!(machine.select(&mut stage, Side::Esquerdo));
        advance(&mut machine, &mut stage, 100);
        assert!(!machine.select(&mut stage, Side::Direito));

        advance(&mut machine, &mut stage, 300);
        assert_eq!(machine.current_theme(), Some(Side::Esquerdo));
        assert!(machine.is_locked());
    }

    #[test]
    fn choice_section_hides_after_selection_grace() {
        let (mut machine, mut stage) = setup();
        let choice = stage.lookup(id::ESCOLHA_TEMA).unwrap();

        machine.select(&mut stage, Side::Direito);
        advance(&mut machine, &mut stage, 360);
        assert!(!stage.has_class(choice, class::HIDDEN));

        advance(&mut machine, &mut stage, 360);
        assert!(stage.has_class(choice, class::HIDDEN));
    }

    #[test]
    fn losing_section_settles_after_exit_transition() {
        let (mut machine, mut stage) = setup();
        let wolverine = stage.lookup(id::WOLVERINE_TEMA).unwrap();

        machine.select(&mut stage, Side::Direito);
        advance(&mut machine, &mut stage, 360);

        assert!(stage.has_class(wolverine, class::HIDDEN));
        // Winner side cleared its settle marker during selection.
        let deadpool = stage.lookup(id::DEADPOOL_TEMA).unwrap();
        assert!(!stage.has_class(deadpool, class::EXIT_COMPLETE));

        advance(&mut machine, &mut stage, 600);
        assert!(stage.has_class(wolverine, class::EXIT_COMPLETE));
    }

    #[test]
    fn vs_and_heading_lose_visibility_after_grace() {
        let (mut machine, mut stage) = setup();
        let vs = stage.lookup(id::VS).unwrap();
        let h2 = stage.lookup(id::ESCOLHA_H2).unwrap();

        machine.select(&mut stage, Side::Esquerdo);
        assert!(stage.has_class(vs, class::VS_HIDDEN));
        assert!(stage.has_class(h2, class::H2_HIDDEN));
        assert_eq!(stage.element(vs).unwrap().visibility(), Visibility::Inherit);

        advance(&mut machine, &mut stage, 360);
        assert_eq!(stage.element(vs).unwrap().visibility(), Visibility::Hidden);
        assert_eq!(stage.element(h2).unwrap().visibility(), Visibility::Hidden);
    }

    #[test]
    fn reset_is_guarded_until_locked() {
        let (mut machine, mut stage) = setup();

        assert!(!machine.reset(&mut stage));

        machine.select(&mut stage, Side::Esquerdo);
        advance(&mut machine, &mut stage, 100);
        // Still animating: reset rejected.
        assert!(!machine.reset(&mut stage));

        advance(&mut machine, &mut stage, 300);
        assert!(machine.reset(&mut stage));
    }

    #[test]
    fn reset_restores_the_pristine_state() {
        let (mut machine, mut stage) = setup();
        let root = stage.root();

        machine.select(&mut stage, Side::Esquerdo);
        advance(&mut machine, &mut stage, 1200);

        assert!(machine.reset(&mut stage));
        // 600ms exit grace + 350ms tweens + 300ms input re-enable.
        advance(&mut machine, &mut stage, 1400);

        assert_eq!(machine.current_theme(), None);
        assert!(!machine.is_locked());
        assert!(!machine.state().initialized);

        let el = stage.element(root).unwrap();
        assert!(!el.has_class(class::TEMA_ESQUERDO));
        assert!(!el.has_class(class::TEMA_DIREITO));
        assert!(el.attr(attr::CURRENT_THEME).is_none());
        assert!(el.attr(attr::SELECTION_LOCKED).is_none());
        assert!(el.attr(attr::THEME_INITIALIZED).is_none());
        assert_eq!(stage.percent_value(root, prop::BG_PRIMEIRA_COR), 50.0);
        assert_eq!(stage.percent_value(root, prop::BG_SEGUNDA_COR), 50.0);

        let choice = stage.lookup(id::ESCOLHA_TEMA).unwrap();
        assert!(!stage.has_class(choice, class::HIDDEN));
        let reset_btn = stage.lookup(id::RESET_ESCOLHA).unwrap();
        assert!(stage.has_class(reset_btn, class::HIDDEN));
        assert!(!stage.element(reset_btn).unwrap().disabled());

        let vs = stage.lookup(id::VS).unwrap();
        assert!(!stage.has_class(vs, class::VS_HIDDEN));
        assert_eq!(stage.element(vs).unwrap().visibility(), Visibility::Inherit);

        // Interaction re-enabled after the post-reset grace.
        assert!(stage.has_class(root, class::ANIMATIONS_COMPLETE));
    }

    #[test]
    fn select_after_reset_starts_from_baseline_again() {
        let (mut machine, mut stage) = setup();
        let root = stage.root();

        machine.select(&mut stage, Side::Esquerdo);
        advance(&mut machine, &mut stage, 1200);
        machine.reset(&mut stage);
        advance(&mut machine, &mut stage, 1400);

        // Second selection behaves like the first: accepted and animating
        // from the 50% baseline.
        assert!(machine.select(&mut stage, Side::Direito));
        machine.tick(&mut stage, STEP_MS);
        let value = stage.percent_value(root, prop::BG_PRIMEIRA_COR);
        assert!((value - 50.0).abs() < 2.0, "expected near-baseline, got {value}");

        advance(&mut machine, &mut stage, 360);
        assert_eq!(machine.current_theme(), Some(Side::Direito));
        assert_eq!(
            stage.element(root).unwrap().property(prop::BG_PRIMEIRA_COR),
            Some("99.9%")
        );
    }

    #[test]
    fn reset_disables_button_during_transition() {
        let (mut machine, mut stage) = setup();

        machine.select(&mut stage, Side::Direito);
        advance(&mut machine, &mut stage, 1200);

        machine.reset(&mut stage);
        let btn = stage.lookup(id::RESET_ESCOLHA).unwrap();
        assert!(stage.element(btn).unwrap().disabled());

        advance(&mut machine, &mut stage, 1000);
        assert!(!stage.element(btn).unwrap().disabled());
    }
}
