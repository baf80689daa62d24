//! Ring slider
//!
//! A continuous-angle 3D card ring. Rotation accumulates from three
//! sources that coexist: a perpetual auto-rotation increment applied
//! every frame while the widget is mounted, pointer/touch drags, and
//! press-and-hold step buttons repeating on a fixed interval. The angle
//! is periodically normalized into (-360, 360).

use vitrine_core::{TimerId, TimerQueue};
use vitrine_stage::contract::{duration, id};
use vitrine_stage::{ElementId, Stage};

/// Degrees added per frame by the automatic rotation.
const AUTO_STEP_DEG: f32 = 0.05;
/// Degrees per pixel of horizontal drag.
const DRAG_FACTOR: f32 = 0.05;
/// Degrees per press-and-hold step.
const HOLD_STEP_DEG: f32 = 3.0;
/// Resting angle the ring starts at.
const INITIAL_ROTATION_DEG: f32 = 185.0;

/// Direction of a press-and-hold rotation.
///
/// The button names are swapped relative to the sign on purpose: the
/// `prev` control rotates forward, matching the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldDirection {
    Prev,
    Next,
}

impl HoldDirection {
    fn step(&self) -> f32 {
        match self {
            HoldDirection::Prev => HOLD_STEP_DEG,
            HoldDirection::Next => -HOLD_STEP_DEG,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum RingCue {
    HoldStep,
}

pub struct RingSlider {
    slider: Option<ElementId>,
    rotation: f32,
    dragging: bool,
    last_x: f32,
    hovered: bool,
    auto_rotate: bool,
    mounted: bool,
    initialized: bool,
    timers: TimerQueue<RingCue>,
    hold_timer: Option<TimerId>,
    hold_step: f32,
}

impl RingSlider {
    pub fn new() -> Self {
        Self {
            slider: None,
            rotation: INITIAL_ROTATION_DEG,
            dragging: false,
            last_x: 0.0,
            hovered: false,
            auto_rotate: true,
            mounted: false,
            initialized: false,
            timers: TimerQueue::new(),
            hold_timer: None,
            hold_step: 0.0,
        }
    }

    /// One-time initialization, guarded so repeated navigation to the
    /// about section does not re-bind anything. Aborts silently when the
    /// slider, its cards, or the step buttons are missing.
    pub fn initialize(&mut self, stage: &mut Stage) -> bool {
        if self.initialized {
            return true;
        }

        let Some(slider) = stage.lookup(id::SLIDER) else {
            tracing::debug!("ring slider element missing, skipping init");
            return false;
        };
        let has_items = stage.lookup(&id::projetos_item(0)).is_some();
        if !has_items
            || stage.lookup(id::RING_NEXT).is_none()
            || stage.lookup(id::RING_PREV).is_none()
        {
            tracing::debug!("ring slider collaborators missing, skipping init");
            return false;
        }

        self.slider = Some(slider);
        self.initialized = true;
        self.mounted = true;
        self.apply(stage);
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pause or resume the automatic rotation.
    pub fn set_auto_rotation(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    /// Tear the widget down: stops the auto-rotation task and any hold
    /// repeat. Subsequent ticks are no-ops.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.release_hold();
    }

    // ========== Drag ==========

    pub fn pointer_down(&mut self, x: f32) {
        if !self.initialized {
            return;
        }
        self.dragging = true;
        self.last_x = x;
    }

    pub fn pointer_move(&mut self, stage: &mut Stage, x: f32) {
        if !self.dragging {
            return;
        }
        let delta = x - self.last_x;
        self.rotation += delta * DRAG_FACTOR;
        self.last_x = x;
        self.apply(stage);
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn set_hovered(&mut self, stage: &mut Stage, hovered: bool) {
        self.hovered = hovered;
        if self.initialized {
            self.apply(stage);
        }
    }

    // ========== Press-and-hold ==========

    /// Step immediately, then repeat every 30 ms until released.
    pub fn press_hold(&mut self, stage: &mut Stage, direction: HoldDirection) {
        if !self.initialized {
            return;
        }
        self.release_hold();
        self.hold_step = direction.step();
        self.rotation += self.hold_step;
        self.apply(stage);
        self.hold_timer = Some(self.timers.schedule(duration::HOLD_REPEAT_MS, RingCue::HoldStep));
    }

    /// Stop the repeat (button released or pointer left it).
    pub fn release_hold(&mut self) {
        if let Some(timer) = self.hold_timer.take() {
            self.timers.cancel(timer);
        }
    }

    // ========== Frame advance ==========

    /// One frame: apply the auto increment (while mounted) and any due
    /// hold repeats, then write the transform.
    pub fn tick(&mut self, stage: &mut Stage, dt_ms: f64) {
        if !self.initialized || !self.mounted {
            return;
        }

        if self.auto_rotate {
            self.rotation += AUTO_STEP_DEG;
        }

        for cue in self.timers.advance(dt_ms) {
            match cue {
                RingCue::HoldStep => {
                    self.rotation += self.hold_step;
                    self.hold_timer =
                        Some(self.timers.schedule(duration::HOLD_REPEAT_MS, RingCue::HoldStep));
                }
            }
        }

        self.apply(stage);
    }

    /// Normalize the angle and write the ring transform.
    fn apply(&mut self, stage: &mut Stage) {
        if self.rotation >= 360.0 || self.rotation <= -360.0 {
            self.rotation %= 360.0;
        }
        let Some(slider) = self.slider else {
            return;
        };
        if let Some(el) = stage.element_mut(slider) {
            el.set_transform(Some(format!(
                "perspective(3000px) rotateZ(5deg) rotateX(-2.5deg)rotateY({}deg) scale(1.2)",
                self.rotation
            )));
        }
    }
}

impl Default for RingSlider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_stage::landing_stage;

    fn setup() -> (RingSlider, Stage) {
        let mut stage = landing_stage().unwrap();
        let mut ring = RingSlider::new();
        assert!(ring.initialize(&mut stage));
        (ring, stage)
    }

    #[test]
    fn starts_at_resting_angle_and_writes_transform() {
        let (ring, stage) = setup();
        assert_eq!(ring.rotation(), 185.0);

        let slider = stage.lookup(id::SLIDER).unwrap();
        let transform = stage.element(slider).unwrap().transform().unwrap();
        assert!(transform.contains("rotateY(185deg)"), "{transform}");
        assert!(transform.starts_with("perspective(3000px)"));
    }

    #[test]
    fn auto_rotation_advances_each_frame() {
        let (mut ring, mut stage) = setup();

        for _ in 0..10 {
            ring.tick(&mut stage, 16.0);
        }
        assert!((ring.rotation() - (185.0 + 10.0 * 0.05)).abs() < 1e-4);
    }

    #[test]
    fn drag_adds_scaled_delta_on_top_of_auto() {
        let (mut ring, mut stage) = setup();

        ring.pointer_down(100.0);
        assert!(ring.is_dragging());
        ring.pointer_move(&mut stage, 180.0);
        // 80px * 0.05 = 4 degrees.
        assert!((ring.rotation() - 189.0).abs() < 1e-4);

        // Auto rotation still runs underneath the drag.
        ring.tick(&mut stage, 16.0);
        assert!((ring.rotation() - 189.05).abs() < 1e-4);

        ring.pointer_up();
        assert!(!ring.is_dragging());
        ring.pointer_move(&mut stage, 300.0);
        assert!((ring.rotation() - 189.05).abs() < 1e-4, "move after release ignored");
    }

    #[test]
    fn hold_steps_immediately_then_repeats() {
        let (mut ring, mut stage) = setup();
        ring.set_auto_rotation(false);

        ring.press_hold(&mut stage, HoldDirection::Prev);
        assert!((ring.rotation() - 188.0).abs() < 1e-4);

        // Two repeat intervals.
        ring.tick(&mut stage, 30.0);
        ring.tick(&mut stage, 30.0);
        assert!((ring.rotation() - 194.0).abs() < 1e-4);

        ring.release_hold();
        ring.tick(&mut stage, 90.0);
        assert!((ring.rotation() - 194.0).abs() < 1e-4);
    }

    #[test]
    fn next_hold_rotates_the_other_way() {
        let (mut ring, mut stage) = setup();
        ring.set_auto_rotation(false);

        ring.press_hold(&mut stage, HoldDirection::Next);
        assert!((ring.rotation() - 182.0).abs() < 1e-4);
    }

    #[test]
    fn rotation_normalizes_within_a_turn() {
        let (mut ring, mut stage) = setup();
        ring.set_auto_rotation(false);

        ring.pointer_down(0.0);
        ring.pointer_move(&mut stage, 10_000.0);
        assert!(ring.rotation() > -360.0 && ring.rotation() < 360.0);
    }

    #[test]
    fn unmount_stops_the_auto_task() {
        let (mut ring, mut stage) = setup();

        ring.unmount();
        let before = ring.rotation();
        for _ in 0..10 {
            ring.tick(&mut stage, 16.0);
        }
        assert_eq!(ring.rotation(), before);
    }

    #[test]
    fn initialize_is_idempotent() {
        let (mut ring, mut stage) = setup();
        ring.pointer_down(0.0);
        ring.pointer_move(&mut stage, 100.0);
        let rotation = ring.rotation();

        assert!(ring.initialize(&mut stage));
        assert_eq!(ring.rotation(), rotation);
    }

    #[test]
    fn interaction_before_initialization_is_ignored() {
        let mut stage = Stage::new();
        let mut ring = RingSlider::new();

        ring.pointer_down(0.0);
        ring.pointer_move(&mut stage, 100.0);
        ring.press_hold(&mut stage, HoldDirection::Prev);
        assert_eq!(ring.rotation(), 185.0);
    }
}
