//! Per-property tween registry
//!
//! The animator owns every in-flight tween, keyed by
//! `(element, property)`. Starting a tween on a pair that already has one
//! cancels the old tween before the new one is installed, so two writers
//! can never race on the same property. This registry replaces stashing
//! animation handles on the animated nodes themselves.

use crate::tween::Tween;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use vitrine_stage::contract::{attr, gradient};
use vitrine_stage::{ElementId, Stage};

new_key_type! {
    /// Handle to an in-flight tween
    pub struct TweenHandle;
}

struct ActiveTween<T> {
    element: ElementId,
    prop: &'static str,
    tween: Tween,
    token: T,
}

/// Animates percentage custom properties, one live tween per
/// `(element, property)` pair.
///
/// `T` is the caller's completion token; `tick` returns each finished
/// tween's token exactly once. A superseded tween's token is discarded
/// with it and never fires.
pub struct PropertyAnimator<T> {
    tweens: SlotMap<TweenHandle, ActiveTween<T>>,
    index: FxHashMap<(ElementId, &'static str), TweenHandle>,
}

impl<T: Copy> PropertyAnimator<T> {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
            index: FxHashMap::default(),
        }
    }

    /// Start a tween toward `to` percent over `duration_ms`.
    ///
    /// The start value is resolved as: the explicit `from` if given;
    /// otherwise the 50% baseline when the stage has never initialized a
    /// theme; otherwise the element's currently written value for the
    /// property (baseline when unparsable).
    pub fn animate(
        &mut self,
        stage: &Stage,
        element: ElementId,
        prop: &'static str,
        to: f32,
        duration_ms: u64,
        from: Option<f32>,
        token: T,
    ) -> TweenHandle {
        let from = from.unwrap_or_else(|| {
            if stage.has_attr(stage.root(), attr::THEME_INITIALIZED) {
                stage.percent_value(element, prop)
            } else {
                gradient::BASELINE_PERCENT
            }
        });

        // Supersede: stop the previous tween for this pair before the
        // new one is installed.
        let key = (element, prop);
        if let Some(old) = self.index.remove(&key) {
            self.tweens.remove(old);
            tracing::trace!(prop, "superseded in-flight tween");
        }

        let handle = self.tweens.insert(ActiveTween {
            element,
            prop,
            tween: Tween::new(from, to, duration_ms),
            token,
        });
        self.index.insert(key, handle);
        handle
    }

    /// Cancel the live tween on a pair, if any.
    pub fn cancel(&mut self, element: ElementId, prop: &'static str) -> bool {
        match self.index.remove(&(element, prop)) {
            Some(handle) => self.tweens.remove(handle).is_some(),
            None => false,
        }
    }

    /// Whether a pair currently has a live tween.
    pub fn is_animating(&self, element: ElementId, prop: &'static str) -> bool {
        self.index.contains_key(&(element, prop))
    }

    /// Number of live tweens.
    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    /// Advance every live tween by `dt_ms`, writing each interpolated
    /// percentage to its element, and return the tokens of tweens that
    /// finished this frame.
    pub fn tick(&mut self, stage: &mut Stage, dt_ms: f64) -> SmallVec<[T; 2]> {
        let mut finished: SmallVec<[T; 2]> = SmallVec::new();

        let handles: SmallVec<[TweenHandle; 4]> = self.tweens.keys().collect();
        for handle in handles {
            let Some(active) = self.tweens.get_mut(handle) else {
                continue;
            };
            let step = active.tween.tick(dt_ms);
            let element = active.element;
            let prop = active.prop;
            stage.set_property(element, prop, format!("{}%", step.value));

            if step.finished {
                finished.push(active.token);
                self.index.remove(&(element, prop));
                self.tweens.remove(handle);
            }
        }

        finished
    }
}

impl<T: Copy> Default for PropertyAnimator<T> {
    fn default() -> Self {
        Self::new()
    }
}
