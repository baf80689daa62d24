//! Time-bounded value interpolation

use crate::easing::Easing;

/// Result of advancing a tween by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenStep {
    /// The value to write this frame.
    pub value: f32,
    /// True exactly once, on the tick that reaches the end.
    pub finished: bool,
}

/// A single time-bounded interpolation from `from` to `to`.
///
/// Progress is `clamp(elapsed / duration, 0, 1)`; the final step reports
/// exactly `to`, never the eased approximation, so repeated tweens cannot
/// accumulate floating-point drift.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f64,
    elapsed_ms: f64,
    easing: Easing,
    done: bool,
}

impl Tween {
    /// Default tween length, shared with the stylesheet contract.
    pub const DEFAULT_DURATION_MS: u64 = 350;

    pub fn new(from: f32, to: f32, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            // A zero duration completes on the first tick.
            duration_ms: duration_ms.max(1) as f64,
            elapsed_ms: 0.0,
            easing: Easing::EaseInOutQuad,
            done: false,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    /// Normalized progress (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    pub fn is_finished(&self) -> bool {
        self.done
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        let t = self.progress();
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Advance by `dt_ms` and return the value to write.
    pub fn tick(&mut self, dt_ms: f64) -> TweenStep {
        if self.done {
            return TweenStep {
                value: self.to,
                finished: false,
            };
        }

        self.elapsed_ms += dt_ms;

        if self.elapsed_ms >= self.duration_ms {
            self.done = true;
            return TweenStep {
                value: self.to,
                finished: true,
            };
        }

        TweenStep {
            value: self.value(),
            finished: false,
        }
    }
}
