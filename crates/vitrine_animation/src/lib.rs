//! Vitrine Animation System
//!
//! Frame-driven tweening of percentage custom properties.
//!
//! # Features
//!
//! - **Easing**: quadratic curves with symmetric ease-in-out as the default
//! - **Tweens**: time-bounded interpolation with exact-target completion
//! - **Property animator**: one live tween per (element, property) pair,
//!   superseding requests cancel their predecessor before starting
//! - **Completion barriers**: fixed-count synchronization for transitions
//!   made of several parallel tweens

pub mod animator;
pub mod barrier;
pub mod easing;
pub mod tween;

pub use animator::{PropertyAnimator, TweenHandle};
pub use barrier::CompletionBarrier;
pub use easing::Easing;
pub use tween::Tween;
