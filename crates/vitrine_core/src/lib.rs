//! Vitrine Core Runtime
//!
//! Foundational primitives for the Vitrine interaction engine:
//!
//! - **Timer queue**: one-shot, cancellable timers carrying event payloads
//! - **Frame clock**: wall-clock and manual delta-time sources
//! - **Input events**: platform-agnostic pointer/touch/control input
//!
//! Everything here is single-threaded and cooperative. Timers and frames
//! are advanced explicitly by the embedding loop; nothing spawns threads
//! or blocks.

pub mod clock;
pub mod events;
pub mod timer;

pub use clock::{FrameClock, ManualClock};
pub use events::{ControlId, InputEvent};
pub use timer::{TimerId, TimerQueue};
