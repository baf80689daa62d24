//! Vitrine Application Shell
//!
//! Wires the stage, the theme and navigation machines, and the carousel
//! widgets into one engine with a single cooperative tick, plus the TOML
//! configuration and the deterministic headless runner the CLI drives.

pub mod config;
pub mod engine;
pub mod headless;

pub use config::{DemoAction, DemoStep, VitrineConfig};
pub use engine::Engine;
pub use headless::{HeadlessContext, HeadlessRunConfig};
