//! Vitrine Stage Model
//!
//! The stage is the engine's view of the page: a registry of named
//! elements carrying class sets, inline style overrides, state
//! attributes, and numeric custom properties. State machines mutate the
//! stage; an external styling layer reads it. The [`contract`] module
//! pins down every name both sides must agree on.
//!
//! Lookups are `Option`-based throughout: an absent element silently
//! short-circuits the step that wanted it, never the surrounding
//! operation.

pub mod builder;
pub mod contract;
pub mod element;
pub mod stage;

pub use builder::landing_stage;
pub use element::{Element, Visibility};
pub use stage::{ElementId, Stage, StageError};
