//! Port traits defining internal boundaries.
//!
//! The catalog driver only talks to a [`Renderer`]; the real implementation
//! is [`crate::render::PlaceholderGenerator`].

pub mod renderer;

pub use renderer::{ImageSpec, Renderer};
