//! Renderer seam and the hint decorator built on top of it.

pub mod hints;
pub mod renderer;
