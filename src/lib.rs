//! Storyforge: template-driven short story generation.
//!
//! Turns a free-text prompt plus genre and length tags into a titled,
//! multi-paragraph story by selecting and filling narrative beat
//! templates (introduction through conclusion) keyed by genre. No
//! neural inference: the engine is a deterministic-given-a-seed
//! composition over static genre data.

pub mod core;
pub mod schema;
