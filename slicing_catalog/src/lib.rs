//! # Slicing Catalog
//!
//! Read-only content for the story slicing game: slicing patterns, INVEST criteria,
//! levels with their epics and expected stories, and the achievement definitions.
//! This crate holds no player state; the engine looks everything up through [`Catalog`].

pub mod achievements;
mod builtin;
mod catalog;
mod error;
pub mod levels;
pub mod patterns;

pub use achievements::*;
pub use catalog::*;
pub use error::*;
pub use levels::*;
pub use patterns::*;
