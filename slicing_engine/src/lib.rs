//! # Slicing Engine
//!
//! The progress and scoring core of the story slicing game. It consumes the read-only
//! [`slicing_catalog::Catalog`], tracks the attempt in progress, scores submissions
//! and keeps the player's cumulative progress in a pluggable store.
//!
//! ## Core Components
//!
//! - **session**: per-attempt state and the [`GameSession`] controller that handles intents
//! - **scoring**: pure keyword validation, score breakdown, stars and achievements
//! - **progress**: the persisted [`GameProgress`] record and its best-of merge rules
//! - **store**: storage backends and the [`ProgressStore`] that never fails its callers
//!
//! Everything runs synchronously on the caller's thread. The only timing input is the
//! wall clock, read through the [`Clock`] trait so tests can drive it.

pub mod clock;
pub mod config;
mod error;
pub mod progress;
pub mod scoring;
pub mod session;
pub mod store;

pub use clock::*;
pub use config::*;
pub use error::*;
pub use progress::*;
pub use scoring::*;
pub use session::*;
pub use store::*;
