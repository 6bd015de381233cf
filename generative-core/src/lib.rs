//! Core functionality for generative property-based testing.
//!
//! This crate provides the [`Arbitrary`] abstraction (random generation plus
//! shrink candidates), its combinators, the trial-bound [`Generator`], and the
//! driver that runs a property over many trials and shrinks failures.

pub mod arbitrary;
pub mod data;
pub mod error;
pub mod gen;
pub mod generator;
pub mod property;
pub mod trial;

// Re-export the main types
pub use arbitrary::*;
pub use data::*;
pub use error::*;
pub use gen::*;
pub use generator::*;
pub use property::*;
pub use trial::*;
