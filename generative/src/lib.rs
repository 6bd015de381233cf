//! Generative property-based testing library.
//!
//! This is the main entry point for the library, providing a convenient API
//! for property-based testing in Rust.
//!
//! ```rust
//! use generative::*;
//!
//! run_tests(20, |_, trial: &mut Trial| -> Result<()> {
//!     let n = trial.named_var("n").any_positive_integer_less_than(50)?;
//!     assert_eq!((n * 2) % 2, 0);
//!     Ok(())
//! });
//! ```

pub use generative_core::*;
