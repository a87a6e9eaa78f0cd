//! Algebraic error handling for PlanetGame.
//!
//! [`Outcome`] is a two-variant value: a computed result or the [`Error`]
//! that prevented it. Producers build one where a fallible operation
//! completes; consumers chain it and discharge it exactly once:
//!
//! ```text
//! construct -> [map]* -> {on_success / on_failure}* -> resolve
//! ```
//!
//! Once a failure enters the chain, every later `map` passes it through and
//! every `on_success` is skipped.
//!
//! # Example
//!
//! ```
//! use planetgame_core::prelude::*;
//!
//! # async fn demo() {
//! let status = Outcome::capture_async(async { 40 })
//!     .map_outcome(|n| n + 2)
//!     .resolve(|n| n, |_| 0)
//!     .await;
//! assert_eq!(status, 42);
//! # }
//! ```

pub mod capture;
pub mod error;
pub mod outcome;
pub mod pending;
pub mod prelude;

pub use capture::{IntoOutcome, run_captured, run_captured_async};
pub use error::{Cause, Error};
pub use outcome::Outcome;
pub use pending::PendingOutcomeExt;
