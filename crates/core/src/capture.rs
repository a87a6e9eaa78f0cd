//! The run-and-capture primitive every constructor and transform is built on.
//!
//! A computation "raises" by unwinding. [`run_captured`] and
//! [`run_captured_async`] turn that unwind into an [`Error`] value; the
//! public entry points on [`Outcome`] only decide what shape the normal
//! return value has.

use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};

use futures::FutureExt;

use crate::error::Error;
use crate::outcome::Outcome;

/// Return shapes that already describe success or failure.
///
/// Implemented for [`Outcome`] itself, which passes through untouched, and
/// for `std::result::Result<T, E>` whose error converts into [`Error`].
pub trait IntoOutcome<T> {
    /// Convert into an outcome without adding another layer of wrapping.
    fn into_outcome(self) -> Outcome<T>;
}

impl<T> IntoOutcome<T> for Outcome<T> {
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        self
    }
}

impl<T, E> IntoOutcome<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err.into()),
        }
    }
}

/// Run `f` exactly once, converting an unwind into an [`Error`].
///
/// # Errors
///
/// Returns the captured panic as an [`Error`] when `f` unwinds.
pub fn run_captured<R, F>(f: F) -> Result<R, Error>
where
    F: FnOnce() -> R,
{
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let err = Error::from_panic(payload.as_ref());
        tracing::debug!(target: "planetgame_core::capture", error = %err, "captured panic");
        err
    })
}

/// Await `fut` to completion, converting an unwind raised while polling it
/// into an [`Error`].
///
/// # Errors
///
/// Returns the captured panic as an [`Error`] when polling `fut` unwinds.
pub async fn run_captured_async<Fut>(fut: Fut) -> Result<Fut::Output, Error>
where
    Fut: Future,
{
    AssertUnwindSafe(fut).catch_unwind().await.map_err(|payload| {
        let err = Error::from_panic(payload.as_ref());
        tracing::debug!(target: "planetgame_core::capture", error = %err, "captured async panic");
        err
    })
}

/// Collapse a captured run of a Result-returning computation into one outcome.
pub(crate) fn flatten<T, R>(captured: Result<R, Error>) -> Outcome<T>
where
    R: IntoOutcome<T>,
{
    match captured {
        Ok(shape) => shape.into_outcome(),
        Err(err) => Outcome::Failure(err),
    }
}
