//! The two-variant outcome of a fallible operation and its synchronous
//! combinators.
//!
//! Build an outcome where a fallible operation completes, chain it through
//! [`Outcome::map`], observe it with [`Outcome::on_success`] and
//! [`Outcome::on_failure`], and discharge it once with [`Outcome::resolve`].
//!
//! # Examples
//!
//! ```
//! use planetgame_core::Outcome;
//!
//! let status = Outcome::capture(|| "42".parse::<u32>().unwrap_or_default())
//!     .map(|n| n * 2)
//!     .resolve(|n| format!("200 {n}"), |e| format!("500 {e}"));
//! assert_eq!(status, "200 84");
//! ```

use crate::capture::{IntoOutcome, flatten, run_captured};
use crate::error::Error;

/// Either a computed value or the error that prevented computing it.
///
/// There is no third state. Payloads are only reachable through pattern
/// matching or the accessors, each of which yields the payload of the
/// variant actually present.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "an outcome may hold a failure that should be handled"]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(Error),
}

impl<T> Outcome<T> {
    /// Wrap a value as a success.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap anything convertible into [`Error`] as a failure.
    #[inline]
    pub fn failure(error: impl Into<Error>) -> Self {
        Self::Failure(error.into())
    }

    /// Run `f`, yielding its value as a success or its panic as a failure.
    pub fn capture<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        run_captured(f).into_outcome()
    }

    /// Run a computation that already reports success or failure.
    ///
    /// The returned shape is passed through without double wrapping; a
    /// panic raised before `f` returns becomes a new failure.
    pub fn try_with<R, F>(f: F) -> Self
    where
        R: IntoOutcome<T>,
        F: FnOnce() -> R,
    {
        flatten(run_captured(f))
    }

    /// `true` iff this is a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` iff this is a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The success value, if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure error, if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Borrow the payload, producing an `Outcome<&T>`.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(err) => Outcome::Failure(err.clone()),
        }
    }

    /// Consume into the success value, if present.
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consume into the failure error, if present.
    pub fn into_failure(self) -> Option<Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Convert into a standard `Result` so `?` can be used.
    ///
    /// # Errors
    ///
    /// Returns the carried [`Error`] when this is a failure.
    #[inline]
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(err) => Err(err),
        }
    }

    /// Transform the success value.
    ///
    /// A failure passes through untouched and `f` is never called. A panic
    /// raised by `f` becomes a failure carrying the panic message.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => run_captured(|| f(value)).into_outcome(),
            Self::Failure(err) => Outcome::Failure(err),
        }
    }

    /// Transform the success value with a computation that may itself fail.
    ///
    /// Follows the capture rules of [`Outcome::map`] and flattens like
    /// [`Outcome::try_with`].
    pub fn and_then<U, R, F>(self, f: F) -> Outcome<U>
    where
        R: IntoOutcome<U>,
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => flatten(run_captured(|| f(value))),
            Self::Failure(err) => Outcome::Failure(err),
        }
    }

    /// Observe the success value; the outcome itself is returned unchanged.
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(ref value) = self {
            f(value);
        }
        self
    }

    /// Observe the failure; the outcome itself is returned unchanged.
    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Self::Failure(ref err) = self {
            f(err);
        }
        self
    }

    /// Discharge the outcome through exactly one of two handlers.
    pub fn resolve<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(err) => on_failure(err),
        }
    }

    /// Convert to an `Option`, logging the error if present.
    pub fn into_option_logged(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(err) => {
                tracing::error!("Operation failed: {}", err);
                None
            }
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    fn from(result: Result<T, E>) -> Self {
        result.into_outcome()
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
