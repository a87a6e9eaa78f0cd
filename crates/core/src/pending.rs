//! Asynchronous constructors and combinators.
//!
//! Two flavours exist:
//!
//! - async methods on an immediate [`Outcome`] whose transform or handler is
//!   itself a future (`map_async`, `on_success_async`, ...);
//! - [`PendingOutcomeExt`], implemented for every future that resolves to an
//!   [`Outcome`].
//!
//! In both, the incoming outcome is awaited to completion before any
//! transform or handler is invoked. Nothing here spawns work or blocks.

use std::future::Future;

use crate::capture::{IntoOutcome, flatten, run_captured, run_captured_async};
use crate::error::Error;
use crate::outcome::Outcome;

impl<T> Outcome<T> {
    /// Await `fut`, yielding its value as a success or its panic as a failure.
    pub async fn capture_async<Fut>(fut: Fut) -> Self
    where
        Fut: Future<Output = T>,
    {
        run_captured_async(fut).await.into_outcome()
    }

    /// Await a future that already reports success or failure, without
    /// double wrapping.
    pub async fn try_async<R, Fut>(fut: Fut) -> Self
    where
        R: IntoOutcome<T>,
        Fut: Future<Output = R>,
    {
        flatten(run_captured_async(fut).await)
    }

    /// Transform the success value with an asynchronous function.
    ///
    /// A panic raised while creating or polling the transform's future
    /// becomes a failure.
    pub async fn map_async<U, Fut, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => match run_captured(|| f(value)) {
                Ok(fut) => run_captured_async(fut).await.into_outcome(),
                Err(err) => Outcome::Failure(err),
            },
            Self::Failure(err) => Outcome::Failure(err),
        }
    }

    /// Asynchronous [`Outcome::and_then`].
    pub async fn and_then_async<U, R, Fut, F>(self, f: F) -> Outcome<U>
    where
        R: IntoOutcome<U>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Self::Success(value) => match run_captured(|| f(value)) {
                Ok(fut) => flatten(run_captured_async(fut).await),
                Err(err) => Outcome::Failure(err),
            },
            Self::Failure(err) => Outcome::Failure(err),
        }
    }

    /// Await `f` on the success value; the outcome is returned unchanged.
    pub async fn on_success_async<Fut, F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Success(ref value) = self {
            f(value).await;
        }
        self
    }

    /// Await `f` on the failure; the outcome is returned unchanged.
    pub async fn on_failure_async<Fut, F>(self, f: F) -> Self
    where
        F: FnOnce(&Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Failure(ref err) = self {
            f(err).await;
        }
        self
    }

    /// Discharge the outcome through exactly one of two asynchronous handlers.
    pub async fn resolve_async<R, SFut, FFut, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        F: FnOnce(Error) -> FFut,
        SFut: Future<Output = R>,
        FFut: Future<Output = R>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(err) => on_failure(err).await,
        }
    }
}

/// Combinators for futures that resolve to an [`Outcome`].
///
/// Every method first awaits `self` and only then invokes its transform or
/// handler, so the two steps never overlap.
pub trait PendingOutcomeExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Await the outcome, then [`Outcome::map`] it.
    fn map_outcome<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U;

    /// Await the outcome, then [`Outcome::map_async`] it.
    fn map_outcome_async<U, Fut, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    /// Await the outcome, then [`Outcome::and_then`] it.
    fn and_then_outcome<U, R, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        R: IntoOutcome<U>,
        F: FnOnce(T) -> R;

    /// Await the outcome, then observe a success.
    fn on_success<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T);

    /// Await the outcome, then await `f` on a success.
    fn on_success_async<Fut, F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>;

    /// Await the outcome, then observe a failure.
    fn on_failure<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Error);

    /// Await the outcome, then await `f` on a failure.
    fn on_failure_async<Fut, F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Error) -> Fut,
        Fut: Future<Output = ()>;

    /// Await the outcome, then discharge it through exactly one handler.
    fn resolve<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R;

    /// Await the outcome, then discharge it through exactly one async handler.
    fn resolve_async<R, SFut, FFut, S, F>(
        self,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        F: FnOnce(Error) -> FFut,
        SFut: Future<Output = R>,
        FFut: Future<Output = R>;
}

impl<T, P> PendingOutcomeExt<T> for P
where
    P: Future<Output = Outcome<T>>,
{
    fn map_outcome<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(f) }
    }

    fn map_outcome_async<U, Fut, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    fn and_then_outcome<U, R, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        R: IntoOutcome<U>,
        F: FnOnce(T) -> R,
    {
        async move { self.await.and_then(f) }
    }

    fn on_success<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T),
    {
        async move { self.await.on_success(f) }
    }

    fn on_success_async<Fut, F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.on_success_async(f).await }
    }

    fn on_failure<F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Error),
    {
        async move { self.await.on_failure(f) }
    }

    fn on_failure_async<Fut, F>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(&Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.on_failure_async(f).await }
    }

    fn resolve<R, S, F>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        async move { self.await.resolve(on_success, on_failure) }
    }

    fn resolve_async<R, SFut, FFut, S, F>(
        self,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = R>
    where
        S: FnOnce(T) -> SFut,
        F: FnOnce(Error) -> FFut,
        SFut: Future<Output = R>,
        FFut: Future<Output = R>,
    {
        async move { self.await.resolve_async(on_success, on_failure).await }
    }
}
