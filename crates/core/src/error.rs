//! The opaque error carried by a failed [`Outcome`](crate::Outcome).
//!
//! There is one error kind. Callers that need to tell failures
//! apart inspect the message or walk the cause chain.

use std::any::Any;
use std::sync::Arc;

use thiserror::Error;

/// Shared, type-erased cause attached to an [`Error`].
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// A captured failure: a message plus an optional chained cause.
///
/// Cloning is cheap; the cause is reference counted, so every clone refers
/// to the same underlying error.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct Error {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl Error {
    /// Create an error with a message and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Create an error with a message and a chained cause.
    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// Capture an arbitrary error, keeping its `Display` text as the message
    /// and the error itself as the cause.
    pub fn wrap<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: err.to_string(),
            cause: Some(Arc::new(err)),
        }
    }

    /// Build an error from a panic payload returned by `catch_unwind`.
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Self::new(message)
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The directly chained cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Iterate over this error followed by every transitive source.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn std::error::Error + 'static)> {
        std::iter::successors(
            Some(self as &(dyn std::error::Error + 'static)),
            |err| err.source(),
        )
    }

    /// The innermost error of the chain (`self` when there is no cause).
    #[must_use]
    pub fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        self.chain()
            .last()
            .unwrap_or(self as &(dyn std::error::Error + 'static))
    }
}

// Identity, not structural equality: a propagated error compares equal to
// the original only while it still shares the same cause allocation.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && match (&self.cause, &other.cause) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::wrap(err)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        let message = err.to_string();
        let boxed: Box<dyn std::error::Error + Send + Sync + 'static> = err.into();
        Self {
            message,
            cause: Some(Arc::from(boxed)),
        }
    }
}
