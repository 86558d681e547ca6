//! Success or failure of a fallible operation.
//!
//! Two error channels meet here and must not be confused:
//!
//! - the carried failure: the `E` inside [`Outcome::Failure`], which is data;
//! - a [`Fault`]: returned when an accessor is used on the wrong variant.
//!
//! [`Outcome::unwrap`] is the one accessor that hands back the carried failure
//! itself, so callers can still match on their own error type afterwards.

use std::error::Error;
use std::fmt;

use crate::fault::{ErrorLike, Fault, FaultKind};
use crate::optional::Optional;

/// The outcome of a fallible operation: a `T` on success, an `E` on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    #[must_use]
    pub const fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    #[must_use]
    pub const fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow both payloads without consuming `self`.
    #[must_use]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// The success value, discarding any failure.
    #[must_use]
    pub fn to_optional_success(self) -> Optional<T> {
        match self {
            Outcome::Success(value) => Optional::Present(value),
            Outcome::Failure(_) => Optional::ABSENT,
        }
    }

    /// The failure value, discarding any success.
    #[must_use]
    pub fn to_optional_failure(self) -> Optional<E> {
        match self {
            Outcome::Success(_) => Optional::ABSENT,
            Outcome::Failure(error) => Optional::Present(error),
        }
    }

    /// Transform the success value; a failure passes through unchanged.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// `f` applied to the success value, or `default`.
    #[must_use]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(_) => default,
        }
    }

    /// Transform the failure value; a success passes through unchanged.
    #[must_use]
    pub fn map_error<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// `other` on success, otherwise this failure.
    #[must_use]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(_) => other,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain a fallible step; it only runs on success.
    #[must_use]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// `self` on success, otherwise `other`.
    #[must_use]
    pub fn or(self, other: Outcome<T, E>) -> Outcome<T, E> {
        match self {
            Outcome::Success(_) => self,
            Outcome::Failure(_) => other,
        }
    }

    /// Recover from a failure; `f` only runs on failure.
    #[must_use]
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error),
        }
    }

    /// The success value, or `default`.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// The success value, or `f` applied to the failure.
    #[must_use]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// The success value, or the carried failure itself (not wrapped in a [`Fault`]).
    pub fn unwrap(self) -> Result<T, E> {
        self.into_result()
    }

    /// The success value, or an [`FaultKind::ExpectFailure`] fault whose message is
    /// `msg` followed by the rendered failure.
    pub fn expect(self, msg: &str) -> Result<T, Fault>
    where
        E: fmt::Display,
    {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(Fault::new(
                FaultKind::ExpectFailure,
                format!("{msg} {error}"),
            )),
        }
    }

    /// [`Outcome::expect`] for error-like failures.
    ///
    /// The fault's source is a copy of the failure with its message rewritten to
    /// `msg` followed by the original message. The failure value itself is only
    /// read, so clones of it held elsewhere keep their message.
    pub fn expect_rewritten(self, msg: &str) -> Result<T, Fault>
    where
        E: ErrorLike + Error + Send + Sync + 'static,
    {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => {
                let rewritten = error.with_message(format!("{msg} {}", error.message()));
                Err(Fault::wrap(FaultKind::ExpectFailure, rewritten))
            }
        }
    }

    /// The failure value, or a [`FaultKind::SuccessUnwrapFailure`] fault that
    /// renders the success value.
    pub fn unwrap_failure(self) -> Result<E, Fault>
    where
        T: fmt::Display,
    {
        match self {
            Outcome::Success(value) => Err(Fault::new(
                FaultKind::SuccessUnwrapFailure,
                format!("cannot unwrap the failure of a Success {value}"),
            )),
            Outcome::Failure(error) => Ok(error),
        }
    }

    /// The failure value, or a [`FaultKind::ExpectFailureOnSuccess`] fault whose
    /// message is `msg` followed by the rendered success value.
    pub fn expect_failure(self, msg: &str) -> Result<E, Fault>
    where
        T: fmt::Display,
    {
        match self {
            Outcome::Success(value) => Err(Fault::new(
                FaultKind::ExpectFailureOnSuccess,
                format!("{msg} {value}"),
            )),
            Outcome::Failure(error) => Ok(error),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    #[must_use]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success {value}"),
            Outcome::Failure(error) => write!(f, "Failure {error}"),
        }
    }
}
