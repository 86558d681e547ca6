//! Presence or absence of a value.

use std::fmt;

use crate::fault::{Fault, FaultKind};
use crate::outcome::Outcome;

const ABSENT_UNWRAP: &str = "an Absent value cannot be unwrapped";
const ABSENT_MAP: &str = "an Absent value cannot be mapped";

/// A value of type `T` that may be missing.
///
/// Unlike the usual option convention, [`Optional::map`] does not pass absence
/// through: mapping an `Absent` value is a contract violation and returns
/// [`FaultKind::AbsentMap`]. Chaining through absence is what
/// [`Optional::and_then`] and [`Optional::or_else`] are for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    Present(T),
    Absent,
}

impl<T> Optional<T> {
    /// The shared absent value. Carries no state, so every `Absent` is this one.
    pub const ABSENT: Self = Optional::Absent;

    #[must_use]
    pub const fn present(value: T) -> Self {
        Optional::Present(value)
    }

    #[must_use]
    pub const fn absent() -> Self {
        Self::ABSENT
    }

    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrow the payload without consuming `self`.
    #[must_use]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// The present value, or an [`FaultKind::AbsentUnwrap`] fault.
    pub fn unwrap(self) -> Result<T, Fault> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(Fault::new(FaultKind::AbsentUnwrap, ABSENT_UNWRAP)),
        }
    }

    /// The present value, or `default`.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => default,
        }
    }

    /// The present value, or the result of `f`, which only runs on `Absent`.
    #[must_use]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => f(),
        }
    }

    /// Transform the present value.
    ///
    /// `f` is never invoked on `Absent`; the call returns
    /// [`FaultKind::AbsentMap`] instead.
    pub fn map<U, F>(self, f: F) -> Result<Optional<U>, Fault>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => Ok(Optional::Present(f(value))),
            Optional::Absent => Err(Fault::new(FaultKind::AbsentMap, ABSENT_MAP)),
        }
    }

    /// `f` applied to the present value, or `default`.
    #[must_use]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => default,
        }
    }

    #[must_use]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => default(),
        }
    }

    /// `Success` with the present value, or `Failure(error)`.
    #[must_use]
    pub fn to_result_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Optional::Present(value) => Outcome::Success(value),
            Optional::Absent => Outcome::Failure(error),
        }
    }

    /// Like [`Optional::to_result_or`], but `error` only runs on `Absent`.
    #[must_use]
    pub fn to_result_or_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Present(value) => Outcome::Success(value),
            Optional::Absent => Outcome::Failure(error()),
        }
    }

    /// `other` if a value is present, otherwise `Absent`.
    #[must_use]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Optional::Present(_) => other,
            Optional::Absent => Optional::ABSENT,
        }
    }

    /// Chain a step that may itself produce `Absent`.
    #[must_use]
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => Optional::ABSENT,
        }
    }

    /// `self` if present, otherwise the result of `f`.
    #[must_use]
    pub fn or_else<F>(self, f: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        match self {
            Optional::Present(_) => self,
            Optional::Absent => f(),
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Optional<Optional<T>> {
    #[must_use]
    pub fn flatten(self) -> Optional<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::ABSENT
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(value) => write!(f, "Present {value}"),
            Optional::Absent => f.write_str("Absent"),
        }
    }
}
