//! Contract-violation signals.
//!
//! Calling an accessor on the wrong variant (`unwrap` on `Absent`, `map` on
//! `Absent`, `unwrap_failure` on `Success`, ...) never panics. The offending call
//! returns `Err(Fault)` instead, tagged with a stable [`FaultKind`] so callers can
//! branch on the discriminant without parsing the message.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Stable discriminant of a raised [`Fault`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// `unwrap` called on `Optional::Absent`.
    AbsentUnwrap,
    /// `map` called on `Optional::Absent`.
    AbsentMap,
    /// `unwrap_failure` called on `Outcome::Success`.
    SuccessUnwrapFailure,
    /// `expect_failure` called on `Outcome::Success`.
    ExpectFailureOnSuccess,
    /// `expect` called on `Outcome::Failure`.
    ExpectFailure,
}

impl FaultKind {
    /// Every discriminant, in declaration order.
    pub const ALL: [FaultKind; 5] = [
        FaultKind::AbsentUnwrap,
        FaultKind::AbsentMap,
        FaultKind::SuccessUnwrapFailure,
        FaultKind::ExpectFailureOnSuccess,
        FaultKind::ExpectFailure,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FaultKind::AbsentUnwrap => "AbsentUnwrap",
            FaultKind::AbsentMap => "AbsentMap",
            FaultKind::SuccessUnwrapFailure => "SuccessUnwrapFailure",
            FaultKind::ExpectFailureOnSuccess => "ExpectFailureOnSuccess",
            FaultKind::ExpectFailure => "ExpectFailure",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error value whose message can be rewritten on a copy.
///
/// `with_message` must leave `self` untouched and return a structurally
/// identical value that differs only in its message. `Outcome::expect_rewritten`
/// relies on this to report a failure without corrupting an error instance that
/// may still be observed elsewhere.
pub trait ErrorLike: Clone {
    fn message(&self) -> &str;

    #[must_use]
    fn with_message(&self, message: String) -> Self;
}

/// A raised contract violation: a [`FaultKind`] plus a human-readable message.
///
/// When the fault re-tags a pre-existing error (see [`Fault::wrap`]) that error
/// is the [`Error::source`], so walking the chain and downcasting reaches the
/// wrapped type itself. [`Fault::downcast_source`] is a shortcut for that.
#[derive(Debug, Clone)]
pub struct Fault {
    kind: FaultKind,
    message: String,
    source: Option<Arc<dyn Error + Send + Sync>>,
}

impl Fault {
    /// Raise a fresh signal with no source.
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(kind = kind.as_str(), %message, "fault raised");
        Self {
            kind,
            message,
            source: None,
        }
    }

    /// Re-tag an existing error with `kind`, keeping its message verbatim.
    pub fn wrap<E>(kind: FaultKind, error: E) -> Self
    where
        E: ErrorLike + Error + Send + Sync + 'static,
    {
        let message = error.message().to_owned();
        tracing::debug!(kind = kind.as_str(), %message, "fault raised from wrapped error");
        Self {
            kind,
            message,
            source: Some(Arc::new(error)),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FaultKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is(&self, kind: FaultKind) -> bool {
        self.kind == kind
    }

    /// The wrapped error, if this fault re-tags one of type `E`.
    #[must_use]
    pub fn downcast_source<E: Error + 'static>(&self) -> Option<&E> {
        self.source.as_deref()?.downcast_ref::<E>()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// The source is the wrapped error itself, not its `Arc`, so it downcasts.
impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|error| error as &(dyn Error + 'static))
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for Fault {}

impl ErrorLike for Fault {
    fn message(&self) -> &str {
        &self.message
    }

    fn with_message(&self, message: String) -> Self {
        Self {
            kind: self.kind,
            message,
            source: self.source.clone(),
        }
    }
}
