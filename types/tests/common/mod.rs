//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::cell::Cell;

use rustlike_types::ErrorLike;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Route fault events to the test writer. Run with `RUST_LOG=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Counts how often a callback ran.
#[derive(Debug, Default)]
pub struct CallCounter(Cell<usize>);

impl CallCounter {
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}

/// Hits its counter when dropped.
#[derive(Debug)]
pub struct DropTally<'a>(pub &'a CallCounter);

impl Drop for DropTally<'_> {
    fn drop(&mut self) {
        self.0.hit();
    }
}

/// An application error with a message and a code that must survive rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DomainError {
    message: String,
    pub code: u32,
}

impl DomainError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 0,
        }
    }

    pub fn with_code(mut self, code: u32) -> Self {
        self.code = code;
        self
    }
}

impl ErrorLike for DomainError {
    fn message(&self) -> &str {
        &self.message
    }

    fn with_message(&self, message: String) -> Self {
        Self {
            message,
            code: self.code,
        }
    }
}
