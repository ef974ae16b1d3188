//! Violation errors.

use thiserror::Error;

/// Errors that can occur when enforcing transition policies
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ViolationError {
    #[error("Maximum attempts ({max}) exceeded (current: {current})")]
    MaxAttemptsExceeded { max: usize, current: usize },
}
