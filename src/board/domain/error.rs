//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardDomainError {
    /// The item identifier is empty or contains whitespace.
    #[error("invalid item identifier '{0}', expected a non-empty token")]
    InvalidItemId(String),

    /// The container identifier is empty or contains whitespace.
    #[error("invalid container identifier '{0}', expected a non-empty token")]
    InvalidContainerId(String),

    /// The item title is empty after trimming.
    #[error("item title must not be empty")]
    EmptyTitle,

    /// A rectangle edge is NaN or infinite.
    #[error("rectangle edges must be finite")]
    NonFiniteBounds,

    /// A rectangle's far edge lies before its near edge.
    #[error("inverted rectangle: left {left}, top {top}, right {right}, bottom {bottom}")]
    InvertedBounds {
        /// Left edge.
        left: f64,
        /// Top edge.
        top: f64,
        /// Right edge.
        right: f64,
        /// Bottom edge.
        bottom: f64,
    },
}

/// Error returned while parsing item priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing input modality tags.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown input modality: {0}")]
pub struct ParseModalityError(pub String);
