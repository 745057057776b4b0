//! Error types for the modgroup library.
//!
//! This module provides error handling using the `thiserror` crate, with
//! variants for invalid moduli, malformed groups and bad builder input.

use thiserror::Error;

/// The main error type for the modgroup library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Number Theory Errors ============
    /// A modulus below 1 was passed to a constructor or helper.
    #[error("modulus must be at least 1, got {0}")]
    InvalidModulus(u32),

    // ============ Group Errors ============
    /// An element was used that does not belong to the group's carrier.
    #[error("element {element} is not in the carrier of {group}")]
    ElementNotInCarrier {
        /// The offending element.
        element: u32,
        /// Display name of the group.
        group: String,
    },

    /// Repeated composition never returned to the identity.
    #[error("{group} is malformed: powers of {element} did not reach the identity within {cap} steps")]
    MalformedGroup {
        /// Display name of the group.
        group: String,
        /// The element whose powers were being generated.
        element: u32,
        /// The iteration cap that was exceeded.
        cap: usize,
    },

    /// A group was constructed from an empty carrier.
    #[error("a group carrier must contain at least one element")]
    EmptyCarrier,

    /// No carrier element acts as a left identity for the operation.
    #[error("{group} has no identity element")]
    NoIdentity {
        /// Display name of the group.
        group: String,
    },

    // ============ Parameter Validation Errors ============
    /// Invalid builder or catalogue input.
    #[error("invalid parameters: {message}")]
    InvalidParams {
        /// Description of what is invalid.
        message: String,
    },
}

/// A specialized `Result` type for modgroup operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidParams` error.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// Create a new `ElementNotInCarrier` error.
    #[must_use]
    pub fn not_in_carrier(element: u32, group: impl Into<String>) -> Self {
        Self::ElementNotInCarrier {
            element,
            group: group.into(),
        }
    }
}
