//! Domain error types.

use thiserror::Error;

use crate::role::Role;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A segment index is past the end of a role's authored sequence.
    /// The engine treats this as "story complete", not a failure.
    #[error("segment {index} out of range for role {role} ({count} segments)")]
    SegmentOutOfRange {
        /// The role whose sequence was indexed.
        role: Role,
        /// The requested segment index.
        index: usize,
        /// The number of authored segments for the role.
        count: usize,
    },

    /// No story content is loaded for the given role.
    #[error("no story loaded for role {0}")]
    UnknownRole(Role),

    /// A choice id that does not exist on the current segment, or a choice
    /// made on a segment that offers none.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// A record was not found in storage.
    #[error("not found: {0}")]
    NotFound(String),

    /// A validation error in domain logic or request input.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
