//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A navigation path appears more than once in the tree
    #[error("Duplicate navigation path: {0}")]
    DuplicatePath(String),

    /// A navigation path is not in normalized form (rooted at `/`, no empty
    /// segments, no trailing `/`)
    #[error("Invalid navigation path: {0:?}")]
    InvalidPath(String),

    /// Navigation tree has no items
    #[error("Navigation tree is empty")]
    EmptyTree,

    /// A process-wide store was seeded twice
    #[error("{0} is already initialized")]
    AlreadyInitialized(&'static str),
}

impl CoreError {
    /// Whether it is expected behavior (bad user configuration), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::DuplicatePath(_) | Self::InvalidPath(_) | Self::EmptyTree => true,
            Self::AlreadyInitialized(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
