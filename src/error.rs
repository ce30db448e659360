//! Error types for the adversarial search crate

use ego_tree::NodeId;
use thiserror::Error;

/// Main error type for the crate.
///
/// Every variant is a caller-contract violation: a malformed tree, a value read too early
/// or a rejected generator setting. Searches over a well-formed tree never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("internal node has no children")]
    EmptyInternalNode,

    #[error("internal node already carries a value at construction")]
    PresetInternalValue,

    #[error("node {id:?} has no value yet")]
    UnsetValue { id: NodeId },

    #[error("node {id:?} does not belong to this tree")]
    UnknownNode { id: NodeId },

    #[error("computed value {value} does not fit in a score")]
    ScoreOutOfRange { value: i64 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
