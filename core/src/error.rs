use thiserror::Error;

pub type StateResult<T> = Result<T, StateError>;

/// Failures at the edges of the tree (decoding and encoding documents).
/// The tree operations themselves never fail.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Invalid state document: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
}
