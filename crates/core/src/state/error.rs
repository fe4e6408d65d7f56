use thiserror::Error;

/// Result type for room state updates.
pub type StateResult<T> = std::result::Result<T, StateError>;

/// Represents the errors that arise when updating room state.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateError {
    /// A state event doesn't have a `state_key`.
    #[error("state event of type `{0}` has no `state_key`")]
    MissingStateKey(String),
}
