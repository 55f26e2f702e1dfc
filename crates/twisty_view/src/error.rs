use twisty_core::PuzzleError;

/// Error produced when a twist or rebuild cannot start.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TwistError {
    /// Another twist is still animating.
    #[error("a twist is already in progress")]
    Busy,
    /// The twist or puzzle parameters are invalid.
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}
