use thiserror::Error;

/// Error produced when a search cannot run to completion.
///
/// An unreachable destination is not an error; it yields an empty path.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
