/// Errors raised while building a starfield.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StarfieldError {
    /// An argument was out of range (zero star count, non-finite step or extent).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
