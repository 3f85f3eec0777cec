//! Error types for parameter decoding

/// Parameter codec errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    /// Application name failed the letters-only gate
    #[error("invalid application name: {0:?}")]
    InvalidAppName(String),

    /// A required parameter was absent from the query string
    #[error("missing parameter: {0}")]
    MissingParam(String),
}
