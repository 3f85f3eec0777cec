//! Error types for preview embedding

use privly_params::ParamError;

/// Embedding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmbedError {
    /// Embed parameters were missing or failed validation
    #[error("embed parameter rejected: {0}")]
    Param(#[from] ParamError),

    /// A window message arrived from an origin other than the page's own
    #[error("message from foreign origin: {origin}")]
    ForeignOrigin {
        /// Origin the message claimed
        origin: String,
    },

    /// A resize payload did not carry a numeric height in its second field
    #[error("malformed resize payload: {0:?}")]
    MalformedResize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_error_display() {
        let err = EmbedError::ForeignOrigin {
            origin: "https://evil.example".to_string(),
        };
        assert!(err.to_string().contains("foreign origin"));
    }

    #[test]
    fn param_error_converts() {
        let err: EmbedError = ParamError::MissingParam("privlyApp".to_string()).into();
        assert!(matches!(err, EmbedError::Param(_)));
    }
}
