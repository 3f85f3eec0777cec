//! Error types for the client core
//!
//! Remote-call failures are handled locally by the controller and rendered
//! as inline view messages; nothing here escapes the handler boundary
//! during normal operation.

use crate::state::StateError;
use privly_embed::EmbedError;
use privly_params::ParamError;

/// Client errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Session check rejected or errored (the two are deliberately
    /// collapsed into one kind)
    #[error("authentication failed")]
    Authentication,

    /// Post list request failed
    #[error("post list fetch failed: {0}")]
    Fetch(String),

    /// Embed parameter failed validation
    #[error("validation failed: {0}")]
    Validation(#[from] ParamError),

    /// Preview frame construction or resize handling failed
    #[error("embedding failed: {0}")]
    Embed(#[from] EmbedError),

    /// Illegal session transition (programming error, not a remote failure)
    #[error("session state error: {0}")]
    State(#[from] StateError),

    /// HTTP transport failure, wrapped before the controller boundary
    #[error("http error: {0}")]
    Http(String),
}

impl ClientError {
    /// Check whether this error came from a remote call
    ///
    /// Remote failures are rendered as view messages; everything else is a
    /// bug in the calling sequence.
    #[inline]
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Authentication | Self::Fetch(_) | Self::Http(_)
        )
    }
}
