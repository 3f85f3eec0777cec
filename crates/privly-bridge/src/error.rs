//! Error types for the extension bridge

/// Bridge errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// An inbound message arrived from an origin other than the trusted
    /// extension origin
    #[error("inbound message from untrusted origin: {origin}")]
    UntrustedOrigin {
        /// Origin the message claimed
        origin: String,
    },

    /// The outbound channel is gone (host shut down)
    #[error("outbound channel closed")]
    ChannelClosed,
}
