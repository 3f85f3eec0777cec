//! Outbound capability toward the host extension

use async_trait::async_trait;

/// Outbound signals the page can send to the host extension
///
/// Both operations are fire-and-forget: implementations log delivery
/// failures instead of surfacing them, because the page must stay fully
/// usable when no extension is listening.
#[async_trait]
pub trait ExtensionBridge: Send + Sync {
    /// Announce the page to the extension
    ///
    /// Fired once after both inbound hooks are registered; this is the
    /// "secret requested" half of the presence handshake.
    async fn notify_presence(&self);

    /// Relay the canonical href of the currently previewed content
    ///
    /// One-shot, invoked from a user action so the host page can be
    /// populated with the chosen link.
    async fn relay_chosen_url(&self, url: &str);
}

/// Bridge for the extension-absent case
///
/// Every signal is dropped. Used on hosted platforms, where the
/// extension-dependent affordances are hidden anyway.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBridge;

impl NullBridge {
    /// Create a null bridge
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExtensionBridge for NullBridge {
    async fn notify_presence(&self) {
        tracing::debug!("no extension host, presence announcement dropped");
    }

    async fn relay_chosen_url(&self, url: &str) {
        tracing::debug!(url, "no extension host, chosen URL dropped");
    }
}
