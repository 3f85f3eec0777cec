//! In-process channel-backed bridge
//!
//! Used by in-process extension hosts and by tests that need to observe
//! the outbound signal stream.

use crate::bridge::ExtensionBridge;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Signals emitted toward the extension host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundSignal {
    /// Presence announcement (the "secret requested" handshake half)
    SecretRequested,
    /// The user chose a URL to post into the host page
    UrlChosen(String),
}

/// Bridge that forwards signals over a tokio channel
#[derive(Debug, Clone)]
pub struct ChannelBridge {
    sender: mpsc::Sender<OutboundSignal>,
}

impl ChannelBridge {
    /// Create a bridge and the receiving end of its signal stream
    #[must_use]
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<OutboundSignal>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { sender: tx }, rx)
    }

    async fn send(&self, signal: OutboundSignal) {
        // Fire-and-forget: a gone host is the same as no host
        if self.sender.send(signal).await.is_err() {
            tracing::warn!("extension host gone, outbound signal dropped");
        }
    }
}

#[async_trait]
impl ExtensionBridge for ChannelBridge {
    async fn notify_presence(&self) {
        self.send(OutboundSignal::SecretRequested).await;
    }

    async fn relay_chosen_url(&self, url: &str) {
        self.send(OutboundSignal::UrlChosen(url.to_string())).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signals_arrive_in_order() {
        let (bridge, mut rx) = ChannelBridge::new(8);

        bridge.notify_presence().await;
        bridge.relay_chosen_url("https://priv.ly/posts/1").await;

        assert_eq!(rx.recv().await, Some(OutboundSignal::SecretRequested));
        assert_eq!(
            rx.recv().await,
            Some(OutboundSignal::UrlChosen("https://priv.ly/posts/1".to_string()))
        );
    }

    #[tokio::test]
    async fn dropped_receiver_is_not_fatal() {
        let (bridge, rx) = ChannelBridge::new(1);
        drop(rx);

        // Must not error or panic; the page stays usable without a host
        bridge.notify_presence().await;
        bridge.relay_chosen_url("https://priv.ly/posts/2").await;
    }
}
