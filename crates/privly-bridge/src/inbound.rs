//! Inbound hooks and origin-checked dispatch
//!
//! The extension calls back into the page with two payloads: initial
//! content to seed a create/edit form, and the handshake secret confirming
//! the extension is present. Both hooks default to no-ops; the page works
//! identically when they never fire.

use crate::error::BridgeError;
use serde_json::Value;

/// Hooks the host extension invokes on the page
///
/// Default implementations are no-ops. Register the hooks first, then
/// announce presence on the outbound bridge; the handshake depends on the
/// hooks already being in place when the extension answers.
pub trait ExtensionHooks: Send + Sync {
    /// Initial content delivered to seed a create/edit form
    fn initial_content(&self, payload: &Value) {
        tracing::debug!(?payload, "initial content received, no handler installed");
    }

    /// Handshake secret confirming the extension is present
    fn message_secret(&self, payload: &Value) {
        tracing::debug!(?payload, "extension secret received, no handler installed");
    }
}

/// Hook set with both defaults left in place
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl ExtensionHooks for NoopHooks {}

/// Payload of an inbound extension message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundPayload {
    /// Document payload for a create/edit form
    InitialContent(Value),
    /// Handshake secret
    MessageSecret(Value),
}

/// An inbound message with the origin it arrived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Origin the message claimed
    pub origin: String,
    /// Decoded payload
    pub payload: InboundPayload,
}

/// Origin-checked dispatcher for inbound extension messages
///
/// Messages from any origin other than the trusted extension origin are
/// dropped before a hook can observe them.
#[derive(Debug)]
pub struct HookDispatcher<H> {
    trusted_origin: String,
    hooks: H,
}

impl<H: ExtensionHooks> HookDispatcher<H> {
    /// Create a dispatcher bound to the trusted extension origin
    #[inline]
    #[must_use]
    pub fn new(trusted_origin: impl Into<String>, hooks: H) -> Self {
        Self {
            trusted_origin: trusted_origin.into(),
            hooks,
        }
    }

    /// Dispatch one inbound message to the matching hook
    ///
    /// # Errors
    /// - [`BridgeError::UntrustedOrigin`] when the origin check fails; the
    ///   hooks are not invoked in that case.
    pub fn dispatch(&self, message: InboundMessage) -> Result<(), BridgeError> {
        if message.origin != self.trusted_origin {
            tracing::warn!(
                origin = %message.origin,
                "dropping inbound extension message from untrusted origin"
            );
            return Err(BridgeError::UntrustedOrigin {
                origin: message.origin,
            });
        }

        match message.payload {
            InboundPayload::InitialContent(payload) => self.hooks.initial_content(&payload),
            InboundPayload::MessageSecret(payload) => self.hooks.message_secret(&payload),
        }
        Ok(())
    }

    /// Access the registered hooks
    #[inline]
    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingHooks {
        content: AtomicUsize,
        secret: AtomicUsize,
    }

    impl ExtensionHooks for CountingHooks {
        fn initial_content(&self, _payload: &Value) {
            self.content.fetch_add(1, Ordering::SeqCst);
        }

        fn message_secret(&self, _payload: &Value) {
            self.secret.fetch_add(1, Ordering::SeqCst);
        }
    }

    const TRUSTED: &str = "chrome-extension://privly";

    #[test]
    fn trusted_messages_reach_hooks() {
        let dispatcher = HookDispatcher::new(TRUSTED, CountingHooks::default());

        dispatcher
            .dispatch(InboundMessage {
                origin: TRUSTED.to_string(),
                payload: InboundPayload::MessageSecret(json!({"secret": "s"})),
            })
            .unwrap();
        dispatcher
            .dispatch(InboundMessage {
                origin: TRUSTED.to_string(),
                payload: InboundPayload::InitialContent(json!({"body": "draft"})),
            })
            .unwrap();

        assert_eq!(dispatcher.hooks().secret.load(Ordering::SeqCst), 1);
        assert_eq!(dispatcher.hooks().content.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn untrusted_origin_never_reaches_hooks() {
        let dispatcher = HookDispatcher::new(TRUSTED, CountingHooks::default());

        let result = dispatcher.dispatch(InboundMessage {
            origin: "https://evil.example".to_string(),
            payload: InboundPayload::MessageSecret(json!({"secret": "s"})),
        });

        assert!(matches!(result, Err(BridgeError::UntrustedOrigin { .. })));
        assert_eq!(dispatcher.hooks().secret.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn noop_hooks_are_valid_absence() {
        let dispatcher = HookDispatcher::new(TRUSTED, NoopHooks);
        let result = dispatcher.dispatch(InboundMessage {
            origin: TRUSTED.to_string(),
            payload: InboundPayload::InitialContent(json!(null)),
        });
        assert!(result.is_ok());
    }
}
