//! Messaging bridge toward an optional host browser extension
//!
//! The channel is cooperative, best-effort, and fire-and-forget: no
//! acknowledgement, retry, or timeout is modeled. If no extension is
//! present the inbound hooks simply never fire and the page stays fully
//! usable.
//!
//! - [`ExtensionBridge`]: outbound capability (`notify_presence`,
//!   `relay_chosen_url`)
//! - [`ExtensionHooks`]: inbound hooks with no-op defaults
//! - [`HookDispatcher`]: origin-checked inbound dispatch
//! - [`NullBridge`] / [`ChannelBridge`]: extension-absent and in-process
//!   implementations

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod bridge;
pub mod channel;
pub mod error;
pub mod inbound;

pub use bridge::{ExtensionBridge, NullBridge};
pub use channel::{ChannelBridge, OutboundSignal};
pub use error::BridgeError;
pub use inbound::{ExtensionHooks, HookDispatcher, InboundMessage, InboundPayload, NoopHooks};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
