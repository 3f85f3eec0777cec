//! Preview-frame embedding for the Privly client
//!
//! Models the single sandboxed iframe used to render a selected post
//! inline:
//! - [`PreviewFrame`]: the frame descriptor, gated on a validated
//!   application name
//! - [`FrameHost`]: replace-on-write owner of the at-most-one current frame
//! - [`ResizeListener`]: origin-checked height-resize protocol

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod frame;
pub mod host;
pub mod resize;

pub use error::EmbedError;
pub use frame::{PreviewFrame, PREVIEW_FRAME_ID};
pub use host::FrameHost;
pub use resize::ResizeListener;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
