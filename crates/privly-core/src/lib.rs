//! Privly client core
//!
//! The scriptable core of the Privly page:
//! - Explicit session state machine with a single validated transition
//!   function
//! - [`SessionController`] sequencing login-check, post-listing, preview,
//!   and post-submission against injected collaborators
//! - [`NetworkService`] seam with a reqwest-backed implementation
//! - [`View`] seam so the controller runs without a live document
//!
//! # Example
//!
//! ```rust,ignore
//! use privly_bridge::NullBridge;
//! use privly_core::{ClientConfig, HttpNetworkService, SessionController};
//!
//! # async fn example(view: impl privly_core::View) -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new().with_domain("https://priv.ly");
//! let network = HttpNetworkService::new(&config)?;
//! let mut controller = SessionController::new(config, view, network, NullBridge::new());
//!
//! let state = controller.start().await?;
//! println!("page settled in {state:?}");
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod controller;
pub mod error;
pub mod network;
pub mod state;
pub mod types;
pub mod view;

// Re-exports for convenience
pub use controller::{SessionController, FETCH_ERROR_MESSAGE, INVALID_LINK_MESSAGE};
pub use error::ClientError;
pub use network::{HttpNetworkService, NetworkService, SessionStatus};
pub use state::{allowed_events, transition, SessionEvent, SessionState, StateError};
pub use types::{ClientConfig, Platform, PostRecord, PostRow};
pub use view::View;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the client core
    pub use crate::{
        ClientConfig, ClientError, NetworkService, Platform, PostRecord, PostRow,
        SessionController, SessionEvent, SessionState, SessionStatus, View,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
