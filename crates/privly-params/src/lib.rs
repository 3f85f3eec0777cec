//! Parameter codec for Privly links
//!
//! Provides the leaf building blocks for working with Privly URLs:
//! - [`QueryParams`]: order-preserving query-string parse/encode
//! - [`AppName`]: validated application-name newtype (letters only)
//! - [`manage_url`]: JSON-to-HTML link rewrite for management links

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod app_name;
pub mod error;
pub mod query;
pub mod rewrite;

pub use app_name::AppName;
pub use error::ParamError;
pub use query::QueryParams;
pub use rewrite::manage_url;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
