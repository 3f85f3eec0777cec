//! Core types for the Privly client
//!
//! Defines the fundamental types of the page:
//! - Client configuration
//! - Post records as the content server serves them
//! - Derived table rows for rendering

use chrono::{DateTime, Utc};
use privly_params::{manage_url, QueryParams};
use serde::{Deserialize, Serialize};

/// Platform hosting the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    /// Served by the content server itself; extension-dependent
    /// affordances are hidden
    Hosted,
    /// Embedded by the host browser extension
    Extension,
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Content server domain, no trailing slash
    pub domain: String,
    /// The hosting page's own origin (resize messages are checked
    /// against this)
    pub page_origin: String,
    /// Trusted origin of the host extension's inbound messages
    pub extension_origin: String,
    /// Platform hosting the page
    pub platform: Platform,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With content server domain
    #[inline]
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// With page origin
    #[inline]
    #[must_use]
    pub fn with_page_origin(mut self, origin: impl Into<String>) -> Self {
        self.page_origin = origin.into();
        self
    }

    /// With platform
    #[inline]
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Collaborator sign-in endpoint, linked from the sign-in prompt
    #[must_use]
    pub fn sign_in_url(&self) -> String {
        format!("{}/users/sign_in", self.domain)
    }

    /// Post listing endpoint
    #[must_use]
    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.domain)
    }

    /// Session/account status endpoint
    #[must_use]
    pub fn session_url(&self) -> String {
        format!("{}/posts/user_account_data", self.domain)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            domain: "https://privlyalpha.org".to_string(),
            page_origin: "https://privlyalpha.org".to_string(),
            extension_origin: "chrome-extension://privly".to_string(),
            platform: Platform::Hosted,
            request_timeout_secs: 30,
        }
    }
}

/// A post record as served by the content server
///
/// Received as an ordered sequence and never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
    /// Scheduled destruction time, if any
    #[serde(default)]
    pub burn_after_date: Option<DateTime<Utc>>,
    /// Application that renders this post
    pub privly_application: String,
    /// Whether the post is publicly visible
    pub public: bool,
    /// Link encoding the application and data parameters
    #[serde(rename = "privly_URL")]
    pub privly_url: String,
}

/// A table row derived from a post record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRow {
    /// "View" action target: the original privly link
    pub view_url: String,
    /// Human-navigable management link (JSON rewritten to HTML)
    pub manage_url: String,
    /// Application name shown in the table
    pub application: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
    /// Scheduled destruction time, if any
    pub burn_after_date: Option<DateTime<Utc>>,
    /// Visibility flag
    pub public: bool,
}

impl PostRow {
    /// Derive a row from a record
    ///
    /// The application name is taken from the link's `privlyApp` parameter
    /// when present, falling back to the record's own field.
    #[must_use]
    pub fn from_record(record: &PostRecord) -> Self {
        let params = QueryParams::parse(&record.privly_url);
        let application = params
            .get("privlyApp")
            .map_or_else(|| record.privly_application.clone(), ToString::to_string);

        Self {
            view_url: record.privly_url.clone(),
            manage_url: manage_url(&record.privly_url),
            application,
            created_at: record.created_at,
            updated_at: record.updated_at,
            burn_after_date: record.burn_after_date,
            public: record.public,
        }
    }
}
