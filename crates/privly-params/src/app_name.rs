//! Validated application names
//!
//! Provides [`AppName`] for identifying which sub-application renders a
//! piece of content. The name is interpolated into a resource path, so
//! construction is gated to ASCII letters only.

use crate::error::ParamError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Letters-only application name
///
/// The name becomes a path segment of the generated preview source
/// (`../{app}/show.html`), so anything outside `[a-zA-Z]+` is rejected at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppName(String);

impl AppName {
    /// Get the name as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether a candidate would pass the gate
    #[inline]
    #[must_use]
    pub fn is_valid(candidate: &str) -> bool {
        !candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_alphabetic())
    }
}

impl FromStr for AppName {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ParamError::InvalidAppName(s.to_string()))
        }
    }
}

impl TryFrom<String> for AppName {
    type Error = ParamError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AppName> for String {
    fn from(name: AppName) -> Self {
        name.0
    }
}

impl Display for AppName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
