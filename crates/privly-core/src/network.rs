//! Network service seam and its HTTP implementation
//!
//! The controller never talks HTTP directly; it goes through
//! [`NetworkService`] so tests can substitute a fake collaborator.

use crate::error::ClientError;
use crate::types::{ClientConfig, PostRecord};
use async_trait::async_trait;
use std::time::Duration;

/// Outcome of a session check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The collaborator reports an authenticated session
    SignedIn,
    /// The collaborator reports no session
    SignedOut,
}

/// Authenticated requests against the content server
#[async_trait]
pub trait NetworkService: Send + Sync {
    /// Report login/session status
    ///
    /// # Errors
    /// Transport failures are returned as errors; the controller collapses
    /// them with `SignedOut` into the same rejection path.
    async fn check_session(&self) -> Result<SessionStatus, ClientError>;

    /// Fetch the user's post list
    ///
    /// # Errors
    /// Returns [`ClientError::Fetch`] when the request or decode fails.
    async fn fetch_posts(&self) -> Result<Vec<PostRecord>, ClientError>;
}

/// Reqwest-backed network service
#[derive(Debug, Clone)]
pub struct HttpNetworkService {
    client: reqwest::Client,
    posts_url: String,
    session_url: String,
}

impl HttpNetworkService {
    /// Build a service from client configuration
    ///
    /// # Errors
    /// Returns [`ClientError::Http`] when the underlying client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        Ok(Self {
            client,
            posts_url: config.posts_url(),
            session_url: config.session_url(),
        })
    }
}

#[async_trait]
impl NetworkService for HttpNetworkService {
    async fn check_session(&self) -> Result<SessionStatus, ClientError> {
        let response = self
            .client
            .get(&self.session_url)
            .send()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))?;

        if response.status().is_success() {
            tracing::debug!("session check succeeded");
            Ok(SessionStatus::SignedIn)
        } else {
            tracing::debug!(status = %response.status(), "session check rejected");
            Ok(SessionStatus::SignedOut)
        }
    }

    async fn fetch_posts(&self) -> Result<Vec<PostRecord>, ClientError> {
        let response = self
            .client
            .get(&self.posts_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::Fetch(format!(
                "server answered {}",
                response.status()
            )));
        }

        response
            .json::<Vec<PostRecord>>()
            .await
            .map_err(|e| ClientError::Fetch(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_service_builds_from_config() {
        let config = ClientConfig::new().with_domain("https://priv.ly");
        let service = HttpNetworkService::new(&config).unwrap();
        assert_eq!(service.posts_url, "https://priv.ly/posts");
        assert_eq!(service.session_url, "https://priv.ly/posts/user_account_data");
    }
}
