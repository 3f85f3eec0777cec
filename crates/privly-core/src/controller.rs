//! UI state controller
//!
//! Sequences the page through login-check, login-failure, post-listing,
//! and post-submission states. Collaborators (view, network service,
//! extension bridge) are injected; every remote failure is converted into
//! a view message here rather than propagated.

use crate::error::ClientError;
use crate::network::{NetworkService, SessionStatus};
use crate::state::{transition, SessionEvent, SessionState, StateError};
use crate::types::{ClientConfig, PostRow};
use crate::view::View;
use privly_bridge::ExtensionBridge;
use privly_embed::{FrameHost, PreviewFrame, ResizeListener};
use privly_params::QueryParams;

/// Static message shown when the post list cannot be fetched
pub const FETCH_ERROR_MESSAGE: &str =
    "There was an error fetching your posts. Reload the page to try again.";

/// Static message shown when a selected link fails validation
pub const INVALID_LINK_MESSAGE: &str = "The selected link is not a valid Privly application.";

/// Drives the page through its session states
pub struct SessionController<V, N, B> {
    config: ClientConfig,
    state: SessionState,
    view: V,
    network: N,
    bridge: B,
    frames: FrameHost,
    resize: ResizeListener,
}

impl<V, N, B> SessionController<V, N, B>
where
    V: View,
    N: NetworkService,
    B: ExtensionBridge,
{
    /// Create a controller in the initial `PendingLogin` state
    #[must_use]
    pub fn new(config: ClientConfig, view: V, network: N, bridge: B) -> Self {
        let resize = ResizeListener::new(config.page_origin.clone());
        Self {
            config,
            state: SessionState::PendingLogin,
            view,
            network,
            bridge,
            frames: FrameHost::new(),
            resize,
        }
    }

    /// Current session state
    #[inline]
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Access the injected view (used by tests and CLI hosts)
    #[inline]
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Page-load flow
    ///
    /// Configures platform affordances, announces presence to the host
    /// extension (the inbound hooks must already be registered by the
    /// embedding host), checks the session, then either fetches and renders
    /// the post list or shows the sign-in prompt.
    ///
    /// Remote failures end in `Ok` with a failure state; `Err` means an
    /// illegal transition, which is a bug in the calling sequence.
    ///
    /// # Errors
    /// Returns [`ClientError::State`] on an illegal transition.
    pub async fn start(&mut self) -> Result<SessionState, ClientError> {
        self.view.configure_platform(self.config.platform);
        self.bridge.notify_presence().await;

        self.view.set_loading(true);
        let status = self.network.check_session().await;
        self.view.set_loading(false);

        match status {
            Ok(SessionStatus::SignedIn) => {
                self.apply(SessionEvent::SessionConfirmed)?;
                self.view.reveal_account_chrome();
                self.refresh_posts().await
            }
            rejected => {
                // A network failure during the session check is
                // indistinguishable from "not authenticated"
                if let Err(e) = rejected {
                    tracing::warn!(error = %e, "session check errored, treating as signed out");
                }
                self.apply(SessionEvent::SessionRejected)?;
                self.view.show_sign_in_prompt(&self.config.sign_in_url());
                Ok(self.state)
            }
        }
    }

    /// Re-fetch the post list after the create-post flow
    ///
    /// # Errors
    /// Returns [`ClientError::State`] when no listing is active.
    pub async fn submit(&mut self) -> Result<SessionState, ClientError> {
        self.apply(SessionEvent::SubmitRequested)?;
        self.refresh_posts().await
    }

    /// Preview a post: decode its link, validate the application name, and
    /// install the preview frame
    ///
    /// Validation failures are surfaced through the view rather than
    /// dropped silently.
    ///
    /// # Errors
    /// Returns the validation failure after surfacing it.
    pub fn preview(&mut self, post_url: &str) -> Result<(), ClientError> {
        let params = QueryParams::parse(post_url);
        match PreviewFrame::build(&params, post_url) {
            Ok(frame) => {
                tracing::info!(app = %frame.app(), "installing preview frame");
                self.view.set_preview(&frame);
                self.frames.replace(frame);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, post_url, "refusing preview");
                self.view.show_error(INVALID_LINK_MESSAGE);
                Err(e.into())
            }
        }
    }

    /// Handle a window resize message from the embedded document
    ///
    /// Returns `true` when a height was applied to the current frame;
    /// foreign origins, malformed payloads, and the no-frame case are
    /// no-ops.
    pub fn handle_resize(&mut self, payload: &str, origin: &str) -> bool {
        let Ok(height) = self.resize.accept(payload, origin) else {
            return false;
        };
        if !self.frames.apply_height(height) {
            return false;
        }
        if let Some(frame) = self.frames.current() {
            self.view.set_preview(frame);
        }
        true
    }

    /// Relay the current preview's canonical href to the host extension
    ///
    /// Returns `false` when nothing is previewed.
    pub async fn relay_current(&self) -> bool {
        match self.frames.current() {
            Some(frame) => {
                self.bridge.relay_chosen_url(frame.canonical_href()).await;
                true
            }
            None => false,
        }
    }

    /// Currently installed preview frame, if any
    #[inline]
    #[must_use]
    pub fn current_preview(&self) -> Option<&PreviewFrame> {
        self.frames.current()
    }

    async fn refresh_posts(&mut self) -> Result<SessionState, ClientError> {
        self.view.clear_error();
        self.view.set_loading(true);
        let result = self.network.fetch_posts().await;
        self.view.set_loading(false);

        match result {
            Ok(records) => {
                let rows: Vec<PostRow> = records.iter().map(PostRow::from_record).collect();
                self.apply(SessionEvent::PostsFetched)?;
                tracing::info!(count = rows.len(), "rendering post list");
                self.view.render_posts(&rows);
                Ok(self.state)
            }
            Err(e) => {
                tracing::warn!(error = %e, "post list fetch failed");
                self.apply(SessionEvent::FetchFailed)?;
                self.view.show_error(FETCH_ERROR_MESSAGE);
                Ok(self.state)
            }
        }
    }

    fn apply(&mut self, event: SessionEvent) -> Result<(), StateError> {
        let next = transition(self.state, event)?;
        tracing::info!(from = ?self.state, ?event, to = ?next, "session transition");
        self.state = next;
        Ok(())
    }
}
