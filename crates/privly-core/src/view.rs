//! View abstraction
//!
//! The controller drives visible UI regions through this seam instead of
//! touching elements by identifier, so it is testable without a live
//! document.

use crate::types::{Platform, PostRow};
use privly_embed::PreviewFrame;

/// UI regions the controller drives
pub trait View: Send {
    /// Configure platform affordances on page ready
    ///
    /// A hosted platform hides the post-via-extension affordance; the
    /// extension platform wires it to the relay action.
    fn configure_platform(&mut self, platform: Platform);

    /// Show or hide the shared in-flight indicator
    fn set_loading(&mut self, loading: bool);

    /// Render the inline sign-in prompt linking to the collaborator's
    /// sign-in endpoint
    fn show_sign_in_prompt(&mut self, sign_in_url: &str);

    /// Set the shared message area to an error string
    fn show_error(&mut self, message: &str);

    /// Clear the shared message area
    fn clear_error(&mut self);

    /// Reveal the authenticated navigation chrome
    fn reveal_account_chrome(&mut self);

    /// Render the post table, one row per record
    fn render_posts(&mut self, rows: &[PostRow]);

    /// Install or update the preview frame
    fn set_preview(&mut self, frame: &PreviewFrame);
}
