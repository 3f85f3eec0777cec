//! Preview frame descriptor
//!
//! A [`PreviewFrame`] is the data behind the single iframe that renders a
//! selected post. Construction is the security gate: the application name
//! is validated before it becomes a path segment of the frame source.

use crate::error::EmbedError;
use privly_params::{AppName, QueryParams};
use serde::{Deserialize, Serialize};

/// Fixed element identifier for the preview frame
///
/// At most one frame exists at a time; a new preview replaces any element
/// carrying this identifier.
pub const PREVIEW_FRAME_ID: &str = "post-preview-frame";

/// Descriptor for the single preview iframe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewFrame {
    /// Validated application name (drives the source path and title text)
    app: AppName,
    /// Frame source: `../{app}/show.html?{originalParams}`
    src: String,
    /// Original link target, relayed when the user posts the content
    canonical_href: String,
    /// Height applied from the resize channel, if any
    height_px: Option<u32>,
}

impl PreviewFrame {
    /// Build a frame from decoded embed parameters
    ///
    /// The original query string is carried verbatim into the frame source
    /// so the sub-application sees exactly the parameters of the link.
    ///
    /// # Errors
    /// - [`EmbedError::Param`] when `privlyApp` is absent or fails the
    ///   letters-only gate. No frame is constructed in that case.
    pub fn build(
        params: &QueryParams,
        canonical_href: impl Into<String>,
    ) -> Result<Self, EmbedError> {
        let app: AppName = params.require("privlyApp")?.parse()?;
        let src = format!("../{}/show.html?{}", app, params.raw());

        Ok(Self {
            app,
            src,
            canonical_href: canonical_href.into(),
            height_px: None,
        })
    }

    /// Element identifier (shared by every preview frame)
    #[inline]
    #[must_use]
    pub fn id(&self) -> &'static str {
        PREVIEW_FRAME_ID
    }

    /// Application rendering the content
    #[inline]
    #[must_use]
    pub fn app(&self) -> &AppName {
        &self.app
    }

    /// Frame source path
    #[inline]
    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Original link target
    #[inline]
    #[must_use]
    pub fn canonical_href(&self) -> &str {
        &self.canonical_href
    }

    /// Current height, if a resize signal has been applied
    #[inline]
    #[must_use]
    pub fn height_px(&self) -> Option<u32> {
        self.height_px
    }

    /// Apply a height from the resize channel
    #[inline]
    pub fn set_height(&mut self, px: u32) {
        self.height_px = Some(px);
    }

    /// DOM attributes for a renderer, in insertion order
    ///
    /// Scrolling and borders are suppressed and the frame is marked
    /// eligible for height-resize signals.
    #[must_use]
    pub fn dom_attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", PREVIEW_FRAME_ID.to_string()),
            ("src", self.src.clone()),
            ("scrolling", "no".to_string()),
            ("frameborder", "0".to_string()),
            ("data-privly-accept-resize", "true".to_string()),
            ("data-canonical-href", self.canonical_href.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn src_composed_exactly() {
        let params = QueryParams::parse("privlyApp=message&privlyDataURL=abc");
        let frame = PreviewFrame::build(&params, "https://priv.ly/posts/1").unwrap();

        assert_eq!(
            frame.src(),
            "../message/show.html?privlyApp=message&privlyDataURL=abc"
        );
        assert_eq!(frame.app().as_str(), "message");
        assert_eq!(frame.canonical_href(), "https://priv.ly/posts/1");
    }

    #[test]
    fn refuses_invalid_app() {
        for bad in ["foo/bar", "<script>", ""] {
            let params = QueryParams::from_pairs([("privlyApp", bad), ("x", "1")]);
            assert!(PreviewFrame::build(&params, "href").is_err(), "{bad:?}");
        }
    }

    #[test]
    fn refuses_missing_app() {
        let params = QueryParams::parse("privlyDataURL=abc");
        assert!(matches!(
            PreviewFrame::build(&params, "href"),
            Err(EmbedError::Param(_))
        ));
    }

    #[test]
    fn attributes_carry_canonical_href() {
        let params = QueryParams::parse("privlyApp=message");
        let frame = PreviewFrame::build(&params, "https://priv.ly/posts/7").unwrap();

        let attrs = frame.dom_attributes();
        assert!(attrs.contains(&("data-canonical-href", "https://priv.ly/posts/7".to_string())));
        assert!(attrs.contains(&("scrolling", "no".to_string())));
    }

    #[test]
    fn height_applies() {
        let params = QueryParams::parse("privlyApp=message");
        let mut frame = PreviewFrame::build(&params, "href").unwrap();

        assert_eq!(frame.height_px(), None);
        frame.set_height(240);
        assert_eq!(frame.height_px(), Some(240));
    }
}
