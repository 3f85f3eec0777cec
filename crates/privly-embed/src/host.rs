//! Replace-on-write owner of the current preview frame

use crate::frame::PreviewFrame;

/// Owns the at-most-one current preview frame
///
/// Constructing a new preview always fully replaces the old frame, so the
/// host never holds partial state.
#[derive(Debug, Default)]
pub struct FrameHost {
    current: Option<PreviewFrame>,
}

impl FrameHost {
    /// Create an empty host
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new frame, returning the one it displaced
    pub fn replace(&mut self, frame: PreviewFrame) -> Option<PreviewFrame> {
        self.current.replace(frame)
    }

    /// Current frame, if one is installed
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&PreviewFrame> {
        self.current.as_ref()
    }

    /// Apply a height to the current frame
    ///
    /// Returns `false` (and does nothing) when no frame is installed.
    pub fn apply_height(&mut self, px: u32) -> bool {
        match self.current.as_mut() {
            Some(frame) => {
                frame.set_height(px);
                true
            }
            None => false,
        }
    }

    /// Remove the current frame
    pub fn clear(&mut self) -> Option<PreviewFrame> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use privly_params::QueryParams;

    fn frame(app: &str) -> PreviewFrame {
        let params = QueryParams::from_pairs([("privlyApp", app)]);
        PreviewFrame::build(&params, format!("https://priv.ly/{app}")).unwrap()
    }

    #[test]
    fn replace_displaces_old_frame() {
        let mut host = FrameHost::new();
        assert!(host.replace(frame("message")).is_none());

        let displaced = host.replace(frame("posts")).unwrap();
        assert_eq!(displaced.app().as_str(), "message");
        assert_eq!(host.current().unwrap().app().as_str(), "posts");
    }

    #[test]
    fn apply_height_without_frame_is_noop() {
        let mut host = FrameHost::new();
        assert!(!host.apply_height(240));
    }

    #[test]
    fn apply_height_hits_current_frame() {
        let mut host = FrameHost::new();
        host.replace(frame("message"));

        assert!(host.apply_height(240));
        assert_eq!(host.current().unwrap().height_px(), Some(240));
    }
}
