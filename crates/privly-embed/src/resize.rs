//! Cross-document resize protocol
//!
//! The embedded document announces its rendered height with a window
//! message whose payload is a comma-separated string; the second field is
//! a pixel height. Only messages from the hosting page's own origin are
//! honored, and the height field must parse as a number before it is
//! applied.

use crate::error::EmbedError;

/// Origin-checked parser for resize messages
#[derive(Debug, Clone)]
pub struct ResizeListener {
    /// The hosting page's own origin; everything else is spoofable
    page_origin: String,
}

impl ResizeListener {
    /// Create a listener bound to the hosting page's origin
    #[inline]
    #[must_use]
    pub fn new(page_origin: impl Into<String>) -> Self {
        Self {
            page_origin: page_origin.into(),
        }
    }

    /// Validate a resize message and extract the height
    ///
    /// # Errors
    /// - [`EmbedError::ForeignOrigin`] when the message origin differs
    ///   from the page's own
    /// - [`EmbedError::MalformedResize`] when the second field is missing
    ///   or not a number
    pub fn accept(&self, payload: &str, origin: &str) -> Result<u32, EmbedError> {
        if origin != self.page_origin {
            tracing::warn!(origin, "dropping resize message from foreign origin");
            return Err(EmbedError::ForeignOrigin {
                origin: origin.to_string(),
            });
        }

        let mut fields = payload.splitn(3, ',');
        let _tag = fields.next();
        let height = fields
            .next()
            .ok_or_else(|| EmbedError::MalformedResize(payload.to_string()))?;

        height.trim().parse::<u32>().map_err(|_| {
            tracing::warn!(payload, "dropping resize message with non-numeric height");
            EmbedError::MalformedResize(payload.to_string())
        })
    }
}
