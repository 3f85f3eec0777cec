//! Link rewrite rules
//!
//! The content server hands out machine-facing JSON URLs; the management
//! links shown to people point at the HTML rendition of the same resource.

/// Derive a human-navigable management URL from a machine-facing one
///
/// Rewrites the format indicator from JSON to HTML in whichever form the
/// URL carries it: the query-parameter form (`format=json` → `format=html`)
/// or the path-suffix form (`.json` → `.html`). All other parameters are
/// left untouched. A URL with neither form is returned unchanged.
#[must_use]
pub fn manage_url(url: &str) -> String {
    if url.contains("format=json") {
        url.replacen("format=json", "format=html", 1)
    } else if url.contains(".json") {
        url.replacen(".json", ".html", 1)
    } else {
        url.to_string()
    }
}
