//! Order-preserving query-string codec
//!
//! Parses `key=value` fragments into a mapping and encodes them back.
//! Decoding never fails: a malformed percent-escape is kept as the raw
//! text of that value rather than aborting the whole parse.

use crate::error::ParamError;
use indexmap::IndexMap;
use url::form_urlencoded;

/// Decoded query-string parameters
///
/// Preserves insertion order and the raw fragment the mapping was decoded
/// from, since generated preview sources must carry the original query
/// string verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Fragment as received, without the leading `?`
    raw: String,
    /// Decoded key/value pairs (last occurrence of a key wins)
    values: IndexMap<String, String>,
}

impl QueryParams {
    /// Parse a query-string fragment
    ///
    /// Accepts a bare fragment (`a=1&b=2`), a fragment with a leading `?`,
    /// or a full URL (everything through the first `?` is ignored).
    /// Malformed percent-escapes are left as-is in the decoded value.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let fragment = match input.find('?') {
            Some(idx) => &input[idx + 1..],
            None => input,
        };

        let mut values = IndexMap::new();
        for (key, value) in form_urlencoded::parse(fragment.as_bytes()) {
            values.insert(key.into_owned(), value.into_owned());
        }

        Self {
            raw: fragment.to_string(),
            values,
        }
    }

    /// Build parameters from decoded pairs
    #[must_use]
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let values: IndexMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let raw = encode_pairs(&values);
        Self { raw, values }
    }

    /// Get a decoded value by key
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get a decoded value by key, or a [`ParamError::MissingParam`]
    ///
    /// # Errors
    /// Returns an error when the key is absent. The codec itself considers
    /// no key required; this is a convenience for callers that do.
    pub fn require(&self, key: &str) -> Result<&str, ParamError> {
        self.get(key)
            .ok_or_else(|| ParamError::MissingParam(key.to_string()))
    }

    /// Extract a sub-key from a value that embeds a nested URL
    ///
    /// When a parameter's value is itself a URL carrying its own
    /// `?`-delimited parameter set, look up `sub_key` inside that nested
    /// set. Returns `None` if the key is absent or carries no nested query.
    #[must_use]
    pub fn nested(&self, key: &str, sub_key: &str) -> Option<String> {
        let value = self.get(key)?;
        let idx = value.find('?')?;
        Self::parse(&value[idx + 1..])
            .get(sub_key)
            .map(ToString::to_string)
    }

    /// The raw fragment this mapping was decoded from (no leading `?`)
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Encode the decoded pairs back into a query-string fragment
    #[must_use]
    pub fn encode(&self) -> String {
        encode_pairs(&self.values)
    }

    /// Number of decoded parameters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no parameters were decoded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate decoded pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn encode_pairs(values: &IndexMap<String, String>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in values {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn parse_bare_fragment() {
        let params = QueryParams::parse("privlyApp=message&id=42");
        assert_eq!(params.get("privlyApp"), Some("message"));
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn parse_full_url() {
        let params = QueryParams::parse("https://priv.ly/posts/3?privlyApp=message&k=v");
        assert_eq!(params.get("privlyApp"), Some("message"));
        assert_eq!(params.raw(), "privlyApp=message&k=v");
    }

    #[test]
    fn parse_leading_question_mark() {
        let params = QueryParams::parse("?a=1");
        assert_eq!(params.get("a"), Some("1"));
    }

    #[test]
    fn percent_decoding() {
        let params = QueryParams::parse("msg=hello%20world");
        assert_eq!(params.get("msg"), Some("hello world"));
    }

    #[test]
    fn malformed_escape_kept_raw() {
        // Invalid percent-escapes must not abort the parse
        let params = QueryParams::parse("msg=broken%ZZtail&ok=1");
        assert_eq!(params.get("msg"), Some("broken%ZZtail"));
        assert_eq!(params.get("ok"), Some("1"));
    }

    #[test]
    fn missing_key_is_callers_error() {
        let params = QueryParams::parse("a=1");
        assert_eq!(params.get("b"), None);
        assert_eq!(
            params.require("b"),
            Err(crate::ParamError::MissingParam("b".to_string()))
        );
    }

    #[test]
    fn nested_url_sub_key() {
        let params = QueryParams::parse(
            "privlyApp=message&privlyOriginalURL=https%3A%2F%2Fpriv.ly%2Fposts%2F9%3FprivlyDataURL%3Dabc",
        );
        assert_eq!(
            params.nested("privlyOriginalURL", "privlyDataURL").as_deref(),
            Some("abc")
        );
        assert_eq!(params.nested("privlyApp", "anything"), None);
    }

    #[test]
    fn last_occurrence_wins() {
        let params = QueryParams::parse("a=1&a=2");
        assert_eq!(params.get("a"), Some("2"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn encode_preserves_order() {
        let params = QueryParams::from_pairs([("b", "2"), ("a", "1")]);
        assert_eq!(params.encode(), "b=2&a=1");
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            pairs in proptest::collection::vec(
                ("[a-zA-Z][a-zA-Z0-9]{0,8}", "[^&=?]{0,16}"),
                1..6,
            )
        ) {
            let original = QueryParams::from_pairs(pairs);
            let decoded = QueryParams::parse(&original.encode());
            prop_assert_eq!(original, decoded);
        }
    }
}
