//! Query string rendering

use url::form_urlencoded;

/// Renders parameters as an `application/x-www-form-urlencoded` query
pub struct QueryRenderer;

impl QueryRenderer {
    /// Encode pairs in the given order. Spaces become `+`, reserved bytes are
    /// percent-encoded with uppercase hex.
    pub fn encode(params: &[(&'static str, String)]) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish()
    }

    /// Append the encoded query to `endpoint`
    pub fn url(endpoint: &str, params: &[(&'static str, String)]) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}{}", endpoint, separator, Self::encode(params))
    }
}
