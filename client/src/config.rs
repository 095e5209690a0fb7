//! Client runtime configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host shell renders the API base URL into
//! `<meta name="docchat-api-url" content="...">`; the browser reads it back
//! once at startup so one build works against any API deployment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `name` of the meta tag carrying the API base URL.
pub const API_URL_META_NAME: &str = "docchat-api-url";

/// API base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the remote document API, without a trailing `/`.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build from a raw base URL, trimming whitespace and trailing slashes.
    /// Blank input falls back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn from_base_url(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self { api_base_url: trimmed.to_owned() }
        }
    }

    /// Read the configuration from the page's meta tag.
    ///
    /// Returns the default outside the browser or when the tag is missing.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_URL_META_NAME}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match content {
                Some(raw) => Self::from_base_url(&raw),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
