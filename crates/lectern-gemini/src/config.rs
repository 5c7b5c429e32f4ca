//! Public configuration for the Gemini client.

use std::time::Duration;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default speech model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Configuration for the Gemini client.
///
/// # Example
///
/// ```
/// use lectern_gemini::GeminiConfig;
/// use std::time::Duration;
///
/// let config = GeminiConfig::new()
///     .with_api_key("secret")
///     .with_timeout(Duration::from_secs(60));
/// assert!(config.has_api_key());
/// ```
#[derive(Clone)]
pub struct GeminiConfig {
    /// API root, without the `/models/...` suffix
    pub(crate) base_url: String,
    /// Model used for speech generation
    pub(crate) model: String,
    /// API key sent as `x-goog-api-key`
    pub(crate) api_key: Option<String>,
    /// Request timeout; `None` waits for as long as the service takes
    pub(crate) timeout: Option<Duration>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: None,
            user_agent: concat!("lectern/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl GeminiConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root.
    ///
    /// Defaults to `https://generativelanguage.googleapis.com/v1beta`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the speech model.
    ///
    /// Defaults to `gemini-2.5-flash-preview-tts`.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set an optional API key. Blank keys count as missing.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Set a request timeout. No timeout is applied by default.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model(), "gemini-2.5-flash-preview-tts");
        assert!(!config.has_api_key());
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("lectern/"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeminiConfig::new()
            .with_base_url("http://localhost:9000/v1")
            .with_model("custom-tts")
            .with_api_key("secret")
            .with_timeout(Duration::from_secs(90))
            .with_user_agent("test-agent");

        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.model, "custom-tts");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Some(Duration::from_secs(90)));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        assert!(!GeminiConfig::new().with_optional_api_key(Some("  ".to_string())).has_api_key());
        assert!(!GeminiConfig::new().with_optional_api_key(None).has_api_key());
        assert!(
            GeminiConfig::new()
                .with_optional_api_key(Some("k".to_string()))
                .has_api_key()
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", GeminiConfig::new().with_api_key("top-secret"));
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
