use secrecy::{ExposeSecret, Secret};

use toprest_protocol::DEFAULT_GATEWAY_URL;

/// How the client decides that a syntactically-valid JSON body is actually
/// a failure. Two conventions exist in the gateway's lineage; the default
/// covers both.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FailureDetection {
    /// Only a `null` body is an error; the legacy envelope passes through
    /// as a success body.
    EmptyBodyOnly,
    /// A `null` body is an error, and so is the legacy
    /// `response.flag == "failure"` envelope.
    #[default]
    FlagEnvelope,
}

/// Immutable per-client configuration, fixed at construction.
#[derive(Clone)]
pub struct ClientConfig {
    /// Gateway router endpoint.
    pub url: String,
    /// Application key.
    pub app_key: String,
    /// Application secret; brackets the signature base string.
    pub app_secret: Secret<String>,
    /// Target application key; sent as the empty string when unset.
    pub target_app_key: String,
    /// Failure-detection convention for parsed bodies.
    pub failure_detection: FailureDetection,
}

impl ClientConfig {
    /// Config for the default production endpoint.
    #[must_use]
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            url: DEFAULT_GATEWAY_URL.to_string(),
            app_key: app_key.into(),
            app_secret: Secret::new(app_secret.into()),
            target_app_key: String::new(),
            failure_detection: FailureDetection::default(),
        }
    }

    /// Point the client at a different router endpoint.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Call on behalf of another application.
    #[must_use]
    pub fn with_target_app_key(mut self, target_app_key: impl Into<String>) -> Self {
        self.target_app_key = target_app_key.into();
        self
    }

    /// Override the failure-detection convention.
    #[must_use]
    pub fn with_failure_detection(mut self, failure_detection: FailureDetection) -> Self {
        self.failure_detection = failure_detection;
        self
    }

    pub(crate) fn expose_secret(&self) -> &str {
        self.app_secret.expose_secret()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("app_key", &self.app_key)
            .field("app_secret", &"[REDACTED]")
            .field("target_app_key", &self.target_app_key)
            .field("failure_detection", &self.failure_detection)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_production_router() {
        let config = ClientConfig::new("key", "secret");
        assert_eq!(config.url, DEFAULT_GATEWAY_URL);
        assert_eq!(config.target_app_key, "");
        assert_eq!(config.failure_detection, FailureDetection::FlagEnvelope);
    }

    #[test]
    fn builder_overrides_apply() {
        let config = ClientConfig::new("key", "secret")
            .with_url("http://localhost:8080/router/rest")
            .with_target_app_key("other-app")
            .with_failure_detection(FailureDetection::EmptyBodyOnly);
        assert_eq!(config.url, "http://localhost:8080/router/rest");
        assert_eq!(config.target_app_key, "other-app");
        assert_eq!(config.failure_detection, FailureDetection::EmptyBodyOnly);
    }

    #[test]
    fn debug_redacts_the_secret() {
        let rendered = format!("{:?}", ClientConfig::new("key", "hunter2"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }
}
