//! Client options and their resolved per-transport forms.

use serde::Deserialize;
use std::time::Duration;

pub(crate) const DEFAULT_BASE_URI: &str = "http://localhost";
pub(crate) const DEFAULT_AMQP_HOST: &str = "localhost";
pub(crate) const DEFAULT_AMQP_PORT: u16 = 5672;
pub(crate) const DEFAULT_AMQP_USER: &str = "guest";
pub(crate) const DEFAULT_AMQP_PASSWORD: &str = "guest";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Options mapping accepted when building a client.
///
/// Every field is optional. Unset or empty values fall back to the defaults,
/// so `ClientOptions` can be deserialized from a sparse config section:
///
/// ```rust
/// let options: frealtime::ClientOptions =
///     serde_json::from_str(r#"{"host": "rabbit.internal", "messagePrefix": "prod."}"#).unwrap();
/// assert_eq!(options.host.as_deref(), Some("rabbit.internal"));
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// HTTP base URI.
    pub base_uri: Option<String>,
    /// AMQP broker host.
    pub host: Option<String>,
    /// AMQP broker port.
    pub port: Option<u16>,
    /// AMQP user.
    pub user: Option<String>,
    /// AMQP password.
    pub password: Option<String>,
    /// Prefix prepended to message routing keys.
    #[serde(rename = "messagePrefix")]
    pub message_prefix: Option<String>,
    /// Prefix identifying the calling application.
    #[serde(rename = "appPrefix")]
    pub app_prefix: Option<String>,
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_uri", &self.base_uri)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("message_prefix", &self.message_prefix)
            .field("app_prefix", &self.app_prefix)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn non_empty(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

impl ClientOptions {
    /// Request timeout, defaulting to 60 seconds.
    pub fn timeout(&self) -> Duration {
        match self.timeout {
            Some(secs) if secs > 0 => Duration::from_secs(secs),
            _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Resolve the HTTP settings.
    pub fn http(&self) -> HttpOptions {
        HttpOptions {
            base_uri: non_empty(&self.base_uri, DEFAULT_BASE_URI)
                .trim_end_matches('/')
                .to_string(),
            timeout: self.timeout(),
        }
    }

    /// Resolve the AMQP settings.
    pub fn queue(&self) -> QueueOptions {
        QueueOptions {
            host: non_empty(&self.host, DEFAULT_AMQP_HOST),
            port: match self.port {
                Some(p) if p != 0 => p,
                _ => DEFAULT_AMQP_PORT,
            },
            user: non_empty(&self.user, DEFAULT_AMQP_USER),
            password: non_empty(&self.password, DEFAULT_AMQP_PASSWORD),
            message_prefix: non_empty(&self.message_prefix, ""),
            app_prefix: non_empty(&self.app_prefix, ""),
        }
    }
}

/// Resolved settings for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOptions {
    /// Base URI without a trailing slash.
    pub base_uri: String,
    /// Response timeout.
    pub timeout: Duration,
}

/// Resolved settings handed to a queue connector.
#[derive(Clone, PartialEq, Eq)]
pub struct QueueOptions {
    /// Broker host.
    pub host: String,
    /// Broker port.
    pub port: u16,
    /// Broker user.
    pub user: String,
    /// Broker password.
    pub password: String,
    /// Prefix prepended to message routing keys.
    pub message_prefix: String,
    /// Prefix identifying the calling application.
    pub app_prefix: String,
}

impl std::fmt::Debug for QueueOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueOptions")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("message_prefix", &self.message_prefix)
            .field("app_prefix", &self.app_prefix)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();

        let http = options.http();
        assert_eq!(http.base_uri, "http://localhost");
        assert_eq!(http.timeout, Duration::from_secs(60));

        let queue = options.queue();
        assert_eq!(queue.host, "localhost");
        assert_eq!(queue.port, 5672);
        assert_eq!(queue.user, "guest");
        assert_eq!(queue.password, "guest");
        assert_eq!(queue.message_prefix, "");
        assert_eq!(queue.app_prefix, "");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let options = ClientOptions {
            base_uri: Some(String::new()),
            host: Some(String::new()),
            port: Some(0),
            timeout: Some(0),
            ..Default::default()
        };
        assert_eq!(options.http().base_uri, "http://localhost");
        assert_eq!(options.timeout(), Duration::from_secs(60));
        assert_eq!(options.queue().host, "localhost");
        assert_eq!(options.queue().port, 5672);
    }

    #[test]
    fn test_deserialize_mapping() {
        let options: ClientOptions = serde_json::from_str(
            r#"{
                "base_uri": "https://api.example.com/",
                "port": 5673,
                "user": "svc",
                "appPrefix": "seo.",
                "timeout": 15,
                "unknown": true
            }"#,
        )
        .unwrap();

        assert_eq!(options.http().base_uri, "https://api.example.com");
        assert_eq!(options.http().timeout, Duration::from_secs(15));
        let queue = options.queue();
        assert_eq!(queue.port, 5673);
        assert_eq!(queue.user, "svc");
        assert_eq!(queue.password, "guest");
        assert_eq!(queue.app_prefix, "seo.");
    }

    #[test]
    fn test_client_options_debug_hides_password() {
        let options = ClientOptions {
            user: Some("svc".into()),
            password: Some("s3cret".into()),
            ..Default::default()
        };
        let debug = format!("{:?}", options);
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("svc"));
    }

    #[test]
    fn test_queue_options_debug_hides_password() {
        let options = ClientOptions {
            password: Some("s3cret".into()),
            ..Default::default()
        };
        let debug = format!("{:?}", options.queue());
        assert!(!debug.contains("s3cret"));
    }
}
