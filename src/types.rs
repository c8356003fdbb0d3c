//! API types for the Future Realtime client.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transport used to reach the API. Chosen once when the client is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plain HTTP requests against the API gateway.
    Http,
    /// RPC over an AMQP message queue.
    Amqp,
}

impl Protocol {
    /// The protocol name as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Amqp => "amqp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Protocol::Http),
            "amqp" => Ok(Protocol::Amqp),
            other => Err(Error::InvalidProtocol(other.to_string())),
        }
    }
}

impl From<Protocol> for String {
    fn from(p: Protocol) -> Self {
        p.as_str().to_string()
    }
}

/// Message priority for the queue transport. Has no effect over HTTP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Background work.
    Low,
    /// Regular requests.
    #[default]
    Normal,
    /// Interactive requests.
    High,
}

impl Priority {
    /// AMQP message priority.
    pub fn value(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Normal => 5,
            Priority::High => 9,
        }
    }
}

/// Request for a Google search.
#[derive(Debug, Clone, Default)]
pub struct GoogleSerpRequest {
    /// Search query.
    pub query: String,
    /// Interface language.
    pub lang: Option<String>,
    /// Geo location.
    pub geo: Option<String>,
    /// Search vertical.
    pub search_type: Option<String>,
    /// Results page number.
    pub page: Option<u32>,
    /// Documents per page.
    pub numdoc: Option<u32>,
}

impl GoogleSerpRequest {
    /// Request with only a query set.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Request for a Yandex search.
#[derive(Debug, Clone, Default)]
pub struct YandexSerpRequest {
    /// Search query.
    pub query: String,
    /// Yandex region id.
    pub region: Option<String>,
    /// Top-level domain of the Yandex frontend.
    pub tld: Option<String>,
    /// Use the Yandex XML backend instead of the HTML one.
    pub xml: bool,
}

impl YandexSerpRequest {
    /// Request with only a query set.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Default page load timeout for browser rendering, in seconds.
pub const DEFAULT_BROWSER_TIMEOUT_SECS: u32 = 30;

/// Request for headless browser rendering of a page.
#[derive(Debug, Clone)]
pub struct BrowserDataRequest {
    /// Page URL.
    pub url: String,
    /// Keywords to look up on the page.
    pub keywords: Option<String>,
    /// User-Agent sent by the browser.
    pub user_agent: String,
    /// Page load timeout in seconds.
    pub timeout: u32,
    /// Referer sent by the browser.
    pub referer: String,
}

impl BrowserDataRequest {
    /// Request with default browser settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            keywords: None,
            user_agent: String::new(),
            timeout: DEFAULT_BROWSER_TIMEOUT_SECS,
            referer: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_from_str() {
        assert_eq!("http".parse::<Protocol>().unwrap(), Protocol::Http);
        assert_eq!("amqp".parse::<Protocol>().unwrap(), Protocol::Amqp);

        match "foobar".parse::<Protocol>() {
            Err(Error::InvalidProtocol(p)) => assert_eq!(p, "foobar"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!("HTTP".parse::<Protocol>().is_err());
    }

    #[test]
    fn test_priority_default() {
        assert_eq!(Priority::default(), Priority::Normal);
        assert!(Priority::Low.value() < Priority::Normal.value());
        assert!(Priority::Normal.value() < Priority::High.value());
    }

    #[test]
    fn test_browser_data_defaults() {
        let req = BrowserDataRequest::new("http://example.com");
        assert_eq!(req.timeout, 30);
        assert!(req.user_agent.is_empty());
        assert!(req.referer.is_empty());
        assert!(req.keywords.is_none());
    }
}
