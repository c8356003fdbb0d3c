//! HTTP transport.

use crate::config::HttpOptions;
use crate::error::{Error, Result};
use crate::params::Params;
use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

/// Where the parameters of an HTTP request travel.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    /// Query string, used for `GET`.
    Query(&'a Params),
    /// Form-encoded body, used for everything else.
    Form(&'a Params),
}

/// Raw HTTP response as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Body text.
    pub body: String,
}

/// Minimal HTTP client used by the dispatcher.
///
/// Implementations must hand back non-2xx responses as regular responses;
/// status classification happens in the dispatcher. `Ok(None)` means the
/// transport produced no response object at all.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one request to `path` relative to the configured base URI.
    async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Payload<'_>,
    ) -> Result<Option<HttpResponse>>;
}

/// [`HttpTransport`] backed by `reqwest`.
///
/// Certificate verification is turned off, matching how the API gateways are
/// deployed behind self-signed certificates.
///
/// Operation paths are appended to the base URI, so a base URI of
/// `http://gateway/api` sends `/yandex/catalog` to `http://gateway/api/yandex/catalog`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
    base_uri: String,
}

impl ReqwestTransport {
    /// Build a transport for the given options.
    pub fn new(options: &HttpOptions, user_agent: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(true)
            .user_agent(user_agent)
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            http_client,
            base_uri: options.base_uri.clone(),
        })
    }

    /// Base URI requests are sent to.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Payload<'_>,
    ) -> Result<Option<HttpResponse>> {
        let url = format!("{}{}", self.base_uri, path);
        let mut req = self.http_client.request(method, &url);
        req = match payload {
            Payload::Query(params) => req.query(&params.to_pairs()),
            Payload::Form(params) => req.form(&params.to_pairs()),
        };

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                return Error::Timeout;
            }
            Error::Http(e)
        })?;

        let status = response.status().as_u16();
        debug!(url = %url, status = status, "Received response");

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                return Error::Timeout;
            }
            Error::Http(e)
        })?;

        Ok(Some(HttpResponse { status, body }))
    }
}
