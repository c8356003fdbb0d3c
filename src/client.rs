//! Main Future Realtime client implementation.

use crate::config::ClientOptions;
use crate::dispatcher::{Dispatcher, Transport};
use crate::error::{Error, Result};
use crate::http::{HttpTransport, ReqwestTransport};
use crate::operation::{self, Operation};
use crate::params::Params;
use crate::queue::QueueConnector;
use crate::types::*;
use crate::version::build_user_agent;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Builder for constructing a [`Client`].
pub struct ClientBuilder {
    protocol: String,
    options: ClientOptions,
    timeout: Option<Duration>,
    user_agent_suffix: Option<String>,
    http_transport: Option<Arc<dyn HttpTransport>>,
    queue_connector: Option<Box<dyn QueueConnector>>,
}

impl ClientBuilder {
    /// Create a new client builder for the given protocol (`"http"` or `"amqp"`).
    pub fn new(protocol: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            options: ClientOptions::default(),
            timeout: None,
            user_agent_suffix: None,
            http_transport: None,
            queue_connector: None,
        }
    }

    /// Replace all options with a prepared mapping.
    pub fn options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the HTTP base URI.
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.options.base_uri = Some(uri.into());
        self
    }

    /// Set the AMQP broker host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.options.host = Some(host.into());
        self
    }

    /// Set the AMQP broker port.
    pub fn port(mut self, port: u16) -> Self {
        self.options.port = Some(port);
        self
    }

    /// Set the AMQP user.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.options.user = Some(user.into());
        self
    }

    /// Set the AMQP password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.options.password = Some(password.into());
        self
    }

    /// Set the routing key prefix for published messages.
    pub fn message_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.message_prefix = Some(prefix.into());
        self
    }

    /// Set the application prefix.
    pub fn app_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.app_prefix = Some(prefix.into());
        self
    }

    /// Set the request timeout. Overrides `timeout` from the options.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom User-Agent suffix.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Use a custom HTTP transport instead of the default `reqwest` one.
    pub fn http_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.http_transport = Some(transport);
        self
    }

    /// Set the connector that opens the queue transport. Required for `amqp`.
    pub fn queue_connector(mut self, connector: impl QueueConnector + 'static) -> Self {
        self.queue_connector = Some(Box::new(connector));
        self
    }

    /// Build the client.
    ///
    /// The protocol is validated before any transport is created.
    pub fn build(self) -> Result<Client> {
        let protocol: Protocol = self.protocol.parse()?;
        let timeout = self.timeout.unwrap_or_else(|| self.options.timeout());

        let transport = match protocol {
            Protocol::Http => {
                let http: Arc<dyn HttpTransport> = match self.http_transport {
                    Some(transport) => transport,
                    None => {
                        let mut http_options = self.options.http();
                        http_options.timeout = timeout;
                        let user_agent = build_user_agent(self.user_agent_suffix.as_deref());
                        debug!(base_uri = %http_options.base_uri, "Creating HTTP transport");
                        Arc::new(ReqwestTransport::new(&http_options, &user_agent)?)
                    }
                };
                Transport::Http(http)
            }
            Protocol::Amqp => {
                let connector = self.queue_connector.ok_or_else(|| {
                    Error::Config("amqp protocol requires a queue connector".into())
                })?;
                let queue_options = self.options.queue();
                debug!(
                    host = %queue_options.host,
                    port = queue_options.port,
                    "Connecting queue transport"
                );
                Transport::Queue(connector.connect(&queue_options).map_err(Error::Queue)?)
            }
        };

        Ok(Client {
            dispatcher: Arc::new(Dispatcher::new(transport, timeout)),
            priority: Priority::default(),
        })
    }
}

/// The Future Realtime API client.
///
/// Cloning is cheap; clones share the same transport.
///
/// # Example
///
/// ```rust,no_run
/// use frealtime::{Client, Protocol};
///
/// #[tokio::main]
/// async fn main() -> Result<(), frealtime::Error> {
///     let client = Client::builder(Protocol::Http)
///         .base_uri("http://frealtime.internal")
///         .build()?;
///
///     let pages = client.google_index("example.com").await?;
///     println!("{:?}", pages);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    dispatcher: Arc<Dispatcher>,
    priority: Priority,
}

impl Client {
    /// Create a new client builder.
    pub fn builder(protocol: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(protocol)
    }

    /// Build a client from a protocol name and an options mapping.
    ///
    /// Only the HTTP protocol can be built this way; `amqp` needs a connector
    /// supplied through [`Client::builder`].
    pub fn new(protocol: impl Into<String>, options: ClientOptions) -> Result<Self> {
        ClientBuilder::new(protocol).options(options).build()
    }

    /// Protocol this client was built with.
    pub fn protocol(&self) -> Protocol {
        self.dispatcher.protocol()
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        self.dispatcher.timeout()
    }

    /// Priority used for queue messages.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// A clone of this client that sends queue messages with another priority.
    pub fn with_priority(&self, priority: Priority) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            priority,
        }
    }

    /// Run an arbitrary operation with the given parameters.
    pub async fn execute(&self, operation: &Operation, params: Params) -> Result<Value> {
        self.dispatcher
            .execute(operation, &params, self.priority)
            .await
    }

    // === Google ===

    /// Google search results.
    pub async fn google_serp(&self, request: GoogleSerpRequest) -> Result<Value> {
        let params = Params::new()
            .with("query", request.query)
            .with_opt("lang", request.lang)
            .with_opt("geo", request.geo)
            .with_opt("searchType", request.search_type)
            .with_opt("page", request.page)
            .with_opt("numdoc", request.numdoc);
        self.execute(&operation::GOOGLE_SEARCH, params).await
    }

    /// Number of pages of `domain` in the Google index, `None` if unknown.
    pub async fn google_index(&self, domain: &str) -> Result<Option<i64>> {
        let serp = self
            .google_serp(GoogleSerpRequest::new(format!("site:{domain}")))
            .await?;
        Ok(count_as_int(&serp))
    }

    /// First Google result for `info:<domain>`, `None` if there is none.
    pub async fn google_info(&self, domain: &str) -> Result<Option<Value>> {
        let serp = self
            .google_serp(GoogleSerpRequest::new(format!("info:{domain}")))
            .await?;
        Ok(first_serp_entry(&serp))
    }

    /// Number of Google News results for `domain`.
    pub async fn google_news(&self, domain: &str) -> Result<Option<Value>> {
        let params = Params::new()
            .with("query", format!("site:{domain}"))
            .with("tbm", "nws");
        let serp = self.execute(&operation::GOOGLE_SEARCH, params).await?;
        Ok(serp.get("count").filter(|c| !c.is_null()).cloned())
    }

    // === Yandex ===

    /// Yandex Catalog entry for `domain`.
    pub async fn yandex_catalog(&self, domain: &str) -> Result<Value> {
        self.domain_request(&operation::YANDEX_CATALOG, domain).await
    }

    /// Yandex search results.
    pub async fn yandex_serp(&self, request: YandexSerpRequest) -> Result<Value> {
        let operation = if request.xml {
            &operation::YANDEX_XML_SEARCH
        } else {
            &operation::YANDEX_SEARCH
        };
        let params = Params::new()
            .with("query", request.query)
            .with_opt("region", request.region)
            .with_opt("tld", request.tld);
        self.execute(operation, params).await
    }

    /// Number of pages of `domain` in the Yandex index, `None` if unknown.
    pub async fn yandex_index(&self, domain: &str) -> Result<Option<i64>> {
        let serp = self
            .yandex_serp(YandexSerpRequest::new(format!(
                "host:{domain} | host:www.{domain}"
            )))
            .await?;
        Ok(count_as_int(&serp))
    }

    /// Yandex thematic citation index of `domain`.
    pub async fn yandex_tic(&self, domain: &str) -> Result<Value> {
        self.domain_request(&operation::YANDEX_TIC, domain).await
    }

    /// Last known Yandex TIC of `domain`.
    pub async fn yandex_last_tic(&self, domain: &str) -> Result<Value> {
        self.domain_request(&operation::YANDEX_LAST_TIC, domain).await
    }

    /// Yandex site quality index of `domain`.
    pub async fn yandex_sqi(&self, domain: &str) -> Result<Value> {
        self.domain_request(&operation::YANDEX_SQI, domain).await
    }

    /// Yandex site quality index for several domains at once.
    ///
    /// The domain list travels JSON-encoded in a single `domains` parameter.
    pub async fn yandex_sqi_batch<I, S>(&self, domains: I) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let domains: Vec<String> = domains.into_iter().map(Into::into).collect();
        let params = Params::new().with("domains", serde_json::to_string(&domains)?);
        self.execute(&operation::YANDEX_SQI_BATCH, params).await
    }

    /// Yandex.Metrica counter of `domain`.
    pub async fn yandex_cycounter(&self, domain: &str) -> Result<Value> {
        self.domain_request(&operation::YANDEX_CYCOUNTER, domain).await
    }

    /// Yandex achievements of `domain`.
    pub async fn yandex_achievements(&self, domain: &str) -> Result<Value> {
        self.domain_request(&operation::YANDEX_ACHIEVEMENTS, domain)
            .await
    }

    // === Content analysis ===

    /// Lemmas of `text`.
    pub async fn lemmas(&self, text: &str) -> Result<Value> {
        let params = Params::new().with("text", text);
        self.execute(&operation::CA_LEMMAS, params).await
    }

    /// Lemmas of `text`, one list per line.
    pub async fn lemmas_per_line(&self, text: &str) -> Result<Value> {
        let params = Params::new().with("text", text);
        self.execute(&operation::CA_LEMMAS_PER_LINE, params).await
    }

    /// Distance between two texts.
    pub async fn distance_measure(&self, text1: &str, text2: &str) -> Result<Value> {
        let params = Params::new().with("text1", text1).with("text2", text2);
        self.execute(&operation::CA_DISTANCE_MEASURE, params).await
    }

    /// TF-IDF of the page at `url`. Pass `""` for no keywords.
    pub async fn tf_idf_by_url(&self, url: &str, keywords: &str) -> Result<Value> {
        let params = Params::new().with("url", url).with("keywords", keywords);
        self.execute(&operation::CA_TFIDF_BY_URL, params).await
    }

    /// TF-IDF of `text`. Pass `""` for no keywords.
    pub async fn tf_idf_by_text(&self, text: &str, keywords: &str) -> Result<Value> {
        let params = Params::new().with("text", text).with("keywords", keywords);
        self.execute(&operation::CA_TFIDF_BY_TEXT, params).await
    }

    /// Page data as rendered by a headless browser.
    pub async fn browser_data(&self, request: BrowserDataRequest) -> Result<Value> {
        self.execute(&operation::CA_BROWSER_DATA, browser_params(request))
            .await
    }

    /// Browser-rendered page data together with its lemmas.
    pub async fn browser_data_with_lemmas(&self, request: BrowserDataRequest) -> Result<Value> {
        self.execute(
            &operation::CA_BROWSER_DATA_WITH_LEMMAS,
            browser_params(request),
        )
        .await
    }

    // === SimilarWeb ===

    /// SimilarWeb traffic data for `domain`.
    pub async fn similar_web_data(&self, domain: &str) -> Result<Value> {
        self.domain_request(&operation::SW_PARSE_WITH_SALT, domain)
            .await
    }

    // === Internal methods ===

    async fn domain_request(&self, operation: &Operation, domain: &str) -> Result<Value> {
        self.execute(operation, Params::new().with("domain", domain))
            .await
    }
}

fn browser_params(request: BrowserDataRequest) -> Params {
    Params::new()
        .with("url", request.url)
        .with_opt("keywords", request.keywords)
        .with("user_agent", request.user_agent)
        .with("timeout", request.timeout)
        .with("referer", request.referer)
}

/// `count` of a search result as an integer, `None` when the key is missing.
fn count_as_int(serp: &Value) -> Option<i64> {
    serp.as_object()?.get("count").map(coerce_int)
}

fn first_serp_entry(serp: &Value) -> Option<Value> {
    serp.get("serp")?
        .as_array()?
        .first()
        .filter(|entry| !entry.is_null())
        .cloned()
}

/// Loose integer conversion: numbers truncate, numeric strings parse, the rest is 0.
fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => parse_int_prefix(s),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

fn parse_int_prefix(s: &str) -> i64 {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return i;
    }
    if let Ok(f) = s.parse::<f64>() {
        if f.is_finite() {
            return f as i64;
        }
    }
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_as_int() {
        assert_eq!(count_as_int(&json!({"count": 100500, "serp": []})), Some(100500));
        assert_eq!(count_as_int(&json!({"count": "42"})), Some(42));
        assert_eq!(count_as_int(&json!({"count": 12.9})), Some(12));
        assert_eq!(count_as_int(&json!({"count": null})), Some(0));
        assert_eq!(count_as_int(&json!({"serp": []})), None);
        assert_eq!(count_as_int(&json!(false)), None);
        assert_eq!(count_as_int(&json!([1, 2])), None);
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix(" 17 "), 17);
        assert_eq!(parse_int_prefix("1e3"), 1000);
        assert_eq!(parse_int_prefix("12 results"), 12);
        assert_eq!(parse_int_prefix("-5abc"), -5);
        assert_eq!(parse_int_prefix("about 7"), 0);
        assert_eq!(parse_int_prefix(""), 0);
    }

    #[test]
    fn test_first_serp_entry() {
        let serp = json!({
            "count": 1,
            "serp": [{"url": "http://example.com/", "position": 1}]
        });
        assert_eq!(
            first_serp_entry(&serp),
            Some(json!({"url": "http://example.com/", "position": 1}))
        );
        assert_eq!(first_serp_entry(&json!({"count": 0, "serp": []})), None);
        assert_eq!(first_serp_entry(&json!({"count": 0})), None);
        assert_eq!(first_serp_entry(&json!(false)), None);
    }

    #[test]
    fn test_browser_params_defaults() {
        let params = browser_params(BrowserDataRequest::new("http://example.com"));
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["url", "user_agent", "timeout", "referer"]);
    }

    #[test]
    fn test_build_rejects_unknown_protocol() {
        match Client::builder("foobar").build() {
            Err(Error::InvalidProtocol(p)) => assert_eq!(p, "foobar"),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("client built with an unknown protocol"),
        }
    }

    #[test]
    fn test_amqp_requires_connector() {
        assert!(matches!(
            Client::builder(Protocol::Amqp).build(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_http_client_settings() {
        let client = Client::builder(Protocol::Http)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.protocol(), Protocol::Http);
        assert_eq!(client.timeout(), Duration::from_secs(5));
        assert_eq!(client.priority(), Priority::Normal);

        let urgent = client.with_priority(Priority::High);
        assert_eq!(urgent.priority(), Priority::High);
        assert_eq!(client.priority(), Priority::Normal);
    }
}
