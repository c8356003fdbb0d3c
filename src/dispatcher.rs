//! Request dispatch over the configured transport.

use crate::error::{Error, Result};
use crate::http::{HttpTransport, Payload};
use crate::operation::Operation;
use crate::params::Params;
use crate::queue::QueueTransport;
use crate::types::{Priority, Protocol};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The one live transport of a dispatcher.
pub(crate) enum Transport {
    Http(Arc<dyn HttpTransport>),
    Queue(Arc<dyn QueueTransport>),
}

/// Executes operations over the transport chosen at construction.
pub(crate) struct Dispatcher {
    transport: Transport,
    timeout: Duration,
}

impl Dispatcher {
    pub(crate) fn new(transport: Transport, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    pub(crate) fn protocol(&self) -> Protocol {
        match self.transport {
            Transport::Http(_) => Protocol::Http,
            Transport::Queue(_) => Protocol::Amqp,
        }
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one operation. Single attempt, no fallback to the other protocol.
    pub(crate) async fn execute(
        &self,
        operation: &Operation,
        params: &Params,
        priority: Priority,
    ) -> Result<Value> {
        match &self.transport {
            Transport::Http(http) => {
                self.execute_http(http.as_ref(), operation.http_method, operation.http_path, params)
                    .await
            }
            Transport::Queue(queue) => {
                self.execute_queue(queue.as_ref(), operation.routing_key, params, priority)
                    .await
            }
        }
    }

    async fn execute_http(
        &self,
        http: &dyn HttpTransport,
        method: &str,
        path: &str,
        params: &Params,
    ) -> Result<Value> {
        let method = method.to_ascii_uppercase();
        let payload = if method == "GET" {
            Payload::Query(params)
        } else {
            Payload::Form(params)
        };
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| Error::Config(format!("invalid HTTP method: {method}")))?;

        debug!(method = %method, path = path, params = params.len(), "Dispatching HTTP request");

        let response = http
            .request(method, path, payload)
            .await?
            .ok_or_else(|| Error::EmptyResponse {
                path: path.to_string(),
            })?;

        if response.status != 200 {
            warn!(path = path, status = response.status, "API bad response status code");
            return Err(Error::BadStatusCode {
                path: path.to_string(),
                status: response.status,
                body: response.body,
            });
        }

        // A bare `null` body is rejected together with unparseable ones.
        match serde_json::from_str::<Value>(&response.body) {
            Ok(Value::Null) | Err(_) => {
                warn!(path = path, "API invalid json body");
                Err(Error::InvalidResponseBody {
                    path: path.to_string(),
                })
            }
            Ok(value) => Ok(value),
        }
    }

    async fn execute_queue(
        &self,
        queue: &dyn QueueTransport,
        routing_key: &str,
        params: &Params,
        priority: Priority,
    ) -> Result<Value> {
        debug!(
            routing_key = routing_key,
            priority = priority.value(),
            timeout_secs = self.timeout.as_secs(),
            "Dispatching RPC message"
        );

        let value = queue
            .rpc_call(routing_key, params, priority, self.timeout)
            .await
            .map_err(Error::Queue)?;

        debug!(routing_key = routing_key, "Received RPC reply");
        Ok(value)
    }
}
