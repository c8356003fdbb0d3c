//! Message-queue transport interface.
//!
//! The client does not talk AMQP itself. It hands each call to a
//! [`QueueTransport`], which owns publishing, reply correlation and routing
//! key prefixing. A [`QueueConnector`] turns resolved [`QueueOptions`] into a
//! live transport when the client is built.

use crate::config::QueueOptions;
use crate::error::BoxError;
use crate::params::Params;
use crate::types::Priority;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// RPC producer on a message queue.
#[async_trait]
pub trait QueueTransport: Send + Sync {
    /// Publish `params` to `routing_key` and wait for the correlated reply.
    ///
    /// Must give up once `timeout` has elapsed. The returned value is handed
    /// to the caller as is.
    async fn rpc_call(
        &self,
        routing_key: &str,
        params: &Params,
        priority: Priority,
        timeout: Duration,
    ) -> Result<Value, BoxError>;
}

/// Opens a [`QueueTransport`] from connection options.
///
/// Implemented for any `Fn(&QueueOptions) -> Result<Arc<dyn QueueTransport>, BoxError>`.
pub trait QueueConnector: Send + Sync {
    /// Connect to the broker.
    fn connect(&self, options: &QueueOptions) -> Result<Arc<dyn QueueTransport>, BoxError>;
}

impl<F> QueueConnector for F
where
    F: Fn(&QueueOptions) -> Result<Arc<dyn QueueTransport>, BoxError> + Send + Sync,
{
    fn connect(&self, options: &QueueOptions) -> Result<Arc<dyn QueueTransport>, BoxError> {
        self(options)
    }
}
