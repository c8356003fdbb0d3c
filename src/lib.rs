//! Rust client for the Future Realtime API.
//!
//! Future Realtime serves live search engine data (Google and Yandex SERPs,
//! domain metrics), text analysis (lemmas, TF-IDF), headless browser
//! rendering and SimilarWeb data. The API is reachable either over HTTP or as
//! RPC over an AMQP message queue; the protocol is picked once when the client
//! is built and every operation works the same way on both.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use frealtime::{Client, GoogleSerpRequest, Protocol};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), frealtime::Error> {
//!     let client = Client::builder(Protocol::Http)
//!         .base_uri("http://frealtime.internal")
//!         .build()?;
//!
//!     let serp = client
//!         .google_serp(GoogleSerpRequest {
//!             lang: Some("en".into()),
//!             ..GoogleSerpRequest::new("rust async")
//!         })
//!         .await?;
//!
//!     println!("{serp}");
//!     Ok(())
//! }
//! ```
//!
//! Over AMQP the broker connection is supplied by a [`QueueConnector`], which
//! receives the resolved [`QueueOptions`] and returns a [`QueueTransport`].

#![warn(missing_docs)]

mod client;
mod config;
mod dispatcher;
mod error;
mod http;
pub mod operation;
mod params;
mod queue;
mod types;
mod version;

pub use client::{Client, ClientBuilder};
pub use config::{ClientOptions, HttpOptions, QueueOptions};
pub use error::{BoxError, Error, Result};
pub use http::{HttpResponse, HttpTransport, Payload, ReqwestTransport};
pub use operation::Operation;
pub use params::{ParamValue, Params};
pub use queue::{QueueConnector, QueueTransport};
pub use reqwest::Method;
pub use types::*;
pub use version::{build_user_agent, SDK_VERSION};
