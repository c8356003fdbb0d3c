//! Basic search example.
//!
//! This example shows how to fetch Google search results over HTTP.
//!
//! Run with: `FREALTIME_BASE_URI=http://frealtime.internal cargo run --example google_serp`

use frealtime::{Client, GoogleSerpRequest, Protocol};

#[tokio::main]
async fn main() -> Result<(), frealtime::Error> {
    // Create an HTTP client pointed at the API gateway
    let base_uri =
        std::env::var("FREALTIME_BASE_URI").unwrap_or_else(|_| "http://localhost".into());
    let client = Client::builder(Protocol::Http).base_uri(base_uri).build()?;

    // Unset fields are not sent to the API
    let serp = client
        .google_serp(GoogleSerpRequest {
            lang: Some("en".into()),
            numdoc: Some(10),
            ..GoogleSerpRequest::new("rust programming language")
        })
        .await?;

    println!("Results: {:#}", serp);

    // Derived views run the same search under the hood
    match client.google_index("rust-lang.org").await? {
        Some(count) => println!("Pages in the Google index: {}", count),
        None => println!("Google index size unknown"),
    }

    Ok(())
}
