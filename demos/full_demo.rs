//! Full client demo - calls every operation group once.
//!
//! Run with: cargo run --example full_demo

use colored::Colorize;
use frealtime::{BrowserDataRequest, Client, Protocol, YandexSerpRequest, SDK_VERSION};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

// Configuration - Set via environment variables
fn get_base_uri() -> String {
    std::env::var("FREALTIME_BASE_URI").unwrap_or_else(|_| "http://localhost".into())
}
const TEST_DOMAIN: &str = "example.com";
const TEST_URL: &str = "http://example.com/";
const TEST_TEXT: &str = "мама мыла раму";

fn header(text: &str) {
    println!();
    println!("{}", format!(" {} ", text).on_blue().bold());
    println!();
}

fn info(label: &str, value: &str) {
    println!("  {}: {}", label.dimmed(), value);
}

fn success(text: &str) {
    println!("{} {}", "✔".green(), text);
}

fn warn(text: &str) {
    println!("{} {}", "⚠".yellow(), text);
}

fn print_json(value: &Value) {
    let formatted = serde_json::to_string_pretty(value).unwrap_or_default();
    println!("{}", formatted.dimmed());
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

async fn run<F>(label: &str, call: F)
where
    F: Future<Output = frealtime::Result<Value>>,
{
    let pb = spinner(&format!("{}...", label));
    let result = call.await;
    pb.finish_and_clear();
    match result {
        Ok(value) => {
            success(label);
            print_json(&value);
        }
        Err(e) => warn(&format!("{} failed: {}", label, e)),
    }
}

#[tokio::main]
async fn main() -> Result<(), frealtime::Error> {
    // ========== Configuration ==========
    header("Configuration");

    let base_uri = get_base_uri();
    info("Client Version", SDK_VERSION);
    info("Base URI", &base_uri);

    let client = Client::builder(Protocol::Http)
        .base_uri(&base_uri)
        .timeout(Duration::from_secs(30))
        .user_agent_suffix("full-demo")
        .build()?;
    info("Protocol", client.protocol().as_str());
    info("Timeout", &format!("{}s", client.timeout().as_secs()));

    // ========== Google ==========
    header("Google");

    match client.google_index(TEST_DOMAIN).await {
        Ok(Some(count)) => info("Indexed pages", &count.to_string()),
        Ok(None) => warn("Index size unknown"),
        Err(e) => warn(&format!("Index lookup failed: {}", e)),
    }
    match client.google_info(TEST_DOMAIN).await {
        Ok(Some(entry)) => print_json(&entry),
        Ok(None) => warn("No info entry"),
        Err(e) => warn(&format!("Info lookup failed: {}", e)),
    }

    // ========== Yandex ==========
    header("Yandex");

    run("Yandex search", client.yandex_serp(YandexSerpRequest::new("rust"))).await;
    run("Yandex catalog", client.yandex_catalog(TEST_DOMAIN)).await;
    run("Yandex SQI", client.yandex_sqi(TEST_DOMAIN)).await;
    run(
        "Yandex SQI batch",
        client.yandex_sqi_batch([TEST_DOMAIN, "example.org"]),
    )
    .await;

    // ========== Content Analysis ==========
    header("Content Analysis");

    run("Lemmas", client.lemmas(TEST_TEXT)).await;
    run("TF-IDF by text", client.tf_idf_by_text(TEST_TEXT, "")).await;
    run(
        "Browser data",
        client.browser_data(BrowserDataRequest::new(TEST_URL)),
    )
    .await;

    // ========== SimilarWeb ==========
    header("SimilarWeb");

    run("SimilarWeb data", client.similar_web_data(TEST_DOMAIN)).await;

    // ========== Done ==========
    println!();
    println!("{}", " Demo Complete ".on_green().bold());
    println!();

    Ok(())
}
