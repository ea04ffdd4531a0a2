//! # Illustration Preloading
//!
//! Fetches every illustration once at startup so the first visit to a page
//! doesn't wait on the network. Fire-and-forget: nothing in the reading
//! flow waits for it, failures are logged and dropped, nothing is retried.

use std::fmt;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, info, warn};

#[derive(Debug)]
pub enum PreloadError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server answered with a non-success status.
    Status(u16),
}

impl fmt::Display for PreloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreloadError::Network(msg) => write!(f, "network error: {msg}"),
            PreloadError::Status(status) => write!(f, "HTTP {status}"),
        }
    }
}

impl std::error::Error for PreloadError {}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PreloadSummary {
    pub loaded: usize,
    pub failed: usize,
}

#[derive(Clone)]
pub struct Preloader {
    client: reqwest::Client,
}

impl Preloader {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build preload client ({e}), using defaults");
                reqwest::Client::new()
            });
        Self { client }
    }

    /// Downloads one image and returns its size in bytes.
    pub async fn fetch(&self, url: &str) -> Result<usize, PreloadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PreloadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PreloadError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PreloadError::Network(e.to_string()))?;
        Ok(body.len())
    }

    /// Fetches all URLs concurrently. Never fails; the summary is for logging.
    pub async fn preload_all(&self, urls: &[String]) -> PreloadSummary {
        let results = join_all(urls.iter().map(|url| self.fetch(url))).await;

        let mut summary = PreloadSummary::default();
        for (url, result) in urls.iter().zip(results) {
            match result {
                Ok(bytes) => {
                    debug!("Preloaded {url} ({bytes} bytes)");
                    summary.loaded += 1;
                }
                Err(e) => {
                    debug!("Preload of {url} failed: {e}");
                    summary.failed += 1;
                }
            }
        }
        summary
    }
}

/// Starts preloading in the background and returns immediately.
pub fn spawn_preload(preloader: Preloader, urls: Vec<String>) {
    info!("Preloading {} illustrations", urls.len());
    tokio::spawn(async move {
        let summary = preloader.preload_all(&urls).await;
        info!(
            "Preload finished: {} loaded, {} failed",
            summary.loaded, summary.failed
        );
    });
}
