// src/services/fetcher.rs

//! Polite, cancellable HTTP fetching.
//!
//! Requests to the same host are spaced by the configured delay plus a
//! random jitter. Every wait and every request races the caller's
//! cancellation token.

use std::collections::HashMap;
use std::time::Duration;

use rand::Rng;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{AppError, Result};
use crate::models::FetcherConfig;
use crate::utils::get_domain;
use crate::utils::http::create_async_client;

/// Shared HTTP fetcher with per-host request spacing.
pub struct DocumentFetcher {
    client: Client,
    delay: Duration,
    jitter_ms: u64,
    next_slot: Mutex<HashMap<String, Instant>>,
}

impl DocumentFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        Ok(Self::with_client(create_async_client(config)?, config))
    }

    pub fn with_client(client: Client, config: &FetcherConfig) -> Self {
        Self {
            client,
            delay: Duration::from_millis(config.request_delay_ms),
            jitter_ms: config.jitter_ms,
            next_slot: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch an HTML page. A 404 yields `None`.
    pub async fn fetch_page(&self, url: &str, cancel: &CancellationToken) -> Result<Option<String>> {
        let Some(response) = self.get(url, cancel).await? else {
            return Ok(None);
        };
        let body = tokio::select! {
            body = response.text() => body?,
            _ = cancel.cancelled() => return Err(AppError::Cancelled),
        };
        Ok(Some(body))
    }

    /// Fetch and decode a JSON document.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<T> {
        let Some(response) = self.get(url, cancel).await? else {
            return Err(AppError::upstream(url, "not found"));
        };
        let bytes = tokio::select! {
            bytes = response.bytes() => bytes?,
            _ = cancel.cancelled() => return Err(AppError::Cancelled),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get(&self, url: &str, cancel: &CancellationToken) -> Result<Option<reqwest::Response>> {
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        self.wait_turn(url, cancel).await?;

        log::debug!("GET {url}");
        let response = tokio::select! {
            response = self.client.get(url).send() => response?,
            _ = cancel.cancelled() => return Err(AppError::Cancelled),
        };

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response)),
            status => Err(AppError::upstream(url, format!("HTTP {status}"))),
        }
    }

    /// Reserve the next request slot for the URL's host and sleep until it.
    async fn wait_turn(&self, url: &str, cancel: &CancellationToken) -> Result<()> {
        let host = get_domain(url).unwrap_or_default();
        let jitter = if self.jitter_ms > 0 {
            rand::thread_rng().gen_range(0..=self.jitter_ms)
        } else {
            0
        };

        let start = {
            let mut slots = self.next_slot.lock().await;
            let now = Instant::now();
            let start = slots.get(&host).copied().filter(|t| *t > now).unwrap_or(now);
            slots.insert(host, start + self.delay + Duration::from_millis(jitter));
            start
        };

        if start > Instant::now() {
            tokio::select! {
                _ = tokio::time::sleep_until(start) => {}
                _ = cancel.cancelled() => return Err(AppError::Cancelled),
            }
        }
        Ok(())
    }
}
