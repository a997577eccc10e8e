//! Market data clients: SOL spot price (CoinGecko) and Solana network
//! throughput (JSON-RPC `getRecentPerformanceSamples`).
//!
//! Every failure mode collapses to `None` at the public boundary so a flaky
//! upstream degrades a single report line, never the whole reply.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

/// Spot price with 24-hour change, as returned by the price index.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub usd: f64,
    pub change_24h: f64,
}

/// One recent performance sample from the network RPC.
///
/// Construction goes through [`parse_performance_body`], which rejects
/// zero-transaction and zero-period samples, so `tps()` is well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThroughputSample {
    pub num_transactions: u64,
    pub sample_period_secs: u64,
}

impl ThroughputSample {
    pub fn tps(&self) -> f64 {
        self.num_transactions as f64 / self.sample_period_secs as f64
    }
}

#[derive(Deserialize)]
struct AssetPrice {
    usd: Option<f64>,
    usd_24h_change: Option<f64>,
}

#[derive(Deserialize)]
struct PerformanceResponse {
    result: Option<Vec<PerformanceSample>>,
}

#[derive(Deserialize)]
struct PerformanceSample {
    #[serde(rename = "numTransactions")]
    num_transactions: u64,
    #[serde(rename = "samplePeriodSecs")]
    sample_period_secs: i64,
}

/// HTTP client for the two market data sources.
pub struct MarketClient {
    client: reqwest::Client,
    price_api_url: String,
    rpc_url: String,
}

impl MarketClient {
    pub fn new(price_api_url: String, rpc_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            price_api_url,
            rpc_url,
        }
    }

    /// Fetch the spot price and 24h change for `asset`.
    ///
    /// Network errors, bad statuses, and malformed payloads are logged and
    /// returned as `None`.
    pub async fn fetch_price(&self, asset: &str) -> Option<PriceQuote> {
        match self.price_request(asset).await {
            Ok(quote) => Some(quote),
            Err(e) => {
                warn!("Price fetch for {asset} failed: {e}");
                None
            }
        }
    }

    /// Fetch the most recent network performance sample.
    pub async fn fetch_throughput(&self) -> Option<ThroughputSample> {
        match self.throughput_request().await {
            Ok(sample) => Some(sample),
            Err(e) => {
                warn!("Throughput fetch failed: {e}");
                None
            }
        }
    }

    async fn price_request(&self, asset: &str) -> Result<PriceQuote, String> {
        let response = self
            .client
            .get(&self.price_api_url)
            .query(&[
                ("ids", asset),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await
            .map_err(|e| format!("HTTP error: {e}"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {e}"))?;

        debug!("Price response status: {status}");

        if !status.is_success() {
            return Err(format!("API error {status}: {body}"));
        }

        parse_price_body(asset, &body)
    }

    async fn throughput_request(&self) -> Result<ThroughputSample, String> {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getRecentPerformanceSamples",
            "params": [1],
        });

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("HTTP error: {e}"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {e}"))?;

        debug!("RPC response status: {status}");

        if !status.is_success() {
            return Err(format!("RPC error {status}: {body}"));
        }

        parse_performance_body(&body)
    }
}

fn parse_price_body(asset: &str, body: &str) -> Result<PriceQuote, String> {
    let parsed: HashMap<String, AssetPrice> =
        serde_json::from_str(body).map_err(|e| format!("Failed to parse response: {e}"))?;

    let entry = parsed
        .get(asset)
        .ok_or_else(|| format!("No `{asset}` entry in response"))?;
    let usd = entry.usd.ok_or("Missing `usd` field")?;
    let change_24h = entry.usd_24h_change.ok_or("Missing `usd_24h_change` field")?;

    Ok(PriceQuote { usd, change_24h })
}

fn parse_performance_body(body: &str) -> Result<ThroughputSample, String> {
    let parsed: PerformanceResponse =
        serde_json::from_str(body).map_err(|e| format!("Failed to parse response: {e}"))?;

    let samples = parsed.result.ok_or("No `result` in response")?;
    let first = samples.first().ok_or("Empty performance sample array")?;

    if first.num_transactions == 0 {
        return Err("Zero-transaction sample".into());
    }
    if first.sample_period_secs <= 0 {
        return Err(format!(
            "Degenerate sample period: {}",
            first.sample_period_secs
        ));
    }

    Ok(ThroughputSample {
        num_transactions: first.num_transactions,
        sample_period_secs: first.sample_period_secs as u64,
    })
}
