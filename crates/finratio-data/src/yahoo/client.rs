//! Yahoo Finance client with rate limiting.
//!
//! Statements are read from the fundamentals-timeseries API with `reqwest`.
//! The market snapshot goes through `yahoo_finance_api`, which owns the cookie
//! and crumb session quoteSummary requires.

use super::quote_summary::SnapshotMultiples;
use super::timeseries::{ANNUAL_PREFIX, parse_timeseries, statement_keys};
use crate::error::{DataError, Result};
use crate::provider::FinancialsProvider;
use crate::snapshot::MarketSnapshot;
use crate::statement::{LineItemTable, Statement};
use chrono::Utc;
use reqwest::StatusCode;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::debug;
use yahoo_finance_api as yahoo;

/// Yahoo Finance query host
const YAHOO_BASE_URL: &str = "https://query2.finance.yahoo.com";

/// Default spacing between requests
const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(250);

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Browser-like user agent; Yahoo rejects the reqwest default
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";

/// Start of the timeseries window (2016-12-31T00:00:00Z)
const TIMESERIES_START: i64 = 1_483_142_400;

/// Configuration for [`YahooProvider`].
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Timeseries host, without trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Minimum spacing between consecutive requests
    pub request_interval: Duration,
    /// User agent header
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: YAHOO_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            request_interval: DEFAULT_REQUEST_INTERVAL,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Keeps consecutive requests at least `min_interval` apart.
struct RateLimiter {
    last_request: Option<Instant>,
    min_interval: Duration,
}

impl RateLimiter {
    const fn new(min_interval: Duration) -> Self {
        Self {
            last_request: None,
            min_interval,
        }
    }

    async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}

/// Reject symbols that could not be a ticker before they reach a URL path.
pub fn validate_symbol(symbol: &str) -> Result<()> {
    if symbol.is_empty() {
        return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
    }
    let valid = symbol
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='));
    if !valid {
        return Err(DataError::InvalidSymbol(symbol.to_string()));
    }
    Ok(())
}

/// Yahoo Finance statements and market snapshot provider.
pub struct YahooProvider {
    client: reqwest::Client,
    connector: Mutex<yahoo::YahooConnector>,
    config: ProviderConfig,
    rate_limiter: Mutex<RateLimiter>,
}

impl std::fmt::Debug for YahooProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooProvider")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl YahooProvider {
    /// Create a provider with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ProviderConfig::default())
    }

    /// Create a provider with custom settings.
    pub fn with_config(config: ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            connector: Mutex::new(yahoo::YahooConnector::new()?),
            rate_limiter: Mutex::new(RateLimiter::new(config.request_interval)),
            config,
        })
    }

    /// Provider settings.
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

impl FinancialsProvider for YahooProvider {
    async fn fetch_statement(&self, symbol: &str, statement: Statement) -> Result<LineItemTable> {
        validate_symbol(symbol)?;

        let keys = statement_keys(statement);
        let types = keys
            .iter()
            .map(|key| format!("{ANNUAL_PREFIX}{key}"))
            .collect::<Vec<_>>()
            .join(",");
        let url = format!(
            "{}/ws/fundamentals-timeseries/v1/finance/timeseries/{}",
            self.config.base_url, symbol
        );
        let query = [
            ("symbol", symbol.to_string()),
            ("type", types),
            ("period1", TIMESERIES_START.to_string()),
            ("period2", Utc::now().timestamp().to_string()),
        ];

        self.rate_limiter.lock().await.wait().await;
        debug!(url = %url, "GET");
        let response = self.client.get(&url).query(&query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Ok(LineItemTable::empty(statement));
        }
        if !status.is_success() {
            return Err(DataError::Http(format!(
                "timeseries request for {symbol} failed: HTTP {status}"
            )));
        }

        let table = parse_timeseries(statement, keys, &body)?;
        debug!(
            symbol,
            %statement,
            items = table.items().len(),
            periods = table.periods().len(),
            "parsed statement"
        );
        Ok(table)
    }

    async fn fetch_snapshot(&self, symbol: &str) -> Result<MarketSnapshot> {
        validate_symbol(symbol)?;

        self.rate_limiter.lock().await.wait().await;
        debug!(symbol, "quoteSummary");
        let summary = {
            let mut connector = self.connector.lock().await;
            connector.get_ticker_info(symbol).await?
        };

        let Some(data) = summary
            .quote_summary
            .and_then(|qs| qs.result)
            .and_then(|results| results.into_iter().next())
        else {
            return Ok(MarketSnapshot::new());
        };

        let detail = data.summary_detail.as_ref();
        let statistics = data.default_key_statistics.as_ref();
        let multiples = SnapshotMultiples {
            trailing_pe: detail.and_then(|d| d.trailing_pe),
            price_to_sales: detail.and_then(|d| d.price_to_sales_trailing12months),
            price_to_book: statistics.and_then(|s| s.price_to_book),
            enterprise_to_ebitda: statistics.and_then(|s| s.enterprise_to_ebitda),
        };
        debug!(symbol, ?multiples, "parsed snapshot");
        Ok(multiples.into())
    }
}
