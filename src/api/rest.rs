//! coinlayer REST API client
//!
//! One GET per call, no retries. Transport failures and non-2xx statuses
//! become [`FetchError`]s; an answer with `"success": false` is logged and
//! surfaces as `Ok(None)`.

use crate::api::error::FetchError;
use crate::api::models::{ApiErrorInfo, HistoricalResponse, ListResponse, LiveResponse};
use crate::config::CoinlayerConfig;
use crate::data::{CryptoStat, HistoricalPoint};
use chrono::{Days, Local, NaiveDate};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Result of a call that can come back empty when the API reports failure
pub type FetchResult<T> = Result<Option<T>, FetchError>;

/// Symbols and their display names from `/list`
#[derive(Debug, Clone, Default)]
pub struct SymbolListing {
    pub symbols: Vec<String>,
    pub full_names: HashMap<String, String>,
}

pub struct CoinlayerClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CoinlayerClient {
    pub fn new(config: &CoinlayerConfig) -> Result<Self, FetchError> {
        Self::with_timeout(config, config.timeout())
    }

    pub fn with_timeout(config: &CoinlayerConfig, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;

        if config.api_key.trim().is_empty() {
            warn!("coinlayer api_key is empty, every request will be rejected");
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// GET `{base_url}/{path}` and unwrap the `success` envelope
    async fn fetch<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> FetchResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("coinlayer request: {} with params: {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(&[("access_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!("coinlayer response: {} - {}", status, truncate(&body, 200));

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = serde_json::from_str(&body)?;
        match value.get("success").and_then(Value::as_bool) {
            Some(true) => Ok(Some(serde_json::from_value(value)?)),
            Some(false) => {
                let info = value
                    .get("error")
                    .cloned()
                    .and_then(|e| serde_json::from_value::<ApiErrorInfo>(e).ok());
                match info {
                    Some(info) => warn!(
                        "coinlayer fetch error type: {} (code {:?}): {}",
                        info.kind.as_deref().unwrap_or("unknown"),
                        info.code,
                        info.info.as_deref().unwrap_or("")
                    ),
                    None => warn!("coinlayer reported failure without error details"),
                }
                Ok(None)
            }
            None => Err(FetchError::Malformed(
                "missing \"success\" flag".to_string(),
            )),
        }
    }

    /// Every symbol coinlayer lists, sorted
    pub async fn list_symbols(&self) -> FetchResult<SymbolListing> {
        let Some(list) = self.fetch::<ListResponse>("list", &[]).await? else {
            return Ok(None);
        };

        let mut listing = SymbolListing::default();
        for (symbol, coin) in list.crypto {
            if let Some(full) = coin.name_full.or(coin.name) {
                listing.full_names.insert(symbol.clone(), full);
            }
            listing.symbols.push(symbol);
        }

        debug!("Fetched {} symbols", listing.symbols.len());
        Ok(Some(listing))
    }

    /// Live snapshot for one symbol
    pub async fn live_stat(&self, symbol: &str) -> FetchResult<CryptoStat> {
        validate_symbol(symbol)?;

        let params = [("symbols", symbol), ("expand", "1")];
        let Some(live) = self.fetch::<LiveResponse>("live", &params).await? else {
            return Ok(None);
        };

        let rate = live
            .rates
            .get(symbol)
            .ok_or_else(|| FetchError::MissingSymbol(symbol.to_string()))?;

        Ok(Some(CryptoStat::from(rate)))
    }

    /// Daily rates for the last `days` days up to today, oldest first
    pub async fn historical(&self, symbol: &str, days: u32) -> FetchResult<Vec<HistoricalPoint>> {
        self.historical_ending(symbol, Local::now().date_naive(), days)
            .await
    }

    /// Daily rates for `days` days ending at `end`, oldest first.
    /// One request per day; a single failed day discards the series.
    pub async fn historical_ending(
        &self,
        symbol: &str,
        end: NaiveDate,
        days: u32,
    ) -> FetchResult<Vec<HistoricalPoint>> {
        validate_symbol(symbol)?;

        let mut points = Vec::new();
        for day in 0..days {
            let date = end
                .checked_sub_days(Days::new(day as u64))
                .ok_or_else(|| FetchError::Malformed(format!("date out of range: {} - {}d", end, day)))?;
            let path = date.format("%Y-%m-%d").to_string();

            let Some(response) = self
                .fetch::<HistoricalResponse>(&path, &[("symbols", symbol)])
                .await?
            else {
                return Ok(None);
            };

            points.push(HistoricalPoint::new(date, response.rate(symbol)));
        }

        points.reverse();
        Ok(Some(points))
    }
}

/// Symbols are short alphanumeric tickers; anything else never reaches the API
pub fn validate_symbol(symbol: &str) -> Result<(), FetchError> {
    if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(FetchError::InvalidSymbol(symbol.to_string()));
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{self, FakeCoinlayer};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_list_symbols() {
        let fake = FakeCoinlayer::start().await;
        let listing = fake.client().list_symbols().await.unwrap().unwrap();

        assert_eq!(listing.symbols, vec!["BTC", "DOGE", "ETH", "XYZ"]);
        assert_eq!(listing.full_names.get("BTC").map(String::as_str), Some("Bitcoin (BTC)"));
    }

    #[tokio::test]
    async fn test_live_stat() {
        let fake = FakeCoinlayer::start().await;
        let stat = fake.client().live_stat("BTC").await.unwrap().unwrap();

        assert_eq!(stat.rate, dec!(37000.5));
        assert_eq!(stat.high, dec!(38000));
        assert_eq!(stat.change_pct, dec!(1.25));
    }

    #[tokio::test]
    async fn test_live_stat_limited_data() {
        let fake = FakeCoinlayer::start().await;
        let stat = fake.client().live_stat("XYZ").await.unwrap().unwrap();

        assert_eq!(stat.rate, dec!(0.5));
        assert_eq!(stat.cap, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_live_stat_missing_symbol() {
        let fake = FakeCoinlayer::start().await;
        let err = fake.client().live_stat("ADA").await.unwrap_err();
        assert!(matches!(err, FetchError::MissingSymbol(s) if s == "ADA"));
    }

    #[tokio::test]
    async fn test_unsuccessful_response_is_none() {
        let fake = FakeCoinlayer::start().await;
        let client = fake.client_with_key("bad-key");

        assert!(client.list_symbols().await.unwrap().is_none());
        assert!(client.live_stat("BTC").await.unwrap().is_none());
        let end = NaiveDate::from_ymd_opt(2023, 11, 30).unwrap();
        assert!(client.historical_ending("BTC", end, 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_historical_oldest_first() {
        let fake = FakeCoinlayer::start().await;
        let end = NaiveDate::from_ymd_opt(2023, 11, 30).unwrap();
        let points = fake
            .client()
            .historical_ending("BTC", end, 3)
            .await
            .unwrap()
            .unwrap();

        let dates: Vec<String> = points.iter().map(|p| p.date.to_string()).collect();
        assert_eq!(dates, vec!["2023-11-28", "2023-11-29", "2023-11-30"]);
        // fake rate is the day of month
        assert_eq!(points[0].rate, dec!(28));
        assert_eq!(points[2].rate, dec!(30));
    }

    #[tokio::test]
    async fn test_historical_one_failed_day_discards_series() {
        let fake = FakeCoinlayer::start().await;
        let client = fake.client();

        // the two days after the rejected one come back fine on their own
        let end = NaiveDate::from_ymd_opt(2023, 6, 17).unwrap();
        let recent = client.historical_ending("BTC", end, 2).await.unwrap().unwrap();
        assert_eq!(recent.len(), 2);

        assert!(client.historical_ending("BTC", end, 5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_historical_huge_day_count_stops_at_failed_day() {
        let fake = FakeCoinlayer::start().await;
        let end = NaiveDate::from_ymd_opt(2023, 6, 16).unwrap();
        let points = fake
            .client()
            .historical_ending("BTC", end, u32::MAX)
            .await
            .unwrap();
        assert!(points.is_none());
    }

    #[tokio::test]
    async fn test_historical_zero_days() {
        let fake = FakeCoinlayer::start().await;
        let end = NaiveDate::from_ymd_opt(2023, 11, 30).unwrap();
        let points = fake.client().historical_ending("BTC", end, 0).await.unwrap();
        assert_eq!(points, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_historical_unknown_symbol_is_zero() {
        let fake = FakeCoinlayer::start().await;
        let end = NaiveDate::from_ymd_opt(2023, 11, 30).unwrap();
        let points = fake
            .client()
            .historical_ending("ADA", end, 2)
            .await
            .unwrap()
            .unwrap();
        assert!(points.iter().all(|p| p.rate.is_zero()));
    }

    #[tokio::test]
    async fn test_invalid_symbol_rejected_before_request() {
        let fake = FakeCoinlayer::start().await;
        let client = fake.client();

        assert!(matches!(client.live_stat("").await, Err(FetchError::InvalidSymbol(_))));
        assert!(matches!(
            client.live_stat("BTC&expand=0").await,
            Err(FetchError::InvalidSymbol(_))
        ));
        assert!(matches!(
            client.historical("../list", 7).await,
            Err(FetchError::InvalidSymbol(_))
        ));
    }

    #[tokio::test]
    async fn test_http_status_error() {
        let fake = FakeCoinlayer::start().await;
        let client = testing::client_for(&format!("{}/status500", fake.base_url()), "test-key");

        let err = client.list_symbols().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_timeout_error() {
        let fake = FakeCoinlayer::start().await;
        let client = testing::client_with_timeout(
            &format!("{}/slow", fake.base_url()),
            Duration::from_millis(100),
        );

        let err = client.list_symbols().await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_redirect_loop_error() {
        let fake = FakeCoinlayer::start().await;
        let client = testing::client_for(&format!("{}/loop", fake.base_url()), "test-key");

        let err = client.list_symbols().await.unwrap_err();
        assert!(matches!(err, FetchError::TooManyRedirects(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_connection_error() {
        let base_url = testing::closed_port_url().await;
        let client = testing::client_for(&base_url, "test-key");

        let err = client.list_symbols().await.unwrap_err();
        assert!(matches!(err, FetchError::Connection(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_missing_success_flag() {
        let fake = FakeCoinlayer::start().await;
        let client = testing::client_for(&format!("{}/bare", fake.base_url()), "test-key");

        let err = client.list_symbols().await.unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("ab", 3), "ab");
    }
}
