//! coinlayer response payloads

use crate::data::CryptoStat;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Error object returned alongside `"success": false`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorInfo {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
}

/// `GET /list`
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub crypto: BTreeMap<String, CoinListing>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinListing {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_full: Option<String>,
}

/// `GET /live?expand=1`
#[derive(Debug, Clone, Deserialize)]
pub struct LiveResponse {
    #[serde(default)]
    pub rates: HashMap<String, LiveRate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveRate {
    pub rate: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub vol: Option<f64>,
    pub cap: Option<f64>,
    pub sup: Option<f64>,
    pub change: Option<f64>,
    pub change_pct: Option<f64>,
}

/// `GET /YYYY-MM-DD`
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalResponse {
    #[serde(default)]
    pub rates: HashMap<String, Option<f64>>,
}

impl HistoricalResponse {
    pub fn rate(&self, symbol: &str) -> Decimal {
        to_decimal(self.rates.get(symbol).copied().flatten())
    }
}

pub(crate) fn to_decimal(value: Option<f64>) -> Decimal {
    value.and_then(Decimal::from_f64).unwrap_or_default()
}

impl From<&LiveRate> for CryptoStat {
    fn from(rate: &LiveRate) -> Self {
        Self {
            rate: to_decimal(rate.rate),
            high: to_decimal(rate.high),
            low: to_decimal(rate.low),
            vol: to_decimal(rate.vol),
            cap: to_decimal(rate.cap),
            sup: to_decimal(rate.sup),
            change: to_decimal(rate.change),
            change_pct: to_decimal(rate.change_pct),
        }
    }
}
