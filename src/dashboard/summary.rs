use crate::data::format::{millify_decimal, percent, rate};
use crate::data::Crypto;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How much of a crypto's stats can be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayOption {
    Full,
    /// Only the rate is trustworthy
    MissingData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub rate: f64,
}

/// Preformatted card content for one crypto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoSummary {
    pub symbol: String,
    pub icon: String,
    pub pair_label: String,
    pub rate: String,
    pub delta: String,
    pub rising: bool,
    pub high_low: String,
    pub volume: String,
    pub market_cap: String,
    pub display: DisplayOption,
    pub notice: Option<String>,
    pub history: Vec<ChartPoint>,
}

impl CryptoSummary {
    pub fn is_limited(&self) -> bool {
        self.display == DisplayOption::MissingData
    }
}

impl From<&Crypto> for CryptoSummary {
    fn from(crypto: &Crypto) -> Self {
        let stat = &crypto.stat;
        let display = if crypto.has_full_stats() {
            DisplayOption::Full
        } else {
            DisplayOption::MissingData
        };
        let notice = (display == DisplayOption::MissingData).then(|| {
            format!(
                "{} has limited data from APIs, only showing rates",
                crypto.symbol
            )
        });

        Self {
            symbol: crypto.symbol.clone(),
            icon: crypto.icon.clone(),
            pair_label: format!("{} / USD", crypto.symbol),
            rate: rate(stat.rate),
            delta: percent(stat.change_pct),
            rising: stat.change_pct >= Decimal::ZERO,
            high_low: format!("{} / {}", rate(stat.high), rate(stat.low)),
            volume: millify_decimal(stat.vol, 2),
            market_cap: millify_decimal(stat.cap, 2),
            display,
            notice,
            history: crypto
                .historical
                .iter()
                .map(|p| ChartPoint {
                    date: p.date.format("%Y-%m-%d").to_string(),
                    rate: p.rate.to_f64().unwrap_or(0.0),
                })
                .collect(),
        }
    }
}
