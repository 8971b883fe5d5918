use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

pub const ICON_URL: &str = "https://assets.coinlayer.com/icons/{symbol}.png";

/// Live market snapshot for one symbol. Fields the API left out are zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CryptoStat {
    pub rate: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub vol: Decimal,
    pub cap: Decimal,
    pub sup: Decimal,
    pub change: Decimal,
    pub change_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub rate: Decimal,
}

impl HistoricalPoint {
    pub fn new(date: NaiveDate, rate: Decimal) -> Self {
        Self { date, rate }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crypto {
    pub symbol: String,
    pub icon: String,
    pub stat: CryptoStat,
    /// Oldest first
    pub historical: Vec<HistoricalPoint>,
}

impl Crypto {
    pub fn new(
        symbol: &str,
        stat: Option<CryptoStat>,
        historical: Option<Vec<HistoricalPoint>>,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            icon: icon_url(symbol),
            stat: stat.unwrap_or_default(),
            historical: historical.unwrap_or_default(),
        }
    }

    /// False when any of the secondary stats is zero. coinlayer omits
    /// these for thinly traded coins and only reports the rate.
    pub fn has_full_stats(&self) -> bool {
        let s = &self.stat;
        [s.high, s.low, s.vol, s.cap, s.sup, s.change, s.change_pct]
            .iter()
            .all(|v| !v.is_zero())
    }
}

pub fn icon_url(symbol: &str) -> String {
    ICON_URL.replace("{symbol}", symbol)
}

impl fmt::Display for Crypto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stat;
        write!(
            f,
            "{} | {} | {} | {} | {} | {} | {} | {} | {} | {} | [",
            self.symbol, self.icon, s.rate, s.high, s.low, s.vol, s.cap, s.sup, s.change, s.change_pct
        )?;
        for (i, point) in self.historical.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", point.date, point.rate)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn full_stat() -> CryptoStat {
        CryptoStat {
            rate: dec!(0.5),
            high: dec!(1),
            low: dec!(0.1),
            vol: dec!(1000),
            cap: dec!(100000),
            sup: dec!(5000),
            change: dec!(0.3),
            change_pct: dec!(21.2),
        }
    }

    fn history() -> Vec<HistoricalPoint> {
        vec![
            HistoricalPoint::new(NaiveDate::from_ymd_opt(2023, 11, 21).unwrap(), dec!(0.5)),
            HistoricalPoint::new(NaiveDate::from_ymd_opt(2023, 11, 22).unwrap(), dec!(0.6)),
            HistoricalPoint::new(NaiveDate::from_ymd_opt(2023, 11, 23).unwrap(), dec!(0.7)),
        ]
    }

    #[test]
    fn test_new_without_data() {
        let crypto = Crypto::new("DOGE", None, None);
        assert_eq!(crypto.symbol, "DOGE");
        assert_eq!(crypto.icon, "https://assets.coinlayer.com/icons/DOGE.png");
        assert_eq!(crypto.stat, CryptoStat::default());
        assert!(crypto.historical.is_empty());
    }

    #[test]
    fn test_new_with_stat_and_history() {
        let crypto = Crypto::new("BTC", Some(full_stat()), Some(history()));
        assert_eq!(crypto.stat.rate, dec!(0.5));
        assert_eq!(crypto.stat.change_pct, dec!(21.2));
        assert_eq!(crypto.historical.len(), 3);
        assert_eq!(crypto.icon, "https://assets.coinlayer.com/icons/BTC.png");
    }

    #[test]
    fn test_full_stats() {
        assert!(Crypto::new("BTC", Some(full_stat()), None).has_full_stats());

        let rate_only = CryptoStat {
            rate: dec!(0.5),
            ..Default::default()
        };
        assert!(!Crypto::new("BTC", Some(rate_only), None).has_full_stats());

        // rate itself is not part of the check
        let zero_rate = CryptoStat {
            rate: Decimal::ZERO,
            ..full_stat()
        };
        assert!(Crypto::new("BTC", Some(zero_rate), None).has_full_stats());
    }

    #[test]
    fn test_display_without_data() {
        let crypto = Crypto::new("DOGE", None, None);
        assert_eq!(
            crypto.to_string(),
            "DOGE | https://assets.coinlayer.com/icons/DOGE.png | 0 | 0 | 0 | 0 | 0 | 0 | 0 | 0 | []"
        );
    }

    #[test]
    fn test_display_with_data() {
        let crypto = Crypto::new("BTC", Some(full_stat()), Some(history()));
        assert_eq!(
            crypto.to_string(),
            "BTC | https://assets.coinlayer.com/icons/BTC.png | 0.5 | 1 | 0.1 | 1000 | 100000 | 5000 | 0.3 | 21.2 | \
[2023-11-21: 0.5, 2023-11-22: 0.6, 2023-11-23: 0.7]"
        );
    }
}
