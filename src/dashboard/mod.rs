//! Page logic shared by the terminal and web front ends

pub mod layout;
pub mod loader;
pub mod summary;

pub use layout::{validate_crypto_list, CardGrid};
pub use loader::{load_default, load_names, load_random, load_search, LoadError};
pub use summary::{ChartPoint, CryptoSummary, DisplayOption};

use serde::{Deserialize, Serialize};

pub const DEFAULT_SYMBOLS: [&str; 6] = ["BTC", "ETH", "BNB", "XRP", "ADA", "DOGE"];

/// Which set of cryptos the overview shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardMode {
    #[default]
    Default,
    Random,
}

impl DashboardMode {
    pub fn label(&self) -> &'static str {
        match self {
            DashboardMode::Default => "Default",
            DashboardMode::Random => "Random",
        }
    }
}
