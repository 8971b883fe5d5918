//! Builds `Crypto` values for each page from coinlayer calls
//!
//! Calls run one after another. A symbol whose call comes back empty still
//! produces a `Crypto`, just with zero stats.

use crate::api::{CoinlayerClient, FetchError};
use crate::data::{Crypto, CryptoNameList, DataError};
use rand::Rng;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("coinlayer returned no symbol list")]
    NoSymbols,
}

/// Symbol list for search and random picks
pub async fn load_names(client: &CoinlayerClient) -> Result<CryptoNameList, LoadError> {
    let listing = client.list_symbols().await?.ok_or(LoadError::NoSymbols)?;
    let names = CryptoNameList::new(listing.symbols)?.with_full_names(listing.full_names);
    info!("Loaded {} crypto names", names.count());
    Ok(names)
}

/// Live stats for a fixed set of symbols, in order
pub async fn load_default(client: &CoinlayerClient, symbols: &[String]) -> Result<Vec<Crypto>, LoadError> {
    let mut cryptos = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        cryptos.push(load_live(client, symbol).await?);
    }
    Ok(cryptos)
}

/// Live stats for `count` symbols drawn at random from `names`
pub async fn load_random<R: Rng + ?Sized>(
    client: &CoinlayerClient,
    names: &CryptoNameList,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Crypto>, LoadError> {
    let symbols = names.choose_random(rng, count);
    info!("Random dashboard picks: {}", symbols.join(", "));
    load_default(client, &symbols).await
}

/// Stats plus `days` of history for the search page
pub async fn load_search(client: &CoinlayerClient, symbol: &str, days: u32) -> Result<Crypto, LoadError> {
    let stat = client.live_stat(symbol).await?;
    if stat.is_none() {
        warn!("No live data for {}", symbol);
    }

    let historical = client.historical(symbol, days).await?;
    if historical.is_none() {
        warn!("No historical data for {}", symbol);
    }

    Ok(Crypto::new(symbol, stat, historical))
}

async fn load_live(client: &CoinlayerClient, symbol: &str) -> Result<Crypto, LoadError> {
    let stat = client.live_stat(symbol).await?;
    if stat.is_none() {
        warn!("No live data for {}", symbol);
    }
    Ok(Crypto::new(symbol, stat, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeCoinlayer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_load_names() {
        let fake = FakeCoinlayer::start().await;
        let names = load_names(&fake.client()).await.unwrap();
        assert_eq!(names.count(), 4);
        assert_eq!(names.full_name("ETH"), Some("Ethereum (ETH)"));
    }

    #[tokio::test]
    async fn test_load_names_rejected_key() {
        let fake = FakeCoinlayer::start().await;
        let err = load_names(&fake.client_with_key("nope")).await.unwrap_err();
        assert!(matches!(err, LoadError::NoSymbols));
    }

    #[tokio::test]
    async fn test_load_default_keeps_order() {
        let fake = FakeCoinlayer::start().await;
        let symbols: Vec<String> = vec!["ETH".into(), "BTC".into(), "DOGE".into()];
        let cryptos = load_default(&fake.client(), &symbols).await.unwrap();

        let loaded: Vec<&str> = cryptos.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(loaded, vec!["ETH", "BTC", "DOGE"]);
        assert_eq!(cryptos[1].stat.rate, dec!(37000.5));
        assert!(cryptos.iter().all(|c| c.historical.is_empty()));
    }

    #[tokio::test]
    async fn test_load_default_with_rejected_key_gives_empty_stats() {
        let fake = FakeCoinlayer::start().await;
        let symbols: Vec<String> = vec!["BTC".into()];
        let cryptos = load_default(&fake.client_with_key("nope"), &symbols).await.unwrap();

        assert_eq!(cryptos.len(), 1);
        assert!(cryptos[0].stat.rate.is_zero());
        assert!(!cryptos[0].has_full_stats());
    }

    #[tokio::test]
    async fn test_load_random() {
        let fake = FakeCoinlayer::start().await;
        let client = fake.client();
        let names = load_names(&client).await.unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let cryptos = load_random(&client, &names, 6, &mut rng).await.unwrap();
        assert_eq!(cryptos.len(), 6);
        assert!(cryptos.iter().all(|c| names.contains(&c.symbol)));
    }

    #[tokio::test]
    async fn test_load_search() {
        let fake = FakeCoinlayer::start().await;
        let crypto = load_search(&fake.client(), "BTC", 7).await.unwrap();

        assert_eq!(crypto.symbol, "BTC");
        assert!(crypto.has_full_stats());
        assert_eq!(crypto.historical.len(), 7);
        assert!(crypto
            .historical
            .windows(2)
            .all(|w| w[0].date < w[1].date));
    }

    #[tokio::test]
    async fn test_load_search_missing_symbol_is_an_error() {
        let fake = FakeCoinlayer::start().await;
        let err = load_search(&fake.client(), "ADA", 7).await.unwrap_err();
        assert!(matches!(err, LoadError::Fetch(FetchError::MissingSymbol(_))));
    }
}
