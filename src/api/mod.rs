pub mod error;
pub mod models;
pub mod rest;

#[cfg(test)]
pub(crate) mod testing;

pub use error::FetchError;
pub use rest::{CoinlayerClient, FetchResult, SymbolListing};
