pub mod crypto;
pub mod format;
pub mod names;

pub use crypto::{Crypto, CryptoStat, HistoricalPoint};
pub use names::CryptoNameList;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("crypto name list cannot be empty")]
    EmptyNameList,

    #[error("crypto list cannot be empty")]
    EmptyCryptoList,

    #[error("cards per row must be a non-zero multiple of 3, got {0}")]
    InvalidRowWidth(usize),
}
