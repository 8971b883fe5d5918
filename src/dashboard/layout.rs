use crate::data::{Crypto, DataError};

/// Cards per dashboard row. The overview is always two rows, so the list is
/// split in half and each half gets at most `per_row` cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGrid {
    per_row: usize,
}

impl CardGrid {
    pub fn new(per_row: usize) -> Result<Self, DataError> {
        if per_row == 0 || per_row % 3 != 0 {
            return Err(DataError::InvalidRowWidth(per_row));
        }
        Ok(Self { per_row })
    }

    pub fn rows<'a>(&self, cryptos: &'a [Crypto]) -> Result<Vec<&'a [Crypto]>, DataError> {
        validate_crypto_list(cryptos)?;

        let mid = cryptos.len() / 2;
        let (top, bottom) = cryptos.split_at(mid);
        Ok([top, bottom]
            .into_iter()
            .filter(|row| !row.is_empty())
            .map(|row| &row[..row.len().min(self.per_row)])
            .collect())
    }
}

impl Default for CardGrid {
    fn default() -> Self {
        Self { per_row: 3 }
    }
}

pub fn validate_crypto_list(cryptos: &[Crypto]) -> Result<(), DataError> {
    if cryptos.is_empty() {
        return Err(DataError::EmptyCryptoList);
    }
    Ok(())
}
