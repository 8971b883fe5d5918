use super::DataError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Symbols the API knows about, used to drive search and random picks.
#[derive(Debug, Clone)]
pub struct CryptoNameList {
    names: Vec<String>,
    full_names: HashMap<String, String>,
}

impl CryptoNameList {
    pub fn new(names: Vec<String>) -> Result<Self, DataError> {
        if names.is_empty() {
            return Err(DataError::EmptyNameList);
        }
        Ok(Self {
            names,
            full_names: HashMap::new(),
        })
    }

    /// Attach display names, e.g. "BTC" -> "Bitcoin (BTC)"
    pub fn with_full_names(mut self, full_names: HashMap<String, String>) -> Self {
        self.full_names = full_names;
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.names.iter().any(|n| n == symbol)
    }

    pub fn full_name(&self, symbol: &str) -> Option<&str> {
        self.full_names.get(symbol).map(String::as_str)
    }

    /// Indices of names whose symbol or full name contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<usize> {
        let query = query.trim().to_uppercase();
        self.names
            .iter()
            .enumerate()
            .filter(|(_, name)| {
                query.is_empty()
                    || name.to_uppercase().contains(&query)
                    || self
                        .full_name(name)
                        .map(|full| full.to_uppercase().contains(&query))
                        .unwrap_or(false)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Draw `n` symbols uniformly, with replacement
    pub fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<String> {
        (0..n)
            .filter_map(|_| self.names.choose(rng).cloned())
            .collect()
    }
}
