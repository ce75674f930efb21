//! Mock quote source for testing without network calls.

use super::{QuoteError, QuoteSource};
use crate::domain::{Decimal, Quote, Symbol};
use async_trait::async_trait;
use std::collections::HashMap;
use std::str::FromStr;

/// Quote source returning predefined quotes or injected failures.
///
/// Symbols without a configured quote or failure produce
/// [`QuoteError::InstrumentNotFound`], matching a provider that has no result
/// for an unknown ticker.
#[derive(Debug, Clone, Default)]
pub struct MockQuoteSource {
    quotes: HashMap<String, Quote>,
    failures: HashMap<String, QuoteError>,
    fail_all: Option<QuoteError>,
}

impl MockQuoteSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a quote whose only populated field is the price.
    pub fn with_price(self, symbol: &str, price: &str) -> Self {
        self.with_quote(
            symbol,
            Quote {
                current_price: Some(Decimal::from_str(price).expect("invalid mock price")),
                ..Default::default()
            },
        )
    }

    /// Register a full quote for a symbol.
    pub fn with_quote(mut self, symbol: &str, quote: Quote) -> Self {
        self.quotes.insert(symbol.to_string(), quote);
        self
    }

    /// Make lookups for one symbol fail with the given error.
    pub fn with_failure(mut self, symbol: &str, error: QuoteError) -> Self {
        self.failures.insert(symbol.to_string(), error);
        self
    }

    /// Make every lookup fail, simulating an unreachable provider.
    pub fn with_outage(mut self, error: QuoteError) -> Self {
        self.fail_all = Some(error);
        self
    }
}

#[async_trait]
impl QuoteSource for MockQuoteSource {
    async fn fetch_quote(&self, symbol: &Symbol) -> Result<Quote, QuoteError> {
        if let Some(err) = &self.fail_all {
            return Err(err.clone());
        }
        if let Some(err) = self.failures.get(symbol.as_str()) {
            return Err(err.clone());
        }
        self.quotes
            .get(symbol.as_str())
            .cloned()
            .ok_or(QuoteError::InstrumentNotFound)
    }
}
