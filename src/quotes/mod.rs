//! Quote source abstraction for fetching live instrument prices.

use crate::domain::{Quote, Symbol};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod mock;
pub mod yahoo;

pub use mock::MockQuoteSource;
pub use yahoo::YahooQuoteSource;

/// Source of live quotes for instrument symbols.
///
/// Implementations make exactly one fetch attempt per call; retry policy is
/// out of scope for the ledger.
#[async_trait]
pub trait QuoteSource: Send + Sync + fmt::Debug {
    /// Fetch the current quote for a symbol.
    ///
    /// # Errors
    /// - [`QuoteError::Unavailable`] when the provider cannot be reached,
    ///   answers with a non-success status, or returns a malformed payload.
    /// - [`QuoteError::InstrumentNotFound`] when the provider recognizes the
    ///   request but has no result for the symbol.
    async fn fetch_quote(&self, symbol: &Symbol) -> Result<Quote, QuoteError>;
}

/// Error type for quote source operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// Provider unreachable, non-success status, or unparseable payload.
    #[error("quote provider unavailable: {0}")]
    Unavailable(String),
    /// Provider returned an empty result set for the symbol.
    #[error("instrument not found")]
    InstrumentNotFound,
    /// Provider returned a result but no usable price.
    #[error("price information not available")]
    PriceUnavailable,
}
