//! Market valuation of stored positions.

use crate::db::Repository;
use crate::domain::{Symbol, ValuedPosition};
use crate::quotes::{QuoteError, QuoteSource};
use thiserror::Error;

/// Error type for valuation requests.
#[derive(Debug, Error)]
pub enum ValuationError {
    /// The portfolio holds nothing matching the filter.
    #[error("no portfolio entry found")]
    NoPositionsFound,
    #[error(transparent)]
    Quote(#[from] QuoteError),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Value every stored position at its current market price.
///
/// Quotes are fetched per position, sequentially. A single failing fetch
/// aborts the whole request; no partial results are returned.
pub async fn value_positions(
    repo: &Repository,
    quotes: &dyn QuoteSource,
    symbol: Option<&Symbol>,
) -> Result<Vec<ValuedPosition>, ValuationError> {
    let positions = repo.list_positions(symbol).await?;
    if positions.is_empty() {
        return Err(ValuationError::NoPositionsFound);
    }

    let mut valued = Vec::with_capacity(positions.len());
    for position in positions {
        let quote = quotes.fetch_quote(&position.symbol).await?;
        let price = quote
            .executable_price()
            .ok_or(QuoteError::PriceUnavailable)?;
        valued.push(position.valued_at(price));
    }

    Ok(valued)
}
