//! Purchase and sale execution against the ledger store.

use crate::db::{Repository, StoreError};
use crate::domain::{Symbol, TransactionDraft, TransactionKind, TransactionRecord};
use crate::quotes::{QuoteError, QuoteSource};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Error type for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Requested share quantity is zero or negative.
    #[error("shares must be a positive quantity")]
    InvalidQuantity,
    /// Sale exceeds held shares, or the symbol is not held at all.
    #[error("not enough shares to sell or instrument not found in portfolio")]
    InsufficientHoldings,
    #[error(transparent)]
    Quote(#[from] QuoteError),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InsufficientHoldings => LedgerError::InsufficientHoldings,
            StoreError::Db(e) => LedgerError::Db(e),
        }
    }
}

/// Executes buy/sell operations, mutating the transaction log and the
/// derived position together.
pub struct LedgerEngine {
    repo: Arc<Repository>,
    quotes: Arc<dyn QuoteSource>,
}

impl LedgerEngine {
    pub fn new(repo: Arc<Repository>, quotes: Arc<dyn QuoteSource>) -> Self {
        LedgerEngine { repo, quotes }
    }

    /// Buy `shares` of `symbol` at the current market price.
    ///
    /// Fetches one quote, then appends the transaction and upserts the
    /// position as a single store commit. A quote failure aborts before
    /// anything is written.
    pub async fn execute_purchase(
        &self,
        symbol: Symbol,
        shares: i64,
    ) -> Result<TransactionRecord, LedgerError> {
        if shares <= 0 {
            return Err(LedgerError::InvalidQuantity);
        }

        let quote = self.quotes.fetch_quote(&symbol).await?;
        let price = quote
            .executable_price()
            .ok_or(QuoteError::PriceUnavailable)?;

        let draft =
            TransactionDraft::new(TransactionKind::Purchase, symbol, shares, price, Utc::now());
        let record = self.repo.commit_purchase(&draft).await?;

        info!(
            "Executed purchase: {} x{} @ {} (value {})",
            record.symbol, record.shares, record.price, record.value
        );
        Ok(record)
    }

    /// Sell `shares` of `symbol` at the current market price.
    ///
    /// Holdings are validated before the quote fetch so a doomed sale never
    /// costs a provider round-trip; the store re-checks them inside its own
    /// transaction, which is the authoritative guard against concurrent
    /// sales of the same symbol.
    pub async fn execute_sale(
        &self,
        symbol: Symbol,
        shares: i64,
    ) -> Result<TransactionRecord, LedgerError> {
        if shares <= 0 {
            return Err(LedgerError::InvalidQuantity);
        }

        match self.repo.find_position(&symbol).await? {
            Some(position) if position.shares >= shares => {}
            _ => return Err(LedgerError::InsufficientHoldings),
        }

        let quote = self.quotes.fetch_quote(&symbol).await?;
        let price = quote
            .executable_price()
            .ok_or(QuoteError::PriceUnavailable)?;

        let draft = TransactionDraft::new(TransactionKind::Sale, symbol, shares, price, Utc::now());
        let record = self.repo.commit_sale(&draft).await?;

        info!(
            "Executed sale: {} x{} @ {} (value {})",
            record.symbol, record.shares, record.price, record.value
        );
        Ok(record)
    }
}
