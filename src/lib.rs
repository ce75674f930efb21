pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;
pub mod quotes;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{
    Decimal, Position, Quote, Symbol, TransactionDraft, TransactionKind, TransactionRecord,
    ValuedPosition,
};
pub use engine::{LedgerEngine, LedgerError, ValuationError};
pub use error::AppError;
pub use quotes::{MockQuoteSource, QuoteError, QuoteSource, YahooQuoteSource};
