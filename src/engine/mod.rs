//! Ledger engine: purchase/sale execution and portfolio valuation.

pub mod ledger;
pub mod valuation;

pub use ledger::{LedgerEngine, LedgerError};
pub use valuation::{value_positions, ValuationError};
