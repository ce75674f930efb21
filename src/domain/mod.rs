//! Domain types for the portfolio ledger.
//!
//! This module provides:
//! - Lossless numeric handling via the Decimal wrapper
//! - Domain primitives: Symbol, TransactionKind
//! - Transaction and position types carrying the ledger's accounting invariants
//! - The quote snapshot consumed from the external provider

pub mod decimal;
pub mod position;
pub mod primitives;
pub mod quote;
pub mod transaction;

pub use decimal::Decimal;
pub use position::{Position, ValuedPosition};
pub use primitives::{Symbol, SymbolParseError, TransactionKind};
pub use quote::Quote;
pub use transaction::{TransactionDraft, TransactionRecord};
