//! Ledger transaction types.
//!
//! Transactions are append-only: a row is written once at execution time and
//! never updated or deleted afterwards.

use super::{Decimal, Symbol, TransactionKind};
use chrono::{DateTime, Utc};

/// A transaction as stored, with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub id: i64,
    pub kind: TransactionKind,
    pub symbol: Symbol,
    pub shares: i64,
    /// Per-share execution price at transaction time.
    pub price: Decimal,
    /// Notional value, stored redundantly for audit. Always `shares * price`.
    pub value: Decimal,
    pub date: DateTime<Utc>,
}

/// A transaction about to be written, before the store assigns an id.
///
/// The only constructor computes `value` from the shares/price pair, so every
/// persisted transaction satisfies `value == shares * price` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub symbol: Symbol,
    pub shares: i64,
    pub price: Decimal,
    pub value: Decimal,
    pub date: DateTime<Utc>,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionKind,
        symbol: Symbol,
        shares: i64,
        price: Decimal,
        date: DateTime<Utc>,
    ) -> Self {
        TransactionDraft {
            kind,
            symbol,
            shares,
            price,
            value: Decimal::from(shares) * price,
            date,
        }
    }

    /// Attach the id assigned by the store on insert.
    pub fn into_record(self, id: i64) -> TransactionRecord {
        TransactionRecord {
            id,
            kind: self.kind,
            symbol: self.symbol,
            shares: self.shares,
            price: self.price,
            value: self.value,
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_draft_value_is_shares_times_price() {
        let draft = TransactionDraft::new(
            TransactionKind::Purchase,
            Symbol::from_str("AAPL").unwrap(),
            5,
            Decimal::from_str("50").unwrap(),
            Utc::now(),
        );
        assert_eq!(draft.value, Decimal::from_str("250").unwrap());
    }

    #[test]
    fn test_into_record_preserves_fields() {
        let draft = TransactionDraft::new(
            TransactionKind::Sale,
            Symbol::from_str("GOOGL").unwrap(),
            10,
            Decimal::from_str("80").unwrap(),
            Utc::now(),
        );
        let record = draft.clone().into_record(7);
        assert_eq!(record.id, 7);
        assert_eq!(record.kind, TransactionKind::Sale);
        assert_eq!(record.shares, 10);
        assert_eq!(record.value, draft.value);
    }
}
