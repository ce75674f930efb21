//! Domain primitives: Symbol and TransactionKind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Instrument ticker symbol (e.g. "AAPL").
///
/// The natural key of a portfolio position. Guaranteed non-empty; surrounding
/// whitespace is trimmed at parse time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("symbol must be a non-empty string")]
pub struct SymbolParseError;

impl Symbol {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = SymbolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SymbolParseError);
        }
        Ok(Symbol(trimmed.to_string()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Purchase,
    Sale,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Purchase => "Purchase",
            TransactionKind::Sale => "Sale",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transaction kind: {0}")]
pub struct TransactionKindParseError(pub String);

impl FromStr for TransactionKind {
    type Err = TransactionKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Purchase" => Ok(TransactionKind::Purchase),
            "Sale" => Ok(TransactionKind::Sale),
            other => Err(TransactionKindParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_rejects_empty_and_blank() {
        assert!(Symbol::from_str("").is_err());
        assert!(Symbol::from_str("   ").is_err());
    }

    #[test]
    fn test_symbol_trims_whitespace() {
        let sym = Symbol::from_str(" AAPL ").unwrap();
        assert_eq!(sym.as_str(), "AAPL");
    }

    #[test]
    fn test_transaction_kind_roundtrip() {
        for kind in [TransactionKind::Purchase, TransactionKind::Sale] {
            assert_eq!(TransactionKind::from_str(kind.as_str()).unwrap(), kind);
        }
        assert!(TransactionKind::from_str("Short").is_err());
    }
}
