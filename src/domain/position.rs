//! Portfolio position types and valuation math.

use super::{Decimal, Symbol};

/// The aggregate holding in one instrument: one row per symbol.
///
/// `cost_basis` is the cumulative dollar amount paid for the current holding,
/// not a per-share average. Purchases add their notional value; sales subtract
/// theirs. A position whose cost basis reaches exactly zero after a sale is
/// deleted from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub symbol: Symbol,
    pub shares: i64,
    pub cost_basis: Decimal,
}

impl Position {
    /// Value this position at the given market price.
    pub fn valued_at(&self, current_price: Decimal) -> ValuedPosition {
        let market_value = current_price * Decimal::from(self.shares);
        let unrealized_pl = market_value - self.cost_basis;
        let unrealized_return_rate = if self.cost_basis.is_zero() {
            Decimal::zero()
        } else {
            unrealized_pl / self.cost_basis * Decimal::hundred()
        };

        ValuedPosition {
            symbol: self.symbol.clone(),
            shares: self.shares,
            cost_basis: self.cost_basis,
            market_value,
            unrealized_return_rate,
            unrealized_pl,
        }
    }
}

/// A position joined with its live market valuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuedPosition {
    pub symbol: Symbol,
    pub shares: i64,
    pub cost_basis: Decimal,
    pub market_value: Decimal,
    /// Unrealized profit/loss over cost basis, in percent. Zero when the cost
    /// basis is zero.
    pub unrealized_return_rate: Decimal,
    pub unrealized_pl: Decimal,
}
