//! Quote snapshot consumed from the external provider.

use super::Decimal;
use serde::{Deserialize, Serialize};

/// A snapshot of an instrument's current trading state.
///
/// Every field is optional: a provider lookup can succeed while individual
/// fields (including the price) are absent from the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub name: Option<String>,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub current_price: Option<Decimal>,
    pub change_value: Option<Decimal>,
    pub change_percent: Option<Decimal>,
}

impl Quote {
    /// The price a ledger operation may execute at.
    ///
    /// A missing price and a zero price are both unusable; the provider emits
    /// zero for instruments it cannot currently price.
    pub fn executable_price(&self) -> Option<Decimal> {
        self.current_price.filter(|p| !p.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_executable_price_present() {
        let quote = Quote {
            current_price: Some(Decimal::from_str("188.04").unwrap()),
            ..Default::default()
        };
        assert_eq!(
            quote.executable_price(),
            Some(Decimal::from_str("188.04").unwrap())
        );
    }

    #[test]
    fn test_missing_price_is_not_executable() {
        assert_eq!(Quote::default().executable_price(), None);
    }

    #[test]
    fn test_zero_price_is_not_executable() {
        let quote = Quote {
            current_price: Some(Decimal::zero()),
            ..Default::default()
        };
        assert_eq!(quote.executable_price(), None);
    }
}
