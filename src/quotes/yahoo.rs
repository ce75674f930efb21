//! Yahoo Finance quote API client.

use super::{QuoteError, QuoteSource};
use crate::domain::{Decimal, Quote, Symbol};
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal as RustDecimal;
use tracing::debug;

/// Quote source backed by the Yahoo Finance quote endpoint.
///
/// Issues one GET per lookup with the configured region/language and API
/// credential, and reads the first entry of `quoteResponse.result`.
#[derive(Debug, Clone)]
pub struct YahooQuoteSource {
    client: Client,
    base_url: String,
    region: String,
    lang: String,
    api_key: String,
}

impl YahooQuoteSource {
    pub fn new(base_url: String, region: String, lang: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            region,
            lang,
            api_key,
        }
    }
}

#[async_trait]
impl QuoteSource for YahooQuoteSource {
    async fn fetch_quote(&self, symbol: &Symbol) -> Result<Quote, QuoteError> {
        debug!("Fetching quote for symbol={}", symbol);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("region", self.region.as_str()),
                ("lang", self.lang.as_str()),
                ("symbols", symbol.as_str()),
            ])
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| QuoteError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Unavailable(format!(
                "provider returned status {}",
                status.as_u16()
            )));
        }

        let payload = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| QuoteError::Unavailable(e.to_string()))?;

        parse_quote_payload(&payload)
    }
}

/// Parse a provider payload into a Quote.
///
/// An empty `quoteResponse.result` array means the symbol is unknown to the
/// provider; a missing array entirely is treated the same way.
fn parse_quote_payload(payload: &serde_json::Value) -> Result<Quote, QuoteError> {
    let entry = payload
        .get("quoteResponse")
        .and_then(|q| q.get("result"))
        .and_then(|r| r.as_array())
        .and_then(|r| r.first())
        .ok_or(QuoteError::InstrumentNotFound)?;

    Ok(Quote {
        name: entry
            .get("longName")
            .and_then(|v| v.as_str())
            .map(String::from),
        bid: decimal_field(entry, "bid"),
        ask: decimal_field(entry, "ask"),
        current_price: decimal_field(entry, "regularMarketPrice"),
        change_value: decimal_field(entry, "regularMarketChange"),
        change_percent: decimal_field(entry, "regularMarketChangePercent"),
    })
}

fn decimal_field(entry: &serde_json::Value, key: &str) -> Option<Decimal> {
    entry
        .get(key)
        .and_then(|v| v.as_f64())
        .and_then(RustDecimal::from_f64)
        .map(Decimal::from)
}
