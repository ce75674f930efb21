use super::AppState;
use crate::domain::{Decimal, Quote, Symbol};
use crate::error::AppError;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Serialize)]
pub struct InstrumentDto {
    pub name: Option<String>,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub current_price: Option<Decimal>,
    pub change_value: Option<Decimal>,
    pub change_percent: Option<Decimal>,
}

impl From<Quote> for InstrumentDto {
    fn from(quote: Quote) -> Self {
        InstrumentDto {
            name: quote.name,
            bid: quote.bid,
            ask: quote.ask,
            current_price: quote.current_price,
            change_value: quote.change_value,
            change_percent: quote.change_percent,
        }
    }
}

/// Fetch the live quote for one instrument, as reported by the provider.
pub async fn get_instrument(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<InstrumentDto>, AppError> {
    let symbol =
        Symbol::from_str(&symbol).map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    let quote = state.quotes.fetch_quote(&symbol).await?;
    Ok(Json(quote.into()))
}
