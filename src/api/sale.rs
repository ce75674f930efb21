use super::{AppState, TransactionDto};
use crate::domain::Symbol;
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
pub struct SaleParams {
    pub symbol: String,
    pub shares: i64,
}

/// Sell shares at the current market price.
///
/// Holdings are validated before the quote fetch; the sale transaction and
/// the position mutation (or deletion, when cost basis reaches zero) commit
/// atomically. Returns the created transaction.
pub async fn sell_instrument(
    Query(params): Query<SaleParams>,
    State(state): State<AppState>,
) -> Result<Json<TransactionDto>, AppError> {
    let symbol = Symbol::from_str(&params.symbol)
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    let record = state.engine.execute_sale(symbol, params.shares).await?;
    Ok(Json(record.into()))
}
