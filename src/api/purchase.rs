use super::{AppState, TransactionDto};
use crate::domain::Symbol;
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
pub struct PurchaseParams {
    pub symbol: String,
    pub shares: i64,
}

/// Buy shares at the current market price.
///
/// Appends a Purchase transaction and upserts the portfolio position in one
/// atomic commit; returns the created transaction.
pub async fn purchase_instrument(
    Query(params): Query<PurchaseParams>,
    State(state): State<AppState>,
) -> Result<Json<TransactionDto>, AppError> {
    let symbol = Symbol::from_str(&params.symbol)
        .map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    let record = state.engine.execute_purchase(symbol, params.shares).await?;
    Ok(Json(record.into()))
}
