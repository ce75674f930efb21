use super::{AppState, TransactionDto};
use crate::domain::Symbol;
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    pub symbol: Option<String>,
}

/// List transaction history in ascending date order.
///
/// An empty result is a valid response, not an error.
pub async fn get_transactions(
    Query(params): Query<TransactionsQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionDto>>, AppError> {
    let filter = match params.symbol.as_deref() {
        Some("") | None => None,
        Some(s) => {
            Some(Symbol::from_str(s).map_err(|e| AppError::InvalidRequest(e.to_string()))?)
        }
    };

    let records = state.repo.list_transactions(filter.as_ref()).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}
