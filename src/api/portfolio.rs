use super::AppState;
use crate::domain::{Decimal, Symbol, ValuedPosition};
use crate::engine::value_positions;
use crate::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Deserialize)]
pub struct PortfolioQuery {
    pub symbol: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValuedPositionDto {
    pub symbol: String,
    pub shares: i64,
    pub cost_basis: Decimal,
    pub market_value: Decimal,
    pub unrealized_return_rate: Decimal,
    pub unrealized_profit_loss: Decimal,
}

impl From<ValuedPosition> for ValuedPositionDto {
    fn from(valued: ValuedPosition) -> Self {
        ValuedPositionDto {
            symbol: valued.symbol.as_str().to_string(),
            shares: valued.shares,
            cost_basis: valued.cost_basis,
            market_value: valued.market_value,
            unrealized_return_rate: valued.unrealized_return_rate,
            unrealized_profit_loss: valued.unrealized_pl,
        }
    }
}

/// List held positions with their live market valuation.
///
/// Fetches one quote per position; any quote failure fails the whole request
/// rather than returning partial results.
pub async fn get_portfolio(
    Query(params): Query<PortfolioQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ValuedPositionDto>>, AppError> {
    let filter = match params.symbol.as_deref() {
        Some("") | None => None,
        Some(s) => {
            Some(Symbol::from_str(s).map_err(|e| AppError::InvalidRequest(e.to_string()))?)
        }
    };

    let valued = value_positions(&state.repo, state.quotes.as_ref(), filter.as_ref()).await?;
    Ok(Json(valued.into_iter().map(Into::into).collect()))
}
