use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::engine::{LedgerError, ValuationError};
use crate::quotes::QuoteError;

/// Caller-facing error taxonomy.
///
/// Each variant maps to a distinct `code` in the response body so clients can
/// branch on the failure kind (retry later vs. fix the request).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Error fetching data from quote provider: {0}")]
    QuoteUnavailable(String),
    #[error("Instrument not found")]
    InstrumentNotFound,
    #[error("Price information not available")]
    PriceUnavailable,
    #[error("Not enough shares to sell or instrument not found in portfolio")]
    InsufficientHoldings,
    #[error("No portfolio entry found")]
    NoPositionsFound,
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            AppError::QuoteUnavailable(_) => (StatusCode::BAD_GATEWAY, "QUOTE_UNAVAILABLE"),
            AppError::InstrumentNotFound => (StatusCode::NOT_FOUND, "INSTRUMENT_NOT_FOUND"),
            AppError::PriceUnavailable => (StatusCode::BAD_GATEWAY, "PRICE_UNAVAILABLE"),
            AppError::InsufficientHoldings => (StatusCode::BAD_REQUEST, "INSUFFICIENT_HOLDINGS"),
            AppError::NoPositionsFound => (StatusCode::NOT_FOUND, "NO_POSITIONS_FOUND"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        }
    }
}

impl From<QuoteError> for AppError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::Unavailable(msg) => AppError::QuoteUnavailable(msg),
            QuoteError::InstrumentNotFound => AppError::InstrumentNotFound,
            QuoteError::PriceUnavailable => AppError::PriceUnavailable,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidQuantity => {
                AppError::InvalidRequest("shares must be a positive quantity".to_string())
            }
            LedgerError::InsufficientHoldings => AppError::InsufficientHoldings,
            LedgerError::Quote(e) => e.into(),
            LedgerError::Db(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<ValuationError> for AppError {
    fn from(err: ValuationError) -> Self {
        match err {
            ValuationError::NoPositionsFound => AppError::NoPositionsFound,
            ValuationError::Quote(e) => e.into(),
            ValuationError::Db(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = Json(json!({
            "error": self.to_string(),
            "code": code,
        }));

        (status, body).into_response()
    }
}
