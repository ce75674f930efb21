pub mod health;
pub mod instrument;
pub mod portfolio;
pub mod purchase;
pub mod sale;
pub mod transactions;

use crate::db::Repository;
use crate::domain::{Decimal, TransactionRecord};
use crate::engine::LedgerEngine;
use crate::quotes::QuoteSource;
use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub quotes: Arc<dyn QuoteSource>,
    pub engine: Arc<LedgerEngine>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, quotes: Arc<dyn QuoteSource>) -> Self {
        let engine = Arc::new(LedgerEngine::new(repo.clone(), quotes.clone()));
        Self {
            repo,
            quotes,
            engine,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health::health))
        .route("/api/instrument/:symbol", get(instrument::get_instrument))
        .route("/api/purchase_instrument", post(purchase::purchase_instrument))
        .route("/api/sell_instrument", post(sale::sell_instrument))
        .route("/api/portfolio", get(portfolio::get_portfolio))
        .route("/api/transactions", get(transactions::get_transactions))
        .layer(cors)
        .with_state(state)
}

async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!(["Welcome to the Portfolio Ledger API"]))
}

/// Wire representation of a ledger transaction, shared by the purchase, sale,
/// and history endpoints.
#[derive(Debug, Serialize)]
pub struct TransactionDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub symbol: String,
    pub shares: i64,
    pub price: Decimal,
    pub value: Decimal,
    pub date: DateTime<Utc>,
}

impl From<TransactionRecord> for TransactionDto {
    fn from(record: TransactionRecord) -> Self {
        TransactionDto {
            id: record.id,
            kind: record.kind.as_str().to_string(),
            symbol: record.symbol.as_str().to_string(),
            shares: record.shares,
            price: record.price,
            value: record.value,
            date: record.date,
        }
    }
}
