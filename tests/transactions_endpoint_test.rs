use axum::http::StatusCode;
use chrono::{Duration, Utc};
use std::str::FromStr;
use std::sync::Arc;
use stockfolio::{
    api, db::init_db, Decimal, MockQuoteSource, Repository, Symbol, TransactionDraft,
    TransactionKind,
};
use tempfile::TempDir;
use tower::util::ServiceExt;

struct TestApp {
    app: axum::Router,
    repo: Arc<Repository>,
    _temp: TempDir,
}

async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    let repo = Arc::new(Repository::new(pool));

    let state = api::AppState::new(repo.clone(), Arc::new(MockQuoteSource::new()));
    let app = api::create_router(state);

    TestApp {
        app,
        repo,
        _temp: temp_dir,
    }
}

async fn seed_purchase_at(
    repo: &Repository,
    symbol: &str,
    shares: i64,
    price: &str,
    offset_secs: i64,
) {
    let draft = TransactionDraft::new(
        TransactionKind::Purchase,
        Symbol::from_str(symbol).unwrap(),
        shares,
        Decimal::from_str(price).unwrap(),
        Utc::now() + Duration::seconds(offset_secs),
    );
    repo.commit_purchase(&draft).await.unwrap();
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_empty_history_is_empty_array() {
    let test_app = setup_test_app().await;

    let (status, json) = get(test_app.app, "/api/transactions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_history_has_required_fields() {
    let test_app = setup_test_app().await;
    seed_purchase_at(&test_app.repo, "AAPL", 5, "50", 0).await;

    let (status, json) = get(test_app.app, "/api/transactions").await;
    assert_eq!(status, StatusCode::OK);

    let row = &json.as_array().unwrap()[0];
    assert!(row["id"].is_i64());
    assert_eq!(row["type"], "Purchase");
    assert_eq!(row["symbol"], "AAPL");
    assert_eq!(row["shares"], 5);
    assert_eq!(row["price"], 50.0);
    assert_eq!(row["value"], 250.0);
    assert!(row["date"].is_string());
}

#[tokio::test]
async fn test_history_ordered_by_date_ascending() {
    let test_app = setup_test_app().await;
    // Insert out of chronological order.
    seed_purchase_at(&test_app.repo, "AAPL", 3, "30", 20).await;
    seed_purchase_at(&test_app.repo, "GOOGL", 2, "20", 10).await;
    seed_purchase_at(&test_app.repo, "AAPL", 1, "10", 0).await;

    let (status, json) = get(test_app.app, "/api/transactions").await;
    assert_eq!(status, StatusCode::OK);

    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["shares"], 1);
    assert_eq!(rows[1]["shares"], 2);
    assert_eq!(rows[2]["shares"], 3);

    let dates: Vec<&str> = rows.iter().map(|r| r["date"].as_str().unwrap()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn test_history_symbol_filter() {
    let test_app = setup_test_app().await;
    seed_purchase_at(&test_app.repo, "AAPL", 1, "10", 0).await;
    seed_purchase_at(&test_app.repo, "GOOGL", 2, "20", 1).await;
    seed_purchase_at(&test_app.repo, "AAPL", 3, "30", 2).await;

    let (status, json) = get(test_app.app.clone(), "/api/transactions?symbol=AAPL").await;
    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["symbol"] == "AAPL"));

    // A filter matching nothing is a success with an empty array.
    let (status, json) = get(test_app.app, "/api/transactions?symbol=TSLA").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}
