//! Repository layer for ledger reads and atomic ledger commits.
//!
//! The repository is the only writer of the `transactions` and `portfolio`
//! tables. A purchase or sale is applied as one SQLite transaction: the
//! log append and the position upsert/mutation either both commit or neither
//! does.

use crate::domain::{Decimal, Position, Symbol, TransactionDraft, TransactionRecord};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use std::str::FromStr;
use thiserror::Error;

/// Error type for ledger store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Sale exceeds held shares, or the symbol is not held at all.
    #[error("not enough shares to sell or instrument not found in portfolio")]
    InsufficientHoldings,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Repository over the ledger tables.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Append a purchase transaction and upsert the position atomically.
    ///
    /// Creates the position row on the first purchase of a symbol; otherwise
    /// adds the purchased shares and notional value to the existing row.
    pub async fn commit_purchase(
        &self,
        draft: &TransactionDraft,
    ) -> Result<TransactionRecord, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let id = insert_transaction(&mut tx, draft).await?;

        let existing = fetch_position(&mut tx, &draft.symbol).await?;
        match existing {
            Some(position) => {
                sqlx::query("UPDATE portfolio SET shares = ?, cost_basis = ? WHERE symbol = ?")
                    .bind(position.shares + draft.shares)
                    .bind((position.cost_basis + draft.value).to_canonical_string())
                    .bind(draft.symbol.as_str())
                    .execute(&mut *tx)
                    .await?;
            }
            None => {
                sqlx::query("INSERT INTO portfolio (symbol, shares, cost_basis) VALUES (?, ?, ?)")
                    .bind(draft.symbol.as_str())
                    .bind(draft.shares)
                    .bind(draft.value.to_canonical_string())
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(draft.clone().into_record(id))
    }

    /// Append a sale transaction and mutate the position atomically.
    ///
    /// Holdings are re-checked inside the store transaction, so a concurrent
    /// sale of the same symbol cannot drive the share count negative even if
    /// both passed the engine's pre-flight check. The position row is deleted
    /// when its cost basis lands on exactly zero; deletion is keyed on cost
    /// basis, not on the share count.
    pub async fn commit_sale(
        &self,
        draft: &TransactionDraft,
    ) -> Result<TransactionRecord, StoreError> {
        let mut tx = self.pool.begin().await?;

        let position = match fetch_position(&mut tx, &draft.symbol).await? {
            Some(p) if p.shares >= draft.shares => p,
            _ => return Err(StoreError::InsufficientHoldings),
        };

        let id = insert_transaction(&mut tx, draft).await?;

        let remaining_shares = position.shares - draft.shares;
        let remaining_basis = position.cost_basis - draft.value;
        if remaining_basis.is_zero() {
            sqlx::query("DELETE FROM portfolio WHERE symbol = ?")
                .bind(draft.symbol.as_str())
                .execute(&mut *tx)
                .await?;
        } else {
            sqlx::query("UPDATE portfolio SET shares = ?, cost_basis = ? WHERE symbol = ?")
                .bind(remaining_shares)
                .bind(remaining_basis.to_canonical_string())
                .bind(draft.symbol.as_str())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(draft.clone().into_record(id))
    }

    /// Look up the position for a symbol, if held.
    pub async fn find_position(&self, symbol: &Symbol) -> Result<Option<Position>, sqlx::Error> {
        let row = sqlx::query("SELECT symbol, shares, cost_basis FROM portfolio WHERE symbol = ?")
            .bind(symbol.as_str())
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| position_from_row(&r)).transpose()
    }

    /// List positions, optionally filtered to one symbol.
    pub async fn list_positions(
        &self,
        symbol: Option<&Symbol>,
    ) -> Result<Vec<Position>, sqlx::Error> {
        let rows = match symbol {
            Some(sym) => {
                sqlx::query("SELECT symbol, shares, cost_basis FROM portfolio WHERE symbol = ?")
                    .bind(sym.as_str())
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("SELECT symbol, shares, cost_basis FROM portfolio ORDER BY symbol")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        rows.iter().map(position_from_row).collect()
    }

    /// List transactions in ascending date order, oldest first.
    ///
    /// The id tie-breaker keeps same-timestamp rows in insertion order.
    pub async fn list_transactions(
        &self,
        symbol: Option<&Symbol>,
    ) -> Result<Vec<TransactionRecord>, sqlx::Error> {
        let rows = match symbol {
            Some(sym) => {
                sqlx::query(
                    "SELECT id, kind, symbol, shares, price, value, date FROM transactions \
                     WHERE symbol = ? ORDER BY date ASC, id ASC",
                )
                .bind(sym.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    "SELECT id, kind, symbol, shares, price, value, date FROM transactions \
                     ORDER BY date ASC, id ASC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        rows.iter().map(transaction_from_row).collect()
    }
}

async fn insert_transaction(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    draft: &TransactionDraft,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO transactions (kind, symbol, shares, price, value, date)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(draft.kind.as_str())
    .bind(draft.symbol.as_str())
    .bind(draft.shares)
    .bind(draft.price.to_canonical_string())
    .bind(draft.value.to_canonical_string())
    .bind(draft.date.to_rfc3339())
    .execute(&mut **tx)
    .await?;

    Ok(result.last_insert_rowid())
}

async fn fetch_position(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    symbol: &Symbol,
) -> Result<Option<Position>, sqlx::Error> {
    let row = sqlx::query("SELECT symbol, shares, cost_basis FROM portfolio WHERE symbol = ?")
        .bind(symbol.as_str())
        .fetch_optional(&mut **tx)
        .await?;
    row.map(|r| position_from_row(&r)).transpose()
}

fn position_from_row(row: &SqliteRow) -> Result<Position, sqlx::Error> {
    let symbol: String = row.try_get("symbol")?;
    let cost_basis: String = row.try_get("cost_basis")?;
    Ok(Position {
        symbol: Symbol::from_str(&symbol).map_err(decode_err)?,
        shares: row.try_get("shares")?,
        cost_basis: Decimal::from_str(&cost_basis).map_err(decode_err)?,
    })
}

fn transaction_from_row(row: &SqliteRow) -> Result<TransactionRecord, sqlx::Error> {
    let kind: String = row.try_get("kind")?;
    let symbol: String = row.try_get("symbol")?;
    let price: String = row.try_get("price")?;
    let value: String = row.try_get("value")?;
    let date: String = row.try_get("date")?;

    Ok(TransactionRecord {
        id: row.try_get("id")?,
        kind: kind.parse().map_err(decode_err)?,
        symbol: Symbol::from_str(&symbol).map_err(decode_err)?,
        shares: row.try_get("shares")?,
        price: Decimal::from_str(&price).map_err(decode_err)?,
        value: Decimal::from_str(&value).map_err(decode_err)?,
        date: DateTime::parse_from_rfc3339(&date)
            .map_err(decode_err)?
            .with_timezone(&Utc),
    })
}

fn decode_err<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}
