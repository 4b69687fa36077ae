use crate::error::Result;
use crate::models::review::{Review, Sentiment};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};


/// Durable, append-only collection of reviews.
///
/// Stored reviews are immutable; the store exposes no update or delete.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Persist a new review and return it with its assigned id.
    async fn append(
        &self,
        text: &str,
        sentiment: Sentiment,
        created_at: DateTime<Utc>,
    ) -> Result<Review>;

    /// All reviews, or only those with the given label, in creation order.
    async fn scan(&self, filter: Option<Sentiment>) -> Result<Vec<Review>>;
}

// SQLite-backed review store
#[derive(Debug, Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    // Open (or create) the database file; ":memory:" gives a private in-memory store
    pub fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        info!("Database connection established at: {}", db_path);
        Ok(Database {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    // Create the database schema. Safe to call any number of times.
    pub async fn create_schema(&self) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                sentiment TEXT NOT NULL,
                created_at TEXT NOT NULL
            );",
        )
        .map_err(|e| {
            tracing::error!("Failed creating reviews table: {}", e);
            e
        })?;
        debug!("[DB] Schema ready");
        Ok(())
    }
}

fn review_from_row(row: &Row<'_>) -> rusqlite::Result<Review> {
    let created_at: String = row.get(3)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?
        .with_timezone(&Utc);

    Ok(Review {
        id: row.get(0)?,
        text: row.get(1)?,
        sentiment: row.get(2)?,
        created_at,
    })
}

#[async_trait]
impl ReviewStore for Database {
    async fn append(
        &self,
        text: &str,
        sentiment: Sentiment,
        created_at: DateTime<Utc>,
    ) -> Result<Review> {
        // SQLite calls are synchronous; the guard scope is the operation
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO reviews (text, sentiment, created_at) VALUES (?, ?, ?)",
            params![
                text,
                sentiment,
                created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
            ],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        debug!("[DB] Review {} stored as {}", id, sentiment);

        Ok(Review {
            id,
            text: text.to_string(),
            sentiment,
            created_at,
        })
    }

    async fn scan(&self, filter: Option<Sentiment>) -> Result<Vec<Review>> {
        // SQLite calls are synchronous; the guard scope is the operation
        let conn = self.conn.lock().await;
        let reviews = match filter {
            Some(sentiment) => {
                let mut stmt = conn.prepare(
                    "SELECT id, text, sentiment, created_at FROM reviews
                    WHERE sentiment = ?
                    ORDER BY id ASC",
                )?;
                let rows = stmt.query_map([sentiment], review_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id, text, sentiment, created_at FROM reviews ORDER BY id ASC",
                )?;
                let rows = stmt.query_map([], review_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };

        debug!(
            "[DB] Fetched {} reviews (filter: {})",
            reviews.len(),
            filter.map_or("none", |s| s.as_str())
        );
        Ok(reviews)
    }
}
