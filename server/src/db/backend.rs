use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::TextEntry;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, FromRow};
use std::time::Duration;
use tracing::{info, warn};

use super::error::StoreError;
use super::retry::{RetryPolicy, with_retry};
use super::traits::TextStore;
use crate::config::DatabaseConfig;

/// Retry policy for one connection-factory call.
const CONNECT_RETRY: RetryPolicy = RetryPolicy::new(5, Duration::from_secs(2));

/// Retry policy wrapped around the whole connect-and-create-table sequence at
/// startup.
const SCHEMA_INIT_RETRY: RetryPolicy = RetryPolicy::new(10, Duration::from_secs(3));

const CREATE_TABLE_SQL: &str = "\
CREATE TABLE IF NOT EXISTS texts (
    id INT AUTO_INCREMENT PRIMARY KEY,
    text TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const INSERT_SQL: &str = "INSERT INTO texts (text) VALUES (?)";

const LIST_SQL: &str = "SELECT id, text, created_at FROM texts ORDER BY id DESC";

/// MySQL-backed [`TextStore`].
///
/// Every operation opens a fresh, unshared connection through the retrying
/// factory and closes it before returning; there is no pool and no connection
/// state carried across calls.
pub struct MySqlBackend {
    config: DatabaseConfig,
    connect_retry: RetryPolicy,
    init_retry: RetryPolicy,
}

impl MySqlBackend {
    pub fn new(config: DatabaseConfig) -> Self {
        Self::with_retry_policies(config, CONNECT_RETRY, SCHEMA_INIT_RETRY)
    }

    /// Same backend with custom retry policies (tests use short delays).
    pub fn with_retry_policies(
        config: DatabaseConfig,
        connect_retry: RetryPolicy,
        init_retry: RetryPolicy,
    ) -> Self {
        Self {
            config,
            connect_retry,
            init_retry,
        }
    }

    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .username(&self.config.user)
            .password(&self.config.password)
            .database(&self.config.database)
    }

    /// The connection factory: open a new connection, retrying on a fixed
    /// delay until the policy is exhausted.
    async fn connect(&self) -> Result<MySqlConnection, StoreError> {
        let options = self.connect_options();

        with_retry(self.connect_retry, || {
            let options = options.clone();
            async move { MySqlConnection::connect_with(&options).await }
        })
        .await
        .map_err(|source| StoreError::ConnectionExhausted {
            attempts: self.connect_retry.max_attempts,
            source,
        })
    }

    async fn create_table(&self) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(CREATE_TABLE_SQL).execute(&mut conn).await;
        close_quietly(conn).await;
        result?;
        Ok(())
    }
}

#[async_trait]
impl TextStore for MySqlBackend {
    async fn init_schema(&self) -> Result<(), StoreError> {
        with_retry(self.init_retry, move || self.create_table()).await?;
        info!("database schema initialized");
        Ok(())
    }

    async fn insert_text(&self, text: &str) -> Result<i64, StoreError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(INSERT_SQL).bind(text).execute(&mut conn).await;
        close_quietly(conn).await;
        let done = result?;
        Ok(done.last_insert_id() as i64)
    }

    async fn list_texts(&self) -> Result<Vec<TextEntry>, StoreError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, TextRow>(LIST_SQL)
            .fetch_all(&mut conn)
            .await;
        close_quietly(conn).await;
        Ok(result?.into_iter().map(TextEntry::from).collect())
    }
}

/// Row shape for `LIST_SQL`. The column is `INT`, so it decodes as `i32` and
/// is widened to the `i64` id the API exposes.
#[derive(FromRow)]
struct TextRow {
    id: i32,
    text: String,
    created_at: DateTime<Utc>,
}

impl From<TextRow> for TextEntry {
    fn from(row: TextRow) -> Self {
        TextEntry::new(i64::from(row.id), row.text, row.created_at)
    }
}

/// Graceful close. A close failure is logged and never outranks the query
/// result; error paths that skip this still release the socket on drop.
async fn close_quietly(conn: MySqlConnection) {
    if let Err(err) = conn.close().await {
        warn!(error = %err, "database connection did not close cleanly");
    }
}
