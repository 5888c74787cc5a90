use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database connection failed after {attempts} attempts: {source}")]
    ConnectionExhausted {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },

    #[error("database query failed: {0}")]
    Query(#[from] sqlx::Error),
}
