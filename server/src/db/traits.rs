use async_trait::async_trait;
use shared_types::TextEntry;

use super::error::StoreError;

#[async_trait]
pub trait TextStore: Send + Sync {
    async fn init_schema(&self) -> Result<(), StoreError>;
    async fn insert_text(&self, text: &str) -> Result<i64, StoreError>;
    async fn list_texts(&self) -> Result<Vec<TextEntry>, StoreError>;
}
