mod backend;
mod error;
mod retry;
mod traits;

pub use backend::MySqlBackend;
pub use error::StoreError;
pub use retry::{RetryPolicy, with_retry};
pub use traits::TextStore;
