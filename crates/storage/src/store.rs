use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::path::DbPath;

/// The two operations the importer needs from the backing store.
#[async_trait]
pub trait Database: Send + Sync {
    /// Read the full value stored at `path`, including all children.
    /// Returns `None` when nothing is stored there.
    async fn read(&self, path: &DbPath) -> Result<Option<Value>>;

    /// Write `value` at `path`, replacing whatever was there before.
    async fn write(&self, path: &DbPath, value: &Value) -> Result<()>;
}
