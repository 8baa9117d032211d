use std::sync::Arc;

use storage::Database;

use crate::Result;
use crate::profile::ImportOptions;

/// Shared handles an import run needs: the store and the profile knobs.
pub struct ImportContext {
    pub db: Arc<dyn Database>,
    pub options: ImportOptions,
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub fetched: usize,
    pub written: usize,
    pub skipped: usize,
}

#[async_trait::async_trait]
pub trait EventImporter: Send + Sync {
    async fn import(
        &self,
        season: u16,
        district: &str,
        context: &ImportContext,
    ) -> Result<ImportSummary>;

    fn name(&self) -> &'static str;
}
