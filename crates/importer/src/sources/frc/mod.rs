mod client;
mod models;

pub use client::{DEFAULT_BASE_URL, FrcEventsClient};
pub use models::{ApiEvent, EventsResponse};

use std::collections::HashSet;

use serde_json::Value;
use storage::{Database, DbPath};
use tracing::info;

use crate::error::{ImporterError, Result};
use crate::keygen;
use crate::records::EventRecord;
use crate::traits::{EventImporter, ImportContext, ImportSummary};

/// Imports district events from the FRC Events API into the store, one
/// record per event under a freshly generated key.
pub struct FrcEventImporter {
    client: FrcEventsClient,
}

impl FrcEventImporter {
    pub fn new(client: FrcEventsClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl EventImporter for FrcEventImporter {
    async fn import(
        &self,
        season: u16,
        district: &str,
        context: &ImportContext,
    ) -> Result<ImportSummary> {
        let events = self.client.fetch_district_events(season, district).await?;
        info!(
            "Fetched {} events for season {} district {}",
            events.len(),
            season,
            district
        );

        let root = context.options.events_root(season);
        let existing = if context.options.dedupe_by_event_code {
            existing_event_codes(context.db.as_ref(), &root).await?
        } else {
            HashSet::new()
        };

        let mut summary = ImportSummary {
            fetched: events.len(),
            ..ImportSummary::default()
        };

        for event in &events {
            if existing.contains(&event.code) {
                summary.skipped += 1;
                continue;
            }

            let key = keygen::generate_key();
            let record = EventRecord::from_api(event, &context.options)?;
            context
                .db
                .write(&root.child(key.as_str()), &serde_json::to_value(&record)?)
                .await?;
            info!("Wrote event {} as {}", event.code, key);
            summary.written += 1;
        }

        Ok(summary)
    }

    fn name(&self) -> &'static str {
        "FrcEvents"
    }
}

/// Event codes already present under `root`. An absent root means no events
/// have been imported yet and reads as empty.
async fn existing_event_codes(db: &dyn Database, root: &DbPath) -> Result<HashSet<String>> {
    let Some(value) = db.read(root).await? else {
        return Ok(HashSet::new());
    };

    let children = value.as_object().ok_or_else(|| {
        ImporterError::UnexpectedShape(format!("expected an object of event records at {root}"))
    })?;

    let mut codes = HashSet::with_capacity(children.len());
    for (key, child) in children {
        let code = child
            .get("eventCode")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ImporterError::UnexpectedShape(format!(
                    "record {root}/{key} has no string eventCode"
                ))
            })?;
        codes.insert(code.to_string());
    }
    Ok(codes)
}
