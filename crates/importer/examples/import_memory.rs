use std::sync::Arc;

use importer::{EventImporter, FrcEventImporter, FrcEventsClient, ImportContext, ImportProfile};
use storage::MemoryDb;

/// Dry run: fetch real district events but write them into an in-memory
/// tree and print what would have been stored.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("FRC_API_TOKEN")?;

    let season = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "2022".to_string())
        .parse()?;
    let district = std::env::args().nth(2).unwrap_or_else(|| "FIM".to_string());

    let db = Arc::new(MemoryDb::new());
    let context = ImportContext {
        db: db.clone(),
        options: ImportProfile::default().options(),
    };

    let importer = FrcEventImporter::new(FrcEventsClient::new(&token));
    let summary = importer.import(season, &district, &context).await?;

    println!(
        "{} fetched, {} written, {} skipped",
        summary.fetched, summary.written, summary.skipped
    );
    println!("{}", serde_json::to_string_pretty(&db.snapshot())?);

    Ok(())
}
