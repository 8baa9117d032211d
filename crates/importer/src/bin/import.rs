use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use clap::error::ErrorKind;
use importer::{EventImporter, FrcEventImporter, FrcEventsClient, ImportContext, ImportProfile};
use storage::{RtdbClient, ServiceCredential};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "frc-import")]
#[command(about = "FRC district event importer", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the database service credential JSON file
    credential_file: PathBuf,

    /// FRC Events API token as `user:key`, not base64 encoded
    api_token: String,

    /// Season year, e.g. 2022
    season: u16,

    /// District code, e.g. FIM
    district_code: String,

    /// Import profile to run
    #[arg(long, default_value_t = ImportProfile::default())]
    profile: ImportProfile,

    /// Log and continue on a non-success events response instead of stopping
    #[arg(long)]
    lenient_fetch: bool,

    /// Override the database URL from the credential file
    #[arg(long, env = "FRC_DATABASE_URL")]
    database_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp
                || err.kind() == ErrorKind::DisplayVersion =>
        {
            err.exit()
        }
        Err(err) => {
            // Usage problems go to stdout with exit code 1, before any
            // network or store access.
            println!("{err}");
            std::process::exit(1);
        }
    };

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("import={log_level},importer={log_level},storage={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let raw_credential = tokio::fs::read_to_string(&cli.credential_file).await?;
    let mut credential = ServiceCredential::from_json(&raw_credential)?;
    if let Some(database_url) = &cli.database_url {
        credential.database_url = database_url.trim_end_matches('/').to_string();
    }

    let context = ImportContext {
        db: Arc::new(RtdbClient::new(credential)),
        options: cli.profile.options(),
    };

    let client = FrcEventsClient::new(&cli.api_token).lenient(cli.lenient_fetch);
    let importer = FrcEventImporter::new(client);

    tracing::info!(
        "Importing {} district events for season {} ({} profile)",
        cli.district_code,
        cli.season,
        cli.profile
    );

    let summary = importer
        .import(cli.season, &cli.district_code, &context)
        .await?;

    tracing::info!(
        "Done: {} fetched, {} written, {} skipped",
        summary.fetched,
        summary.written,
        summary.skipped
    );

    Ok(())
}
