use tracing::info;

use crate::cli::commands::RecordsArgs;
use crate::cli::scan::load_config;
use crate::errors::AuditError;
use crate::reporting;
use crate::store::{self, Store};

pub async fn handle_records(args: RecordsArgs) -> Result<(), AuditError> {
    let config = load_config(args.config.as_deref()).await?;
    let store = store::open_store(&config.store)?;

    let summaries = store.list_all().await?;
    if summaries.is_empty() {
        println!("No records found in {} store.", store.backend_name());
    } else {
        println!("{}", reporting::format_records_table(&summaries));
        println!("{} record(s).", summaries.len());
    }

    if let Some(path) = &args.export {
        let records = store.export_all().await?;
        let json = serde_json::to_string_pretty(&records)?;
        tokio::fs::write(path, json).await?;
        info!(path = %path, count = records.len(), "Full record export written");
    }

    Ok(())
}
