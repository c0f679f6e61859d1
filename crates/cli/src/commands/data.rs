use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use wanderlist_service::DestinationStore;

pub(crate) async fn export(store: &DestinationStore, file: &Path) -> Result<()> {
    let json = store.export_snapshot().await?;
    if file == Path::new("-") {
        println!("{json}");
        return Ok(());
    }
    fs::write(file, json).with_context(|| format!("writing {}", file.display()))?;
    println!("Exported {} destinations to {}.", store.len().await, file.display());
    Ok(())
}

pub(crate) async fn import(store: &DestinationStore, file: &Path) -> Result<()> {
    let text =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let count = store.import_snapshot(&text).await?;
    println!("Imported {count} destinations.");
    Ok(())
}
