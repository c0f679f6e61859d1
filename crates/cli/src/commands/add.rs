use anyhow::Result;
use wanderlist_core::{has_separators, split_names};
use wanderlist_service::DestinationStore;

/// Routes raw input to single-add (validated) or bulk-add (separator-split,
/// unvalidated), mirroring how the input box treats the two shapes.
pub(crate) async fn run(store: &DestinationStore, text: &str) -> Result<()> {
    if has_separators(text) {
        let report = store.bulk_add(&split_names(text)).await?;
        println!("Added {} destinations.", report.added);
        if !report.duplicates.is_empty() {
            println!(
                "Ignored {} duplicates: {}",
                report.duplicates.len(),
                report.duplicates.join(", ")
            );
        }
    } else {
        let dest = store.add(text).await?;
        println!("Added \"{}\".", dest.name);
    }
    Ok(())
}
