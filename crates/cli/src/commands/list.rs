use anyhow::Result;
use wanderlist_core::{StatusFilter, VisitStatus};
use wanderlist_service::DestinationStore;

pub(crate) async fn run(store: &DestinationStore, filter: &str, json: bool) -> Result<()> {
    let filter: StatusFilter = filter.parse().map_err(anyhow::Error::msg)?;
    let destinations = store.filtered(filter).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&destinations)?);
        return Ok(());
    }

    if destinations.is_empty() {
        if filter == StatusFilter::All {
            println!("No destinations yet. Add one with `wanderlist add`.");
        } else {
            println!("No destinations match this filter.");
        }
        return Ok(());
    }

    for dest in destinations {
        let marker = match dest.status {
            VisitStatus::Visited => "x",
            VisitStatus::NeverVisited => " ",
        };
        println!("[{marker}] {}  ({})", dest.name, dest.id);
        if dest.has_notes() {
            println!("      {}", dest.notes);
        }
    }
    Ok(())
}

pub(crate) async fn stats(store: &DestinationStore) -> Result<()> {
    let stats = store.stats().await;
    println!("{} of {} visited ({}%)", stats.visited, stats.total, stats.percent);
    Ok(())
}
