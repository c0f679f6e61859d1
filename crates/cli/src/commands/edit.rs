use anyhow::Result;
use wanderlist_core::VisitStatus;
use wanderlist_service::DestinationStore;

pub(crate) async fn set_status(
    store: &DestinationStore,
    id: &str,
    status: VisitStatus,
) -> Result<()> {
    if store.toggle_status(id, status).await? {
        println!("Marked {status}.");
    } else {
        println!("No destination with id {id}.");
    }
    Ok(())
}

pub(crate) async fn notes(store: &DestinationStore, id: &str, text: &str) -> Result<()> {
    if store.update_notes(id, text).await? {
        if text.is_empty() {
            println!("Notes cleared.");
        } else {
            println!("Notes updated.");
        }
    } else {
        println!("No destination with id {id}.");
    }
    Ok(())
}

pub(crate) async fn remove(store: &DestinationStore, id: &str) -> Result<()> {
    if store.remove(id).await? {
        println!("Removed.");
    } else {
        println!("No destination with id {id}.");
    }
    Ok(())
}
