use std::path::{Path, PathBuf};

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::error::{AppError, AppResult};
use crate::event::DomainEvent;

use super::hayro::PdfDoc;
use super::traits::PdfBackend;

/// Opens the configured document synchronously. A document without pages is
/// rejected here so the navigator never sees a count below 1.
pub fn open_document(path: &Path) -> AppResult<Box<dyn PdfBackend>> {
    let doc = PdfDoc::open(path)?;
    if doc.page_count() == 0 {
        return Err(AppError::invalid_argument("pdf has no pages"));
    }
    Ok(Box::new(doc))
}

/// Runs the document load on a blocking task and delivers exactly one
/// `DocumentReady` event into the loop channel.
pub(crate) fn spawn_loader_task(
    tx: UnboundedSender<DomainEvent>,
    path: PathBuf,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = match tokio::task::spawn_blocking(move || open_document(&path)).await {
            Ok(outcome) => outcome,
            Err(join_error) => Err(AppError::unsupported(format!(
                "document loader task stopped: {join_error}"
            ))),
        };
        let _ = tx.send(DomainEvent::DocumentReady(outcome));
    })
}
