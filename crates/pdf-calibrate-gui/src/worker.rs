use pdf_async_runtime::{CommandReceiver, PdfCommand, UpdateSender};

use crate::{handlers, viewer};

/// Async worker task that processes PDF commands and sends updates
pub async fn worker_task(mut command_rx: CommandReceiver, update_tx: UpdateSender) {
    let mut store = viewer::DocumentStore::new();

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut store, &mut command_rx, &update_tx).await;
    }

    log::debug!("Command channel closed, worker exiting");
}

async fn process_command(
    cmd: PdfCommand,
    store: &mut viewer::DocumentStore,
    command_rx: &mut CommandReceiver,
    update_tx: &UpdateSender,
) {
    match cmd {
        PdfCommand::ViewerLoad { path } => {
            handlers::viewer::handle_load(path, store, update_tx).await;
        }
        PdfCommand::ViewerRenderPage {
            mut doc_id,
            mut page_index,
        } => {
            // Drain any queued render commands, keeping only the most recent
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let PdfCommand::ViewerRenderPage {
                    doc_id: new_doc_id,
                    page_index: new_page_index,
                } = next_cmd
                {
                    log::debug!("Discarding queued page render, using newer request");
                    doc_id = new_doc_id;
                    page_index = new_page_index;
                } else if let PdfCommand::ViewerPrefetchPages { .. } = next_cmd {
                    // Discard prefetch commands when we have a direct render pending
                    log::debug!("Discarding prefetch during page navigation");
                } else {
                    // Non-render command found, process it before rendering
                    Box::pin(process_command(next_cmd, store, command_rx, update_tx)).await;
                }
            }

            handlers::viewer::handle_render_page(doc_id, page_index, store, update_tx).await;
        }
        PdfCommand::ViewerPrefetchPages {
            doc_id,
            page_indices,
        } => {
            handlers::viewer::handle_prefetch_pages(doc_id, page_indices, store).await;
        }
        PdfCommand::ViewerClose { doc_id } => {
            handlers::viewer::handle_close(doc_id, store, update_tx).await;
        }
        PdfCommand::ProfileLoad { path } => {
            handlers::profile::handle_load(path, update_tx).await;
        }
        PdfCommand::ProfileSave { path, profile } => {
            handlers::profile::handle_save(path, profile, update_tx).await;
        }
    }
}
