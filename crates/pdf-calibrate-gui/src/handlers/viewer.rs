use pdf_async_runtime::{DocumentId, DocumentInfo, LoadError, PdfUpdate, UpdateSender};
use pdf_calibrate::load_document;
use std::path::{Path, PathBuf};

use crate::viewer::{CachedPage, DocumentStore, count_pages, rasterize_page};

pub async fn handle_load(path: PathBuf, state: &mut DocumentStore, update_tx: &UpdateSender) {
    load_with(path, state, update_tx, count_pages).await;
}

/// Validate the file, then make sure the renderer can open it too.
///
/// The renderer's page count wins, since it is what page indices address.
async fn load_with<F>(
    path: PathBuf,
    state: &mut DocumentStore,
    update_tx: &UpdateSender,
    open_for_render: F,
) where
    F: FnOnce(&Path) -> Result<usize, LoadError> + Send + 'static,
{
    log::info!("Loading {}", path.display());

    match open_checked(&path, open_for_render).await {
        Ok(info) => {
            let doc_id = state.next_id();
            state.add_document(doc_id, info.path.clone());
            log::info!(
                "Loaded {} ({} pages) as {:?}",
                info.display_name(),
                info.page_count,
                doc_id
            );
            let _ = update_tx.send(PdfUpdate::ViewerLoaded { doc_id, info });
        }
        Err(error) => {
            log::warn!("{}", error);
            let _ = update_tx.send(PdfUpdate::ViewerLoadFailed { error });
        }
    }
}

async fn open_checked<F>(path: &Path, open_for_render: F) -> Result<DocumentInfo, LoadError>
where
    F: FnOnce(&Path) -> Result<usize, LoadError> + Send + 'static,
{
    let mut info = load_document(path).await?;

    let render_path = info.path.clone();
    let page_count = tokio::task::spawn_blocking(move || open_for_render(&render_path))
        .await
        .map_err(|e| LoadError::Unreadable {
            path: info.path.clone(),
            message: format!("Task join error: {}", e),
        })??;

    if page_count != info.page_count {
        log::debug!(
            "Page count differs between parsers ({} vs {}), using the renderer's",
            info.page_count,
            page_count
        );
    }
    info.page_count = page_count;
    Ok(info)
}

async fn render_to_cache(
    doc_id: DocumentId,
    page_index: usize,
    state: &mut DocumentStore,
) -> Result<CachedPage, String> {
    let cache_key = (doc_id, page_index);

    if let Some(cached) = state.get_from_cache(&cache_key) {
        return Ok(cached.clone());
    }

    let pdf_path = state
        .get_document(&doc_id)
        .cloned()
        .ok_or_else(|| format!("Document not found: {:?}", doc_id))?;

    match tokio::task::spawn_blocking(move || rasterize_page(&pdf_path, page_index)).await {
        Ok(Ok(page)) => {
            state.add_to_cache(cache_key, page.clone());
            Ok(page)
        }
        Ok(Err(e)) => Err(format!("Failed to render page {}: {}", page_index + 1, e)),
        Err(e) => Err(format!("Task join error: {}", e)),
    }
}

pub async fn handle_render_page(
    doc_id: DocumentId,
    page_index: usize,
    state: &mut DocumentStore,
    update_tx: &UpdateSender,
) {
    match render_to_cache(doc_id, page_index, state).await {
        Ok(page) => {
            let _ = update_tx.send(PdfUpdate::ViewerPageRendered {
                doc_id,
                page_index,
                width: page.width,
                height: page.height,
                rgba_data: page.rgba_data,
            });
        }
        Err(message) => {
            log::warn!("{}", message);
            let _ = update_tx.send(PdfUpdate::Error { message });
        }
    }
}

/// Prefetch pages into cache without sending updates to UI
pub async fn handle_prefetch_pages(
    doc_id: DocumentId,
    page_indices: Vec<usize>,
    state: &mut DocumentStore,
) {
    for page_index in page_indices {
        if state.is_cached(&(doc_id, page_index)) {
            continue;
        }

        match render_to_cache(doc_id, page_index, state).await {
            Ok(_) => log::debug!("Prefetched page {} into cache", page_index + 1),
            Err(message) => log::warn!("Prefetch failed: {}", message),
        }
    }
}

pub async fn handle_close(doc_id: DocumentId, state: &mut DocumentStore, update_tx: &UpdateSender) {
    state.remove_document(doc_id);
    log::debug!("Closed {:?}", doc_id);
    let _ = update_tx.send(PdfUpdate::ViewerClosed { doc_id });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_calibrate::{LoadError, LoadFailureKind};
    use tokio::sync::mpsc;

    fn one_page_pdf() -> Vec<u8> {
        use lopdf::{Dictionary, Document, Object, Stream};

        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]));
        doc.objects.insert(
            pages_id,
            Object::Dictionary(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Pages".to_vec())),
                ("Kids", Object::Array(vec![Object::Reference(page_id)])),
                ("Count", Object::Integer(1)),
            ])),
        );
        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    fn write_pattern(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("pattern.pdf");
        std::fs::write(&path, one_page_pdf()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_takes_page_count_from_renderer() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pattern(&dir);

        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let mut store = DocumentStore::new();
        load_with(path.clone(), &mut store, &update_tx, |_| Ok(3)).await;

        match update_rx.try_recv().unwrap() {
            PdfUpdate::ViewerLoaded { doc_id, info } => {
                assert_eq!(info.page_count, 3);
                assert_eq!(store.get_document(&doc_id), Some(&path));
            }
            other => panic!("Expected ViewerLoaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_renderer_rejection_is_a_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pattern(&dir);

        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let mut store = DocumentStore::new();
        load_with(path, &mut store, &update_tx, |path| {
            Err(LoadError::NotAPdf {
                path: path.to_owned(),
                reason: "renderer refused it".to_string(),
            })
        })
        .await;

        match update_rx.try_recv().unwrap() {
            PdfUpdate::ViewerLoadFailed { error } => {
                assert!(matches!(error, LoadError::NotAPdf { .. }));
                assert_eq!(error.kind(), LoadFailureKind::LoadFailed);
            }
            other => panic!("Expected ViewerLoadFailed, got {:?}", other),
        }
        assert_eq!(store.document_count(), 0);
    }

    #[tokio::test]
    async fn test_load_reports_ready_only_when_renderer_can_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pattern(&dir);
        let renderer_available = crate::viewer::init_pdfium().is_ok();

        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let mut store = DocumentStore::new();
        handle_load(path.clone(), &mut store, &update_tx).await;

        match update_rx.try_recv().unwrap() {
            PdfUpdate::ViewerLoaded { doc_id, info } if renderer_available => {
                assert_eq!(info.page_count, 1);
                assert_eq!(store.get_document(&doc_id), Some(&path));
            }
            PdfUpdate::ViewerLoadFailed { error } if !renderer_available => {
                assert!(matches!(error, LoadError::Unreadable { .. }));
                assert_eq!(store.document_count(), 0);
            }
            other => panic!(
                "Unexpected update (renderer available: {}): {:?}",
                renderer_available, other
            ),
        }
    }

    #[tokio::test]
    async fn test_load_of_non_pdf_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "shopping list").unwrap();

        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let mut store = DocumentStore::new();
        handle_load(path, &mut store, &update_tx).await;

        match update_rx.try_recv().unwrap() {
            PdfUpdate::ViewerLoadFailed { error } => {
                assert!(matches!(error, LoadError::NotAPdf { .. }));
                assert_eq!(error.kind(), LoadFailureKind::LoadFailed);
            }
            other => panic!("Expected ViewerLoadFailed, got {:?}", other),
        }
        assert_eq!(store.document_count(), 0);
    }

    #[tokio::test]
    async fn test_render_unknown_document_reports_error() {
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let mut store = DocumentStore::new();
        handle_render_page(DocumentId(42), 0, &mut store, &update_tx).await;

        match update_rx.try_recv().unwrap() {
            PdfUpdate::Error { message } => assert!(message.contains("Document not found")),
            other => panic!("Expected Error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_render_serves_cached_page() {
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let mut store = DocumentStore::new();
        let doc_id = store.next_id();
        store.add_to_cache(
            (doc_id, 2),
            CachedPage {
                rgba_data: vec![255; 16],
                width: 2,
                height: 2,
            },
        );

        handle_render_page(doc_id, 2, &mut store, &update_tx).await;

        match update_rx.try_recv().unwrap() {
            PdfUpdate::ViewerPageRendered {
                page_index,
                width,
                height,
                rgba_data,
                ..
            } => {
                assert_eq!((page_index, width, height), (2, 2, 2));
                assert_eq!(rgba_data.len(), 16);
            }
            other => panic!("Expected ViewerPageRendered, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_close_forgets_document() {
        let (update_tx, mut update_rx) = mpsc::unbounded_channel();
        let mut store = DocumentStore::new();
        let doc_id = store.next_id();
        store.add_document(doc_id, PathBuf::from("a.pdf"));

        handle_close(doc_id, &mut store, &update_tx).await;

        assert_eq!(store.document_count(), 0);
        assert!(matches!(
            update_rx.try_recv().unwrap(),
            PdfUpdate::ViewerClosed { doc_id: closed } if closed == doc_id
        ));
    }
}
