use pdf_async_runtime::{DocumentId, LoadError};
use pdfium_render::prelude::*;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Pixels rendered per PDF point; the canvas divides this back out
pub const RENDER_SCALE: f32 = 2.0;

/// Maximum number of pages to cache
const MAX_CACHED_PAGES: usize = 50;

/// Initialize Pdfium, trying the vendored library first, then falling back to system
pub fn init_pdfium() -> Result<Pdfium, PdfiumError> {
    // Relative to the working directory, which is the workspace root under cargo
    let vendor_path = std::env::current_dir().ok().and_then(|mut p| {
        p.push("vendor/pdfium/lib");
        if p.exists() { Some(p) } else { None }
    });

    if let Some(vendor_path) = vendor_path {
        if let Ok(binding) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&vendor_path))
        {
            return Ok(Pdfium::new(binding));
        }
    }

    Pdfium::bind_to_system_library().map(Pdfium::new)
}

/// Open `path` with the renderer and count the pages it can draw.
///
/// A missing pdfium library is reported as unreadable; a document pdfium
/// refuses is reported as not a PDF.
pub fn count_pages(path: &Path) -> Result<usize, LoadError> {
    let pdfium = init_pdfium().map_err(|e| LoadError::Unreadable {
        path: path.to_owned(),
        message: format!("PDF renderer unavailable: {}", e),
    })?;
    let document = pdfium
        .load_pdf_from_file(path, None)
        .map_err(|e| LoadError::NotAPdf {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;
    Ok(document.pages().len() as usize)
}

/// Rasterise one page at [`RENDER_SCALE`]
pub fn rasterize_page(path: &Path, page_index: usize) -> Result<CachedPage, PdfiumError> {
    let pdfium = init_pdfium()?;
    let document = pdfium.load_pdf_from_file(path, None)?;
    let page = document.pages().get(page_index as u16)?;

    let config = PdfRenderConfig::new().scale_page_by_factor(RENDER_SCALE);

    let bitmap = page.render_with_config(&config)?;
    Ok(CachedPage {
        rgba_data: bitmap.as_rgba_bytes().to_vec(),
        width: bitmap.width() as usize,
        height: bitmap.height() as usize,
    })
}

/// Cached page data
#[derive(Clone)]
pub struct CachedPage {
    pub rgba_data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

/// Documents open in the worker and their rendered pages
pub struct DocumentStore {
    documents: HashMap<DocumentId, PathBuf>,
    page_cache: HashMap<(DocumentId, usize), CachedPage>,
    cache_order: VecDeque<(DocumentId, usize)>,
    next_doc_id: AtomicU64,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            page_cache: HashMap::new(),
            cache_order: VecDeque::new(),
            next_doc_id: AtomicU64::new(0),
        }
    }

    pub fn next_id(&self) -> DocumentId {
        DocumentId(self.next_doc_id.fetch_add(1, Ordering::SeqCst))
    }

    pub fn add_document(&mut self, doc_id: DocumentId, path: PathBuf) {
        self.documents.insert(doc_id, path);
    }

    pub fn get_document(&self, doc_id: &DocumentId) -> Option<&PathBuf> {
        self.documents.get(doc_id)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn add_to_cache(&mut self, key: (DocumentId, usize), page: CachedPage) {
        // Remove if already exists (update LRU)
        if self.page_cache.contains_key(&key) {
            self.cache_order.retain(|k| k != &key);
        }

        while self.cache_order.len() >= MAX_CACHED_PAGES {
            if let Some(old_key) = self.cache_order.pop_front() {
                self.page_cache.remove(&old_key);
            }
        }

        self.page_cache.insert(key, page);
        self.cache_order.push_back(key);
    }

    pub fn get_from_cache(&mut self, key: &(DocumentId, usize)) -> Option<&CachedPage> {
        if self.page_cache.contains_key(key) {
            self.cache_order.retain(|k| k != key);
            self.cache_order.push_back(*key);
            self.page_cache.get(key)
        } else {
            None
        }
    }

    pub fn is_cached(&self, key: &(DocumentId, usize)) -> bool {
        self.page_cache.contains_key(key)
    }

    pub fn remove_document(&mut self, doc_id: DocumentId) {
        self.documents.remove(&doc_id);
        // Remove all cached pages for this document
        self.cache_order.retain(|(id, _)| *id != doc_id);
        self.page_cache.retain(|(id, _), _| *id != doc_id);
    }
}
