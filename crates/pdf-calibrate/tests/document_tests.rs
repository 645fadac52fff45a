use lopdf::{Dictionary, Document, Object, Stream};
use pdf_calibrate::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn create_test_pdf(num_pages: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");

    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
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
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_load_counts_pages() {
    let file = write_temp(&create_test_pdf(5));
    let info = load_document(file.path()).await.unwrap();
    assert_eq!(info.page_count, 5);
    assert_eq!(info.path, file.path());
}

#[tokio::test]
async fn test_load_rejects_non_pdf() {
    let file = write_temp(b"just some notes, definitely not a PDF");
    let err = load_document(file.path()).await.unwrap_err();
    assert!(matches!(err, LoadError::NotAPdf { .. }));
    assert_eq!(err.kind(), LoadFailureKind::LoadFailed);
    assert_eq!(err.path(), file.path());
}

#[tokio::test]
async fn test_load_rejects_truncated_pdf() {
    let file = write_temp(b"%PDF-1.7\n1 0 obj\n<< /Type /Catalog");
    let err = load_document(file.path()).await.unwrap_err();
    assert!(matches!(err, LoadError::NotAPdf { .. }));
}

#[tokio::test]
async fn test_load_missing_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.pdf");
    let err = load_document(&path).await.unwrap_err();
    assert!(matches!(err, LoadError::Unreadable { .. }));
    assert_eq!(err.kind(), LoadFailureKind::LoadFailed);
}

#[test]
fn test_permission_denied_maps_to_access_denied() {
    let err = LoadError::PermissionDenied {
        path: PathBuf::from("/locked.pdf"),
    };
    assert_eq!(err.kind(), LoadFailureKind::AccessDenied);
    assert!(err.to_string().contains("Permission denied"));
}

#[test]
fn test_pdf_header_detection() {
    assert!(has_pdf_header(b"%PDF-1.4\n"));
    assert!(has_pdf_header(b"\xEF\xBB\xBF%PDF-1.7"));
    assert!(!has_pdf_header(b"PK\x03\x04"));
    assert!(!has_pdf_header(b""));

    let mut late = vec![b' '; 2048];
    late.extend_from_slice(b"%PDF-1.4");
    assert!(!has_pdf_header(&late));
}

#[test]
fn test_display_name() {
    let info = DocumentInfo {
        path: PathBuf::from("/patterns/skirt.pdf"),
        page_count: 3,
    };
    assert_eq!(info.display_name(), "skirt.pdf");
}
