//! selfquiz-extract — turns an uploaded document into plain text.
//!
//! Dispatches on the declared content type: plain text is decoded directly,
//! PDFs are parsed with `lopdf` and their pages concatenated in page order.

pub mod error;
pub mod kind;
pub mod mock;
pub mod pages;
pub mod pdf;
pub mod plain;

use std::path::Path;

pub use error::ExtractError;
pub use kind::DocumentKind;
pub use pages::{extract_pages, PageSource};
pub use pdf::PdfDocument;
pub use plain::extract_plain;

/// Extract the text of a document already loaded into memory.
pub async fn extract_document(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::PlainText => Ok(extract_plain(bytes)),
        DocumentKind::Pdf => {
            let pdf = PdfDocument::from_bytes(bytes)?;
            extract_pages(&pdf).await
        }
    }
}

/// Read and extract a file. `content_type` overrides the type inferred from
/// the file extension.
pub async fn extract_file(path: &Path, content_type: Option<&str>) -> Result<String, ExtractError> {
    let kind = match content_type {
        Some(ct) => DocumentKind::from_content_type(ct)?,
        None => DocumentKind::from_path(path)?,
    };

    let bytes = tokio::fs::read(path).await.map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), kind = %kind, bytes = bytes.len(), "extracting document");
    let text = extract_document(kind, &bytes).await?;
    tracing::debug!(chars = text.chars().count(), "extracted text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn extracts_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "Plain notes for the quiz.").unwrap();

        let text = extract_file(&path, None).await.unwrap();
        assert_eq!(text, "Plain notes for the quiz.");
    }

    #[tokio::test]
    async fn declared_type_overrides_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.data");
        std::fs::write(&path, "Declared as text.").unwrap();

        assert!(extract_file(&path, None).await.unwrap_err().is_unsupported());
        let text = extract_file(&path, Some("text/plain")).await.unwrap();
        assert_eq!(text, "Declared as text.");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let err = extract_file(Path::new("does/not/exist.txt"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::Io { .. }));
    }

    #[tokio::test]
    async fn corrupt_pdf_fails() {
        let err = extract_document(DocumentKind::Pdf, b"not a pdf at all")
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
