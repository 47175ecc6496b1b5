//! PDF text extraction backed by `lopdf`.

use std::sync::Arc;

use async_trait::async_trait;
use lopdf::Document;

use crate::error::ExtractError;
use crate::pages::PageSource;

/// A parsed PDF held in memory.
pub struct PdfDocument {
    doc: Arc<Document>,
    page_count: u32,
}

impl PdfDocument {
    /// Parse a PDF from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExtractError> {
        let doc = Document::load_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;
        let page_count = doc.get_pages().len() as u32;
        tracing::debug!(pages = page_count, version = %doc.version, "loaded PDF");
        Ok(Self {
            doc: Arc::new(doc),
            page_count,
        })
    }
}

#[async_trait]
impl PageSource for PdfDocument {
    fn page_count(&self) -> u32 {
        self.page_count
    }

    async fn page_text(&self, page: u32) -> Result<String, ExtractError> {
        let doc = Arc::clone(&self.doc);
        let raw = tokio::task::spawn_blocking(move || doc.extract_text(&[page]))
            .await
            .map_err(|e| ExtractError::Task(e.to_string()))?
            .map_err(|e| ExtractError::Pdf(format!("page {page}: {e}")))?;
        Ok(join_lines(&raw))
    }
}

/// Collapse a page's text lines into one space-separated run.
fn join_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::extract_pages;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(612), Object::Integer(792)],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn join_lines_collapses_whitespace() {
        assert_eq!(join_lines("  Hello\n\nWorld  \n"), "Hello World");
        assert_eq!(join_lines(""), "");
    }

    #[test]
    fn corrupt_pdf_is_an_error() {
        let err = PdfDocument::from_bytes(b"%PDF-1.4 this is not really a pdf").err().unwrap();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }

    #[tokio::test]
    async fn pages_extract_in_order() {
        let bytes = build_pdf(&["Alpha page text", "Omega page text"]);
        let pdf = PdfDocument::from_bytes(&bytes).unwrap();
        assert_eq!(pdf.page_count(), 2);

        let text = extract_pages(&pdf).await.unwrap();
        let alpha = text.find("Alpha").expect("first page text");
        let omega = text.find("Omega").expect("second page text");
        assert!(alpha < omega);
        assert_eq!(text.matches('\n').count(), 2);
    }
}
