//! Content-type dispatch.

use std::fmt;
use std::path::Path;

use crate::error::ExtractError;

/// The document formats selfquiz can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

impl DocumentKind {
    /// The MIME type this kind is declared as.
    pub const fn content_type(self) -> &'static str {
        match self {
            DocumentKind::PlainText => "text/plain",
            DocumentKind::Pdf => "application/pdf",
        }
    }

    /// Dispatch on a declared content type. Parameters such as
    /// `; charset=utf-8` and letter case are ignored.
    pub fn from_content_type(content_type: &str) -> Result<Self, ExtractError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "text/plain" => Ok(DocumentKind::PlainText),
            "application/pdf" => Ok(DocumentKind::Pdf),
            _ => Err(ExtractError::UnsupportedType(content_type.trim().to_string())),
        }
    }

    /// Infer the declared content type from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("txt" | "text" | "md") => Ok(DocumentKind::PlainText),
            Some("pdf") => Ok(DocumentKind::Pdf),
            _ => Err(ExtractError::UnsupportedType(path.display().to_string())),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_dispatch() {
        assert_eq!(
            DocumentKind::from_content_type("text/plain").unwrap(),
            DocumentKind::PlainText
        );
        assert_eq!(
            DocumentKind::from_content_type("Text/Plain; charset=utf-8").unwrap(),
            DocumentKind::PlainText
        );
        assert_eq!(
            DocumentKind::from_content_type("application/pdf").unwrap(),
            DocumentKind::Pdf
        );
        let err = DocumentKind::from_content_type("image/png").unwrap_err();
        assert!(err.is_unsupported());
        assert_eq!(err.to_string(), "Unsupported file type: image/png");
    }

    #[test]
    fn extension_dispatch() {
        assert_eq!(
            DocumentKind::from_path(Path::new("notes.TXT")).unwrap(),
            DocumentKind::PlainText
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("dir/paper.pdf")).unwrap(),
            DocumentKind::Pdf
        );
        assert!(DocumentKind::from_path(Path::new("slides.pptx")).is_err());
        assert!(DocumentKind::from_path(Path::new("README")).is_err());
    }

    #[test]
    fn display_is_content_type() {
        assert_eq!(DocumentKind::Pdf.to_string(), "application/pdf");
    }
}
