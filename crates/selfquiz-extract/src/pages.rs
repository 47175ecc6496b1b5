//! Page-ordered text extraction.
//!
//! Pages are fetched one at a time and appended in page order, so the output
//! never depends on how long an individual page takes.

use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};

use crate::error::ExtractError;

/// A document whose text can be fetched page by page.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Number of pages. Pages are numbered from 1.
    fn page_count(&self) -> u32;

    /// Text of a single page.
    async fn page_text(&self, page: u32) -> Result<String, ExtractError>;
}

/// Concatenate every page's text in page order, each followed by a newline.
pub async fn extract_pages<S>(source: &S) -> Result<String, ExtractError>
where
    S: PageSource + ?Sized,
{
    let count = source.page_count();
    tracing::debug!(pages = count, "extracting pages");

    stream::iter(1..=count)
        .then(|page| {
            tracing::trace!(page, "extracting page");
            source.page_text(page)
        })
        .try_fold(String::new(), |mut text, page_text| async move {
            text.push_str(&page_text);
            text.push('\n');
            Ok(text)
        })
        .await
}
