//! In-memory page source for testing extraction without real PDFs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::ExtractError;
use crate::pages::PageSource;

/// Serves fixed page texts, recording which pages were requested and how
/// many requests were in flight at once.
pub struct StaticPages {
    pages: Vec<String>,
    descending_delays: bool,
    fail_at: Option<u32>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    requested: Mutex<Vec<u32>>,
}

impl StaticPages {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            descending_delays: false,
            fail_at: None,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Make earlier pages slower than later ones.
    pub fn with_descending_delays(mut self) -> Self {
        self.descending_delays = true;
        self
    }

    /// Fail when `page` is requested.
    pub fn failing_at(mut self, page: u32) -> Self {
        self.fail_at = Some(page);
        self
    }

    /// Pages requested so far, in request order.
    pub fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }

    /// Highest number of concurrent `page_text` calls observed.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for StaticPages {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    async fn page_text(&self, page: u32) -> Result<String, ExtractError> {
        self.requested.lock().unwrap().push(page);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if self.descending_delays {
            let remaining = self.page_count().saturating_sub(page) as u64;
            tokio::time::sleep(Duration::from_millis(5 * remaining)).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_at == Some(page) {
            return Err(ExtractError::Pdf(format!("page {page} is unreadable")));
        }
        self.pages
            .get(page.saturating_sub(1) as usize)
            .cloned()
            .ok_or_else(|| ExtractError::Pdf(format!("no page {page}")))
    }
}
