use crate::client::{ApiClient, ClientResult};
use crate::models::reports::Report;
use std::collections::HashSet;

pub const FEED_PAGE_SIZE: i64 = 10;

/// Newest-first, append-only list of complaints loaded one page at a time.
#[derive(Debug)]
pub struct Feed {
    offset: i64,
    page_size: i64,
    complaints: Vec<Report>,
    seen: HashSet<i64>,
    has_more: bool,
}

impl Default for Feed {
    fn default() -> Self {
        Self::new(FEED_PAGE_SIZE)
    }
}

impl Feed {
    pub fn new(page_size: i64) -> Self {
        Self {
            offset: 0,
            page_size,
            complaints: Vec::new(),
            seen: HashSet::new(),
            has_more: true,
        }
    }

    pub fn complaints(&self) -> &[Report] {
        &self.complaints
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Called whenever the end of the list scrolls into view. Fetches the
    /// page at the current offset and returns how many new complaints were
    /// appended. Once a page comes back empty the feed stops fetching.
    pub async fn load_more(&mut self, client: &ApiClient) -> ClientResult<usize> {
        if !self.has_more {
            return Ok(0);
        }
        let page = client.fetch_complaints(self.offset, self.page_size).await?;
        Ok(self.absorb(page))
    }

    fn absorb(&mut self, page: Vec<Report>) -> usize {
        if page.is_empty() {
            self.has_more = false;
            return 0;
        }
        self.offset += self.page_size;
        let before = self.complaints.len();
        for report in page {
            if self.seen.insert(report.id) {
                self.complaints.push(report);
            }
        }
        self.complaints.len() - before
    }
}
