//! Server pagination window

/// Page size used when nothing else is configured
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Offset sent as `skip` for a 1-based page number
pub fn offset_for(page: u32, page_size: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// 1-based page cursor over a server-paginated collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: u32,
    page_size: u32,
    total_pages: u32,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageWindow {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_pages: 1,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Move forward one page; `None` when already on the last page
    pub fn advance(&mut self) -> Option<u32> {
        if !self.has_next() {
            return None;
        }
        self.page += 1;
        Some(self.page)
    }

    /// Move back one page; `None` when already on the first page
    pub fn retreat(&mut self) -> Option<u32> {
        if !self.has_previous() {
            return None;
        }
        self.page -= 1;
        Some(self.page)
    }

    /// Record the server-reported page count (never below 1)
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages.max(1);
    }
}
