/// Page-index navigation state for a single loaded document.
///
/// Pages are 1-based. Before the document load completes the navigator
/// defaults to a one-page document, so every forward intent is a no-op and
/// the viewer stays on page 1. `on_document_loaded` overwrites the page
/// count; it never touches `current_page`, which means a later, smaller
/// count can leave `current_page` beyond the end — callers must check
/// `is_current_page_renderable` before requesting a page render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNavigator {
    current_page: usize,
    total_pages: usize,
}

impl Default for PageNavigator {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PageNavigator {
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Records the page count reported by the document load. Later calls
    /// simply overwrite the value; there is no merge logic.
    pub fn on_document_loaded(&mut self, total_pages: usize) {
        self.total_pages = total_pages.max(1);
    }

    /// Jumps to page 1. Returns whether the current page changed.
    pub fn first(&mut self) -> bool {
        let changed = self.current_page != 1;
        self.current_page = 1;
        changed
    }

    /// Jumps to the last page. Returns whether the current page changed.
    pub fn last(&mut self) -> bool {
        let changed = self.current_page != self.total_pages;
        self.current_page = self.total_pages;
        changed
    }

    /// Advances one page, or does nothing at the end of the document.
    pub fn next(&mut self) -> bool {
        if self.current_page + 1 > self.total_pages {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Goes back one page, or does nothing on page 1.
    pub fn previous(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    pub fn is_at_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_at_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    pub fn is_current_page_renderable(&self) -> bool {
        (1..=self.total_pages).contains(&self.current_page)
    }
}
