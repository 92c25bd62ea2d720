//! Page-by-page navigation over list views

/// Tracks the visible page of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    #[allow(dead_code)]
    pub fn page(&self) -> usize {
        self.page
    }

    #[allow(dead_code)]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages, at least one even for an empty list
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }

    pub fn rows_on_page(&self, len: usize) -> usize {
        len.saturating_sub(self.offset()).min(self.page_size)
    }

    /// Items on the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn next(&mut self, len: usize) {
        if self.page + 1 < self.page_count(len) {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Pull the page back inside the list after it shrank
    pub fn clamp(&mut self, len: usize) {
        self.page = self.page.min(self.page_count(len) - 1);
    }

    /// "page/total" label for list titles
    pub fn label(&self, len: usize) -> String {
        format!("{}/{}", self.page + 1, self.page_count(len))
    }
}
