pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// A 1-based page request, clamped to sane bounds on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            page_size: request.page_size,
        }
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) * u64::from(self.page_size) < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_first_page_of_ten() {
        let request = PageRequest::default();
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn should_clamp_page_zero_to_first_page() {
        assert_eq!(PageRequest::new(Some(0), None).page, 1);
    }

    #[test]
    fn should_cap_page_size() {
        assert_eq!(PageRequest::new(None, Some(5000)).page_size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(None, Some(0)).page_size, 1);
    }

    #[test]
    fn should_compute_offset_from_page() {
        let request = PageRequest::new(Some(3), Some(20));
        assert_eq!(request.offset(), 40);
        assert_eq!(request.limit(), 20);
    }

    #[test]
    fn should_report_next_and_previous_pages() {
        let page = Page::new(vec![1, 2], 12, PageRequest::new(Some(1), Some(10)));
        assert!(page.has_next());
        assert!(!page.has_previous());

        let last = Page::new(vec![1, 2], 12, PageRequest::new(Some(2), Some(10)));
        assert!(!last.has_next());
        assert!(last.has_previous());
    }
}
