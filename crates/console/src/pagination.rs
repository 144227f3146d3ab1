//! Skip/limit pagination state

/// Offset-based paging over a server-side result set.
///
/// `skip = page × page_size`; the total comes from the last applied response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    page_size: u64,
    total: u64,
}

impl Pagination {
    /// Start on the first page. A zero page size is bumped to 1.
    pub fn new(page_size: u64) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    /// Zero-based page index
    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Total matching records reported by the server
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of leading records to omit
    pub fn skip(&self) -> u64 {
        self.page * self.page_size
    }

    /// Number of pages, never less than one
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// "previous" is enabled iff we are past the first page
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// "next" is enabled iff records remain after this page
    pub fn has_next(&self) -> bool {
        self.skip() + self.page_size < self.total
    }

    /// Step back one page; returns whether the page changed
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one page; returns whether the page changed
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Back to the first page
    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Record the total from a fresh response
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    /// Label shown between the paging buttons, e.g. `Page 2 of 7`
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages())
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let mut p = Pagination::new(50);
        p.set_total(120);
        assert_eq!(p.skip(), 0);
        assert!(!p.has_previous());
        assert!(p.has_next());
        assert_eq!(p.label(), "Page 1 of 3");
    }

    #[test]
    fn test_last_page_disables_next() {
        let mut p = Pagination::new(50);
        p.set_total(100);
        assert!(p.next());
        assert_eq!(p.skip(), 50);
        // 50 + 50 >= 100
        assert!(!p.has_next());
        assert!(!p.next());
        assert_eq!(p.page(), 1);
        assert_eq!(p.label(), "Page 2 of 2");
    }

    #[test]
    fn test_empty_result_set() {
        let p = Pagination::new(50);
        assert!(!p.has_previous());
        assert!(!p.has_next());
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.label(), "Page 1 of 1");
    }

    #[test]
    fn test_previous_and_reset() {
        let mut p = Pagination::new(10);
        p.set_total(45);
        p.next();
        p.next();
        assert_eq!(p.skip(), 20);
        assert!(p.previous());
        assert_eq!(p.page(), 1);
        p.reset();
        assert_eq!(p.page(), 0);
        assert!(!p.previous());
    }

    #[test]
    fn test_next_disabled_iff_skip_plus_size_reaches_total() {
        for total in 0..30u64 {
            for page in 0..4u64 {
                let mut p = Pagination::new(7);
                p.set_total(total);
                for _ in 0..page {
                    p.page += 1;
                }
                assert_eq!(!p.has_next(), p.skip() + 7 >= total);
                assert_eq!(!p.has_previous(), page == 0);
            }
        }
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let p = Pagination::new(0);
        assert_eq!(p.page_size(), 1);
    }
}
