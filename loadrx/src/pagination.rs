use std::fmt;

/// How many page buttons a window shows before ellipsis markers appear.
const PAGE_WINDOW: usize = 5;

/// Initial page/size/total for a pagination controller.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PagingConfig {
    pub initial_page: usize,
    pub initial_page_size: usize,
    pub total_items: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        PagingConfig {
            initial_page: 1,
            initial_page_size: 20,
            total_items: 0,
        }
    }
}

/// One marker in a rendered page window: a concrete page number or an
/// ellipsis standing in for a skipped run of pages.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{n}"),
            PageMarker::Ellipsis => write!(f, "…"),
        }
    }
}

/// One-based inclusive item range covered by the current page.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ItemRange {
    pub start: usize,
    pub end: usize,
}

/// Pure page arithmetic over `{current_page, page_size, total_items}`.
///
/// Every operation is total: out-of-range pages are clamped, never
/// rejected, and `current_page` always stays within `1..=total_pages()`.
/// The controller has no idea where items live; adapters compose it with a
/// local collection or a remote fetch.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    total_items: usize,
    initial_page: usize,
    initial_page_size: usize,
}

impl Pagination {
    pub fn new(config: PagingConfig) -> Self {
        let page_size = config.initial_page_size.max(1);
        let initial_page = config.initial_page.max(1);
        let mut pagination = Pagination {
            current_page: initial_page,
            page_size,
            total_items: config.total_items,
            initial_page,
            initial_page_size: page_size,
        };
        pagination.clamp_page();
        pagination
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Never zero: an empty collection still has one (empty) page.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// One-based item positions shown on the current page. For an empty
    /// collection this degenerates to `start: 1, end: 0`.
    pub fn range(&self) -> ItemRange {
        ItemRange {
            start: (self.current_page - 1) * self.page_size + 1,
            end: (self.current_page * self.page_size).min(self.total_items),
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.can_go_prev() {
            self.current_page -= 1;
        }
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn last_page(&mut self) {
        self.current_page = self.total_pages();
    }

    /// Changing the page size always returns to the first page; the old
    /// page's item range is meaningless under the new size.
    pub fn change_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.current_page = 1;
    }

    /// Called whenever new data changes the collection size; re-clamps the
    /// current page so it never points past the new last page.
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        self.clamp_page();
    }

    /// Restores the initial page and size. The total is kept; it tracks the
    /// collection, not the controls.
    pub fn reset(&mut self) {
        self.page_size = self.initial_page_size;
        self.current_page = self.initial_page;
        self.clamp_page();
    }

    /// Computes the page window: first and last page always visible, the
    /// current page with one neighbor on each side, and at most two
    /// ellipsis markers.
    pub fn page_numbers(&self) -> Vec<PageMarker> {
        let total = self.total_pages();
        if total <= PAGE_WINDOW {
            return (1..=total).map(PageMarker::Page).collect();
        }

        let window_start = self.current_page.saturating_sub(1).max(2);
        let window_end = (self.current_page + 1).min(total - 1);

        let mut markers = Vec::with_capacity(PAGE_WINDOW + 2);
        markers.push(PageMarker::Page(1));
        if window_start > 2 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.extend((window_start..=window_end).map(PageMarker::Page));
        if window_end < total - 1 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(total));
        markers
    }

    fn clamp_page(&mut self) {
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::new(PagingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination(total_items: usize, page_size: usize) -> Pagination {
        Pagination::new(PagingConfig {
            initial_page: 1,
            initial_page_size: page_size,
            total_items,
        })
    }

    #[test]
    fn test_total_pages_never_zero() {
        assert_eq!(pagination(0, 10).total_pages(), 1);
        assert_eq!(pagination(1, 10).total_pages(), 1);
        assert_eq!(pagination(10, 10).total_pages(), 1);
        assert_eq!(pagination(11, 10).total_pages(), 2);
        assert_eq!(pagination(47, 10).total_pages(), 5);
    }

    #[test]
    fn test_range_scenario() {
        // 47 items, 10 per page, page 3 shows items 21..=30.
        let mut p = pagination(47, 10);
        p.go_to_page(3);
        assert_eq!(p.total_pages(), 5);
        assert_eq!(p.range(), ItemRange { start: 21, end: 30 });
    }

    #[test]
    fn test_range_bounds() {
        let mut p = pagination(47, 10);
        p.last_page();
        let range = p.range();
        assert_eq!(range, ItemRange { start: 41, end: 47 });
        assert!(range.start <= range.end);
        assert!(range.end <= p.total_items());

        let empty = pagination(0, 10);
        assert_eq!(empty.range(), ItemRange { start: 1, end: 0 });
        assert!(empty.range().end <= empty.total_items());
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut p = pagination(100, 10);
        p.go_to_page(0);
        assert_eq!(p.current_page(), 1);
        p.go_to_page(9999);
        assert_eq!(p.current_page(), 10);
        p.go_to_page(4);
        assert_eq!(p.current_page(), 4);
    }

    #[test]
    fn test_next_prev_noop_at_bounds() {
        let mut p = pagination(30, 10);
        assert!(!p.can_go_prev());
        p.prev_page();
        assert_eq!(p.current_page(), 1);

        p.last_page();
        assert!(!p.can_go_next());
        p.next_page();
        assert_eq!(p.current_page(), 3);

        p.first_page();
        p.next_page();
        assert_eq!(p.current_page(), 2);
        p.prev_page();
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_change_page_size_returns_to_first_page() {
        let mut p = pagination(100, 10);
        p.go_to_page(7);
        p.change_page_size(25);
        assert_eq!(p.page_size(), 25);
        assert_eq!(p.current_page(), 1);

        // Also from the first page, and with a degenerate size.
        p.change_page_size(0);
        assert_eq!(p.page_size(), 1);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_set_total_items_reclamps() {
        let mut p = pagination(100, 10);
        p.go_to_page(10);
        p.set_total_items(35);
        assert_eq!(p.total_pages(), 4);
        assert_eq!(p.current_page(), 4);

        p.set_total_items(0);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_reset_restores_initial_page_and_size() {
        let mut p = Pagination::new(PagingConfig {
            initial_page: 2,
            initial_page_size: 10,
            total_items: 100,
        });
        p.go_to_page(9);
        p.change_page_size(50);
        p.reset();
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.page_size(), 10);
        assert_eq!(p.total_items(), 100);
    }

    #[test]
    fn test_window_small_total_has_no_ellipsis() {
        // 3 pages fit inside the window entirely.
        let p = pagination(30, 10);
        assert_eq!(
            p.page_numbers(),
            vec![
                PageMarker::Page(1),
                PageMarker::Page(2),
                PageMarker::Page(3),
            ]
        );

        let p = pagination(50, 10);
        assert_eq!(p.page_numbers().len(), 5);
        assert!(!p.page_numbers().contains(&PageMarker::Ellipsis));
    }

    #[test]
    fn test_window_middle_page_has_two_ellipses() {
        // 10 pages, current 5 -> [1, …, 4, 5, 6, …, 10].
        let mut p = pagination(100, 10);
        p.go_to_page(5);
        assert_eq!(
            p.page_numbers(),
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis,
                PageMarker::Page(4),
                PageMarker::Page(5),
                PageMarker::Page(6),
                PageMarker::Ellipsis,
                PageMarker::Page(10),
            ]
        );
    }

    #[test]
    fn test_window_at_edges() {
        let mut p = pagination(100, 10);

        p.go_to_page(1);
        assert_eq!(
            p.page_numbers(),
            vec![
                PageMarker::Page(1),
                PageMarker::Page(2),
                PageMarker::Ellipsis,
                PageMarker::Page(10),
            ]
        );

        p.go_to_page(2);
        assert_eq!(
            p.page_numbers(),
            vec![
                PageMarker::Page(1),
                PageMarker::Page(2),
                PageMarker::Page(3),
                PageMarker::Ellipsis,
                PageMarker::Page(10),
            ]
        );

        p.go_to_page(9);
        assert_eq!(
            p.page_numbers(),
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis,
                PageMarker::Page(8),
                PageMarker::Page(9),
                PageMarker::Page(10),
            ]
        );

        p.go_to_page(10);
        assert_eq!(
            p.page_numbers(),
            vec![
                PageMarker::Page(1),
                PageMarker::Ellipsis,
                PageMarker::Page(9),
                PageMarker::Page(10),
            ]
        );
    }

    #[test]
    fn test_marker_display() {
        assert_eq!(PageMarker::Page(7).to_string(), "7");
        assert_eq!(PageMarker::Ellipsis.to_string(), "…");
    }
}
