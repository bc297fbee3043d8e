use crate::{ItemRange, PageMarker, Pagination, PagingConfig};

/// Pages through a collection that already lives in memory.
///
/// Owns the backing sequence and an internal [`Pagination`] keyed to its
/// length. The adapter only ever reads slices out of the sequence; mutation
/// goes through [`set_items`]/[`update_items`], which re-derive the total
/// and re-clamp the current page.
///
/// [`set_items`]: CollectionPager::set_items
/// [`update_items`]: CollectionPager::update_items
#[derive(Debug, Clone)]
pub struct CollectionPager<T> {
    items: Vec<T>,
    pagination: Pagination,
}

impl<T> CollectionPager<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        let pagination = Pagination::new(PagingConfig {
            initial_page: 1,
            initial_page_size: page_size,
            total_items: items.len(),
        });
        CollectionPager { items, pagination }
    }

    /// The slice of the backing sequence covered by the current page. Empty
    /// when the page start lies past the end of the sequence.
    pub fn page_items(&self) -> &[T] {
        let size = self.pagination.page_size();
        let start = (self.pagination.current_page() - 1) * size;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + size).min(self.items.len());
        &self.items[start..end]
    }

    /// The full backing sequence, read-only.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replaces the backing sequence and re-syncs the page arithmetic.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.sync_total();
    }

    /// Lets the caller mutate the backing sequence in place; the total and
    /// current page are re-synced afterwards.
    pub fn update_items(&mut self, mutate: impl FnOnce(&mut Vec<T>)) {
        mutate(&mut self.items);
        self.sync_total();
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn total_items(&self) -> usize {
        self.pagination.total_items()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    pub fn range(&self) -> ItemRange {
        self.pagination.range()
    }

    pub fn can_go_next(&self) -> bool {
        self.pagination.can_go_next()
    }

    pub fn can_go_prev(&self) -> bool {
        self.pagination.can_go_prev()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to_page(page);
    }

    pub fn next_page(&mut self) {
        self.pagination.next_page();
    }

    pub fn prev_page(&mut self) {
        self.pagination.prev_page();
    }

    pub fn first_page(&mut self) {
        self.pagination.first_page();
    }

    pub fn last_page(&mut self) {
        self.pagination.last_page();
    }

    pub fn change_page_size(&mut self, size: usize) {
        self.pagination.change_page_size(size);
    }

    pub fn reset(&mut self) {
        self.pagination.reset();
    }

    pub fn page_numbers(&self) -> Vec<PageMarker> {
        self.pagination.page_numbers()
    }

    fn sync_total(&mut self) {
        self.pagination.set_total_items(self.items.len());
    }
}
