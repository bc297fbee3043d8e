use crate::{Notify, PageMarker, Pagination, PagingConfig, RequestExecutor, RequestState};
use futures_signals::signal::{Mutable, MutableSignalCloned, SignalStream};
use std::future::Future;
use std::sync::Arc;

/// Arguments handed to a remote page fetch.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageQuery {
    pub page: usize,
    pub limit: usize,
}

/// Nested pagination block some APIs return instead of a top-level total.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMeta {
    pub total: usize,
}

/// One page of a remote collection.
///
/// Accommodates both payload shapes seen in the wild: a top-level `total`
/// or a nested `pagination.total`.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub total: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pagination: Option<PageMeta>,
}

impl<T> PageResponse<T> {
    pub fn new(items: Vec<T>, total: usize) -> Self {
        PageResponse {
            items,
            total: Some(total),
            pagination: None,
        }
    }

    /// The collection size this payload reports. The top-level `total`
    /// takes precedence; `pagination.total` is only a fallback.
    pub fn reported_total(&self) -> Option<usize> {
        self.total.or_else(|| self.pagination.map(|meta| meta.total))
    }
}

/// Page/size/total bookkeeping for a remote collection.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PageCursor {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl PageCursor {
    pub fn new(config: PagingConfig) -> Self {
        PageCursor {
            page: config.initial_page.max(1),
            page_size: config.initial_page_size.max(1),
            total_items: config.total_items,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }
}

/// A navigation request against a [`PageCursor`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PageAction {
    Next,
    Prev,
    GoTo(usize),
    Refetch,
}

/// Effect descriptor: the fetch a transition wants issued.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FetchSpec {
    pub page: usize,
    pub limit: usize,
}

/// Applies a navigation action to a cursor, returning the new cursor and
/// the fetch to issue.
///
/// Pages are clamped, never rejected, and every action emits a fetch:
/// navigation and fetching are deliberately coupled, so navigating against
/// a boundary degenerates to a refetch of the current page.
pub fn transition(cursor: PageCursor, action: PageAction) -> (PageCursor, FetchSpec) {
    let mut next = cursor;
    match action {
        PageAction::Next => next.page = (cursor.page + 1).min(cursor.total_pages()),
        PageAction::Prev => next.page = cursor.page.saturating_sub(1).max(1),
        PageAction::GoTo(page) => next.page = page.clamp(1, cursor.total_pages()),
        PageAction::Refetch => {}
    }
    let fetch = FetchSpec {
        page: next.page,
        limit: next.page_size,
    };
    (next, fetch)
}

/// Drives a remote, page-at-a-time collection.
///
/// Composes a [`RequestExecutor`] around the injected fetch with a
/// [`PageCursor`]; every navigation re-issues a fetch for the new page, and
/// each successful payload folds its reported total back into the cursor.
pub struct RemotePager<T: Clone, E> {
    executor: RequestExecutor<PageQuery, PageResponse<T>, E>,
    cursor: Mutable<PageCursor>,
}

impl<T, E> RemotePager<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ToString,
{
    pub fn new<F, Fut>(fetch: F, config: PagingConfig) -> Self
    where
        F: Fn(PageQuery) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<PageResponse<T>, E>> + Send + 'static,
    {
        RemotePager {
            executor: RequestExecutor::new(fetch),
            cursor: Mutable::new(PageCursor::new(config)),
        }
    }
}

impl<T, E> RemotePager<T, E>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn with_classifier<C>(mut self, classifier: C) -> Self
    where
        C: Fn(&E) -> String + Send + Sync + 'static,
    {
        self.executor = self.executor.with_classifier(classifier);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notify>) -> Self {
        self.executor = self.executor.with_notifier(notifier);
        self
    }

    pub fn show_success_toast(mut self, show: bool) -> Self {
        self.executor = self.executor.show_success_toast(show);
        self
    }

    pub fn show_error_toast(mut self, show: bool) -> Self {
        self.executor = self.executor.show_error_toast(show);
        self
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.executor = self.executor.success_message(message);
        self
    }

    pub async fn next_page(&self) -> Result<PageResponse<T>, E> {
        self.dispatch(PageAction::Next).await
    }

    pub async fn prev_page(&self) -> Result<PageResponse<T>, E> {
        self.dispatch(PageAction::Prev).await
    }

    pub async fn go_to_page(&self, page: usize) -> Result<PageResponse<T>, E> {
        self.dispatch(PageAction::GoTo(page)).await
    }

    /// Re-issues the fetch for the current page without moving it.
    pub async fn refetch(&self) -> Result<PageResponse<T>, E> {
        self.dispatch(PageAction::Refetch).await
    }

    async fn dispatch(&self, action: PageAction) -> Result<PageResponse<T>, E> {
        let (next, fetch) = transition(self.cursor.get(), action);
        self.cursor.set(next);

        let result = self
            .executor
            .execute(PageQuery {
                page: fetch.page,
                limit: fetch.limit,
            })
            .await;

        if let Ok(response) = &result {
            if let Some(total) = response.reported_total() {
                let mut cursor = self.cursor.get();
                cursor.total_items = total;
                cursor.page = cursor.page.clamp(1, cursor.total_pages());
                self.cursor.set(cursor);
            }
        }
        result
    }

    /// Items from the last successful payload; empty before the first one.
    pub fn items(&self) -> Vec<T> {
        self.executor
            .data()
            .map(|response| response.items)
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.executor.is_loading()
    }

    pub fn error_message(&self) -> Option<String> {
        self.executor.error_message()
    }

    pub fn state(&self) -> RequestState<PageResponse<T>> {
        self.executor.state()
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor.get()
    }

    pub fn current_page(&self) -> usize {
        self.cursor.get().page
    }

    pub fn page_size(&self) -> usize {
        self.cursor.get().page_size
    }

    pub fn total_items(&self) -> usize {
        self.cursor.get().total_items
    }

    pub fn total_pages(&self) -> usize {
        self.cursor.get().total_pages()
    }

    pub fn can_go_next(&self) -> bool {
        self.cursor.get().can_go_next()
    }

    pub fn can_go_prev(&self) -> bool {
        self.cursor.get().can_go_prev()
    }

    pub fn page_numbers(&self) -> Vec<PageMarker> {
        let cursor = self.cursor.get();
        let mut view = Pagination::new(PagingConfig {
            initial_page: 1,
            initial_page_size: cursor.page_size,
            total_items: cursor.total_items,
        });
        view.go_to_page(cursor.page);
        view.page_numbers()
    }

    pub fn to_signal(&self) -> MutableSignalCloned<RequestState<PageResponse<T>>> {
        self.executor.to_signal()
    }

    pub fn to_stream(&self) -> SignalStream<MutableSignalCloned<RequestState<PageResponse<T>>>> {
        self.executor.to_stream()
    }
}
