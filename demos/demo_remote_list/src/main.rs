use crate::tracing_setup::tracing_init;
use futures::StreamExt;
use loadrx::{
    classify_error, FetchError, Notify, PageQuery, PageResponse, PagingConfig, RemotePager,
    RequestState,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn, Level};

mod tracing_setup;

/// Toast surface backed by the log.
struct LogNotify;

impl Notify for LogNotify {
    fn success(&self, message: &str) {
        info!("toast/success | {message}");
    }
    fn error(&self, message: &str) {
        warn!("toast/error   | {message}");
    }
    fn info(&self, message: &str) {
        info!("toast/info    | {message}");
    }
}

fn describe(state: &RequestState<PageResponse<String>>) -> String {
    match state {
        RequestState::Idle(_) => "idle".to_string(),
        RequestState::Loading(_) => "loading...".to_string(),
        RequestState::Success(response) => format!("success ({} items)", response.items.len()),
        RequestState::Failed { message, .. } => format!("failed: {message}"),
    }
}

#[tokio::main]
async fn main() {
    tracing_init(Level::DEBUG);

    info!("==========================================");
    warn!("demo: server-driven pagination");

    let dataset: Arc<Vec<String>> = Arc::new((1..=47).map(|n| format!("row-{n:02}")).collect());
    let flaky = Arc::new(AtomicBool::new(false));

    let source = dataset.clone();
    let flaky_flag = flaky.clone();
    let pager = RemotePager::new(
        move |query: PageQuery| {
            let source = source.clone();
            let flaky_flag = flaky_flag.clone();
            async move {
                sleep(Duration::from_millis(80)).await;
                if flaky_flag.swap(false, Ordering::SeqCst) {
                    return Err(FetchError::Network);
                }
                let start = (query.page - 1) * query.limit;
                let end = (start + query.limit).min(source.len());
                let items = source.get(start..end).map(<[String]>::to_vec).unwrap_or_default();
                Ok(PageResponse::new(items, source.len()))
            }
        },
        PagingConfig {
            initial_page: 1,
            initial_page_size: 10,
            total_items: 0,
        },
    )
    .with_classifier(classify_error)
    .with_notifier(Arc::new(LogNotify))
    .show_success_toast(true)
    .success_message("Page loaded");

    let mut transitions = pager.to_stream();
    tokio::spawn(async move {
        while let Some(state) = transitions.next().await {
            debug!("request state | {}", describe(&state));
        }
    });

    info!("loading the first page");
    let _ = pager.refetch().await;
    info!(
        "page {}/{} | {:?}",
        pager.current_page(),
        pager.total_pages(),
        pager.items()
    );

    info!("navigating forward");
    let _ = pager.next_page().await;
    info!(
        "page {}/{} | {:?}",
        pager.current_page(),
        pager.total_pages(),
        pager.items()
    );

    info!("next fetch will hit a network failure");
    flaky.store(true, Ordering::SeqCst);
    if let Err(error) = pager.next_page().await {
        warn!("navigation failed ({error}); stale items remain: {:?}", pager.items());
    }

    info!("retrying the same page");
    let _ = pager.refetch().await;
    info!(
        "page {}/{} | {:?}",
        pager.current_page(),
        pager.total_pages(),
        pager.items()
    );

    sleep(Duration::from_millis(50)).await;
}
