use crate::tracing_setup::tracing_init;
use loadrx::{CollectionPager, PageMarker};
use tracing::{info, warn, Level};

mod tracing_setup;

fn render_window(markers: &[PageMarker]) -> String {
    markers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    tracing_init(Level::INFO);

    info!("==========================================");
    warn!("demo: paging an in-memory collection");

    let rows: Vec<String> = (1..=47).map(|n| format!("row-{n:02}")).collect();
    let mut pager = CollectionPager::new(rows, 10);

    info!(
        "{} items across {} pages",
        pager.total_items(),
        pager.total_pages()
    );

    loop {
        let range = pager.range();
        info!(
            "page {:>2} | items {:>2}..={:<2} | window [{}] | {:?}",
            pager.current_page(),
            range.start,
            range.end,
            render_window(&pager.page_numbers()),
            pager.page_items()
        );
        if !pager.can_go_next() {
            break;
        }
        pager.next_page();
    }

    info!("==========================================");
    warn!("demo: shrinking the collection re-clamps the page");

    pager.last_page();
    pager.update_items(|items| items.truncate(12));
    info!(
        "after truncate: page {} of {}, showing {:?}",
        pager.current_page(),
        pager.total_pages(),
        pager.page_items()
    );

    info!("==========================================");
    warn!("demo: a page-size change returns to the first page");

    pager.change_page_size(5);
    info!(
        "page {} | window [{}] | {:?}",
        pager.current_page(),
        render_window(&pager.page_numbers()),
        pager.page_items()
    );
}
