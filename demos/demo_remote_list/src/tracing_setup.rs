use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Console logging for the demos: no file/target noise, a short wall-clock
/// timestamp, and the verbosity each demo asks for.
pub fn tracing_init(max_level: Level) {
    let subscriber = tracing_subscriber::fmt()
        .with_file(false)
        .with_line_number(false)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_target(false)
        .with_max_level(max_level)
        .with_timer(WallClock)
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct WallClock;

impl FormatTime for WallClock {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}
