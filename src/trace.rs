use tracing::metadata::LevelFilter;

/// Initializes console logging on stderr.
pub fn init_tracing(verbosity: u8) {
    tracing_subscriber::fmt()
        .without_time()
        .with_writer(std::io::stderr)
        .with_max_level(level_filter(verbosity))
        .init();
}

/// Returns the log level filter for the given verbosity level.
fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
