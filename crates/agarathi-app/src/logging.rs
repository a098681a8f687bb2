use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr; stdout is for results.
///
/// `RUST_LOG` overrides the default `warn` level. Output is human-readable
/// on a terminal and JSON lines otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if atty::is(atty::Stream::Stderr) {
        builder.init();
    } else {
        builder.json().init();
    }
}
