use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Initialize logging for the textpatch binaries
///
/// Logs go to stderr without ANSI colors so stdout only ever carries the
/// status line. `RUST_LOG` is honored unless `verbose` is set, in which
/// case the crate logs at debug level. Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("textpatch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = fmt::Subscriber::builder()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
