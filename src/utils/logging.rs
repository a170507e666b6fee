use tracing_subscriber::EnvFilter;

/// Filter variable, e.g. `DLVERIFY_LOG=dlverify=trace`.
pub const LOG_ENV: &str = "DLVERIFY_LOG";

/// Diagnostics go to stderr so report output on stdout stays clean.
/// `--verbose` raises the default from `warn` to `debug`.
pub fn init(verbose: bool) {
    let default = if verbose { "dlverify=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
