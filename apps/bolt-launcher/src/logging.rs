use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

const DEFAULT_FILTER: &str = "info";

/// Chooses the filter directive: command line, then `BOLT_LOG`, then `RUST_LOG`.
pub fn filter_directive(cli: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> String {
    cli.map(str::to_owned)
        .or_else(|| lookup("BOLT_LOG"))
        .or_else(|| lookup("RUST_LOG"))
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

/// Installs the stderr subscriber. A second call, or a subscriber installed
/// by an embedding host, leaves the existing one in place.
pub fn init(cli: Option<&str>) {
    let directive = filter_directive(cli, |key| std::env::var(key).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|error| {
        eprintln!("Bolt: ignoring log filter `{directive}`: {error}");
        EnvFilter::new(DEFAULT_FILTER)
    });

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
