//! Subscriber setup for the inspector

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` or a truthy `DEBUG`
/// selects `debug`, and the configured level applies last.
pub fn init(verbose: bool, configured_level: &str) {
    let debug_env = std::env::var("DEBUG").ok();
    let fallback = fallback_directive(verbose, debug_env.as_deref(), configured_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn fallback_directive<'a>(verbose: bool, debug_env: Option<&str>, configured: &'a str) -> &'a str {
    if verbose || debug_env.is_some_and(is_truthy) {
        "debug"
    } else {
        configured
    }
}

/// Boolean environment switch: `1`, `true`, `t`, `yes`, `y` or `on`
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "t" | "yes" | "y" | "on"
    )
}
