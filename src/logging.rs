//! Tracing subscriber setup for recorder diagnostics

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a fmt subscriber on stderr.
///
/// `RUST_LOG` takes precedence when set; otherwise the default level is
/// `debug` when debug mode is enabled and `info` otherwise. Call at most
/// once per process.
///
/// ```no_run
/// let config = framecap::RecorderConfig::default();
/// framecap::logging::init(config.debug_mode);
/// ```
pub fn init(debug_mode: bool) {
    let default_filter = if debug_mode {
        "framecap=debug"
    } else {
        "framecap=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr) // Keep stdout clean for test runners
                .with_target(false),
        )
        .init();
}
