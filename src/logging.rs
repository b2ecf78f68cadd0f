// Diagnostic tracing
//
// Reads RUST_LOG, defaulting to `warn`, and writes compact lines to stderr so
// command output on stdout stays clean.
//
//     RUST_LOG=typ_tmpl=debug typ-tmpl list

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
