use std::sync::Once;

use tracing_forest::{ForestLayer, Printer};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

static INIT: Once = Once::new();

/// Installs the global subscriber. Logs go to stderr so verdicts on stdout stay clean.
///
/// `RUST_LOG` sets the filter (default `warn`). `RUST_LOGGER` picks the output
/// format: `flat` (default) or `forest`.
pub fn setup_logger() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        let logger_type = std::env::var("RUST_LOGGER").unwrap_or_else(|_| "flat".to_string());
        match logger_type.as_str() {
            "forest" => {
                let printer = Printer::new().writer(std::io::stderr);
                Registry::default().with(env_filter).with(ForestLayer::from(printer)).init();
            }
            other => {
                tracing_subscriber::fmt::Subscriber::builder()
                    .compact()
                    .with_file(false)
                    .with_target(false)
                    .with_thread_names(false)
                    .with_env_filter(env_filter)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr)
                    .finish()
                    .init();
                if other != "flat" {
                    tracing::warn!(logger = other, "unknown RUST_LOGGER value, using flat");
                }
            }
        }
    });
}
