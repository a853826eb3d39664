use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "budget_base=info";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// A valid `RUST_LOG` replaces the default `budget_base=info` filter
/// entirely. Safe to call more than once, and a subscriber installed by the
/// host wins.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = env_filter(directives.as_deref());
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
