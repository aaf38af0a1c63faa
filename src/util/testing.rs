//! Shared test setup: a once-only tracing subscriber for unit and integration tests.

use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

static TEST_SETUP: Once = Once::new();

/// Default filter when `RUST_LOG` is unset: everything from this crate.
const DEFAULT_FILTER: &str = "orgtree=trace";

/// Installs the test subscriber once per process; later calls are no-ops.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!(filter = DEFAULT_FILTER, "orgtree test logging ready");
    });
}

fn setup_test_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // another test binary helper may have installed one already
    if tracing::dispatcher::has_been_set() {
        debug!("keeping existing global subscriber");
    } else if let Err(e) = subscriber.try_init() {
        eprintln!("orgtree tests: logging unavailable: {e}");
    }
}
