//! Tracing setup for the CLI and tests.
//!
//! The library only emits `tracing` events; embedding applications choose
//! how to render them. What the engine logs, by level:
//!
//! - `error`: a benchmark run that exceeded its time budget, and failed
//!   benchmark calls (via [`log_error!`]).
//! - `warn`: configuration that makes the engine inert (no engines, an
//!   empty rule table), benchmark samples cut off by the backtrack limit,
//!   and a run past half its budget.
//! - `info`: one summary per batch scan.
//! - `debug`: per-pattern decisions: the rule that fired, each dialect
//!   rejection or compile failure, rewrite counts and the analysis summary.
//!
//! Every public engine operation also opens an `info` span through
//! [`span_trace!`]; closed spans are reported with their timings.

use std::sync::Once;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Install a human-readable subscriber writing to stderr.
///
/// Only the first call to this or [`init_tracing_json`] has an effect.
pub fn init_tracing() {
    install(false);
}

/// Install a JSON subscriber writing to stderr, one object per event.
pub fn init_tracing_json() {
    install(true);
}

fn install(json: bool) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let registry = tracing_subscriber::registry().with(env_filter);
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true);

        // An embedding application may already own the global subscriber.
        let installed = if json {
            registry
                .with(layer.json().with_current_span(true))
                .try_init()
        } else {
            registry
                .with(layer.with_file(true).with_line_number(true))
                .try_init()
        };
        if installed.is_ok() {
            info!(json, "redos-guard tracing initialized");
        }
    });
}

/// Macro for creating spans around engine operations
#[macro_export]
macro_rules! span_trace {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Macro for logging and returning errors
#[macro_export]
macro_rules! log_error {
    ($err:expr) => {{
        let e = $err;
        tracing::error!(error = %e, "Operation failed");
        e
    }};
    ($err:expr, $msg:expr) => {{
        let e = $err;
        tracing::error!(error = %e, context = $msg, "Operation failed");
        e
    }};
}
