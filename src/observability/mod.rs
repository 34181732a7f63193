//! Tracing initialization.
//!
//! Sets up the `tracing` subscriber for the whole process. Observability is
//! optional: if initialization fails or no level is configured, the app runs
//! without it and every `tracing::debug!` call site becomes a no-op.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with stderr output.
///
/// The filter directive comes from, in order of precedence:
/// 1. The `RUST_LOG` environment variable
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// Idempotent: safe to call multiple times, only the first call takes
/// effect. Output goes to stderr so it never mixes with listing output on
/// stdout.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    let _ = subscriber.try_init();
}
