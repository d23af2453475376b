//! Tracing subscriber setup for the `payroll` binary.
//!
//! Log output goes to stderr so it never interleaves with the terminal UI
//! on stdout.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ShellConfig;

/// Picks the filter directive: `RUST_LOG` when set, else the configured one.
pub fn filter_directive(config: &ShellConfig) -> String {
    std::env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| config.log_filter().to_string())
}

/// Installs the global fmt subscriber.
///
/// # Errors
///
/// Fails if the filter directive is invalid or a subscriber is already set.
pub fn init_tracing(config: &ShellConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_new(filter_directive(config))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}
