//! Logging setup for the CLI.
//!
//! Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
//! overrides the verbosity flag.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map `-v` repetitions to a level. Quiet by default.
fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,liahona={level},lh_cli={level},lh_core={level},lh_engine={level}"
        ))
    })
}

/// Install the global subscriber.
pub fn init(verbosity: u8) {
    let layer = fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr);

    // A second init (tests, embedding) is harmless.
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(level_for(verbosity)))
        .with(layer)
        .try_init();
}
