// File: crates/csvchart-server/src/telemetry.rs
// Summary: Tracing subscriber setup.

/// Install a compact `tracing` subscriber. `RUST_LOG` wins when set;
/// otherwise the level is `debug` with `verbose` and `info` without.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(verbose: bool) -> bool {
    let fallback = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
