//! Diagnostic logging for the `parlor` binary.
//!
//! Simulation results go to stdout; tracing events go to stderr so the two
//! never interleave in redirected output.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging for the application.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_refused_quietly() {
        let _ = init_logging();
        assert!(!init_logging());
        tracing::info!("still safe to log");
    }
}
