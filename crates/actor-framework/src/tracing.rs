//! # Observability & Tracing
//!
//! Structured logging for every process built on the framework.
//!
//! The actor logs each request with an `entity_type` field plus the entity id, so the compact
//! format hides module paths (`with_target(false)`):
//!
//! ```text
//! INFO Actor started entity_type="Cat"
//! INFO Created entity_type="Cat" id=1 size=1
//! WARN Update failed entity_type="Cat" id=1 error=Validation failed: Color can't be blank
//! ```
//!
//! `RUST_LOG` always wins. Without it the caller's default directive is used, which lets a
//! binary map a `-v` flag onto `info` / `debug` / `trace`.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p cat-service
//! RUST_LOG=actor_framework=trace cargo run -p cat-service
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global compact subscriber.
///
/// `default_directive` is used only when `RUST_LOG` is unset or unparsable.
pub fn setup_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Maps a `-v` count onto a default filter directive.
pub fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_for_verbosity() {
        assert_eq!(directive_for_verbosity(0), "info");
        assert_eq!(directive_for_verbosity(1), "debug");
        assert_eq!(directive_for_verbosity(5), "trace");
    }
}
