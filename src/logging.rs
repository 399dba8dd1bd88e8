// SPDX-License-Identifier: MPL-2.0
//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Levels used across the crate:
//!
//! - `error`: the flipbook cannot start, or a listener was attached twice
//! - `warn`: a page image failed to load, the preload timed out
//! - `info`: lifecycle transitions and preload summaries
//! - `debug`: ignored input, stale timers, unavailable fullscreen methods

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `--verbose` nor `RUST_LOG` say otherwise.
#[must_use]
pub fn level_for(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides `verbose`.
///
/// A second call is ignored.
pub fn init(verbose: bool) {
    let filter = build_env_filter(level_for(verbose));
    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // Fails only if a global subscriber already exists.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Our crate at the requested level, dependencies stay quiet.
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,iced_flipbook={level}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_switches_to_debug() {
        assert_eq!(level_for(false), Level::INFO);
        assert_eq!(level_for(true), Level::DEBUG);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
