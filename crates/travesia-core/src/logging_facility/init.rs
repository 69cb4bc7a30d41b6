//! Subscriber initialization for the reconciliation engine.
//!
//! The engine is a library embedded in the admin console process, so
//! initialization is idempotent: the first caller wins, later callers (other
//! library consumers, test binaries) are no-ops.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile selected by the embedding process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Compact single-line output at debug level. The pending diff is
    /// recomputed on every form change, so events must stay cheap to read.
    Development,
    /// JSON output at info level for log aggregation.
    Production,
    /// Quiet registry; tests assert on behavior, not on log output.
    Test,
}

impl Profile {
    fn default_filter(self) -> &'static str {
        match self {
            Profile::Development => "travesia=debug",
            Profile::Production => "travesia=info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the tracing subscriber for the given profile.
///
/// `RUST_LOG` overrides the profile's default filter when set. Safe to call
/// from multiple consumers; only the first call installs anything.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}
