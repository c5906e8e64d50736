//! Subscriber setup for the binary. Library code only emits events.

use crate::utils::{InventoryError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Installs the global subscriber, writing to stderr so stdout stays the
/// report. `RUST_LOG` overrides the default `info` filter.
pub fn init(format: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format {
        "json" => Registry::default()
            .with(env_filter)
            .with(fmt::layer().json().flatten_event(true).with_writer(std::io::stderr))
            .try_init(),
        "text" => Registry::default()
            .with(env_filter)
            .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
            .try_init(),
        other => return Err(InventoryError::Format(other.to_string())),
    };

    result.map_err(|e| InventoryError::Logging(e.to_string()))
}
