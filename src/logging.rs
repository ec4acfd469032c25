//! Structured logging through `tracing`
//!
//! The library only emits events; binaries install a subscriber once with
//! [`init`].

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr subscriber filtered by `filter` (an `EnvFilter` directive
/// such as `warn` or `svc=debug`)
///
/// Installing twice is an error.
pub fn init(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|err| anyhow::anyhow!("Invalid log filter {filter:?}: {err}"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|err| anyhow::anyhow!("Unable to install log subscriber: {err}"))
}
