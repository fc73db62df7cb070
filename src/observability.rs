use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging.
///
/// `RUST_LOG` wins over the configured level; output is structured JSON when
/// `ENVIRONMENT=production`, pretty console otherwise.
pub fn init_observability(log_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let is_production = std::env::var("ENVIRONMENT")
        .map(|env| env == "production")
        .unwrap_or(false);

    if is_production {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_filter(env_filter))
            .try_init()?;
    }

    Ok(())
}
