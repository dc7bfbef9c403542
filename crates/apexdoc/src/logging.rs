use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::Config;

/// Initialize logging. Output goes to stderr so stdout stays usable in
/// list and URL modes; `RUST_LOG` overrides the configured level.
pub fn init(config: &Config) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let fmt_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    log_config(config);
    Ok(())
}

pub fn log_config(config: &Config) {
    tracing::debug!(
        toc_path = %config.toc_path.display(),
        base_url = %config.base_url,
        reference_root_id = %config.reference_root_id,
        browser = ?config.browser,
        "Configuration loaded"
    );
}
