//! Tracing subscriber setup.

use recall_core::config::GeneralConfig;
use tracing_subscriber::EnvFilter;

use crate::error::{PdError, Result};

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins over `config.log_level` when set. Fails if a global
/// subscriber is already installed.
///
/// # Errors
/// Returns [`PdError::Telemetry`] for an unparsable filter or a second init.
pub fn init_tracing(config: &GeneralConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| PdError::Telemetry(e.to_string()))?,
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| PdError::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_rejected() {
        let config = GeneralConfig {
            log_level: "debug".to_string(),
            ..GeneralConfig::default()
        };
        assert!(init_tracing(&config).is_ok());
        assert!(matches!(init_tracing(&config), Err(PdError::Telemetry(_))));
    }
}
