use crate::config::{AppConfig, LogConfig, PricingConfig};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// State for tests: defaults everywhere, nothing read from the environment.
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            log: LogConfig {
                filter: "petcare=debug".into(),
                json: false,
            },
            pricing: PricingConfig::default(),
        });
        Self::from_config(config)
    }
}
