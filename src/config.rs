use anyhow::Context;
use serde::Deserialize;

use crate::bookings::QuoteOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    pub round_to_cents: bool,
    pub missing_price: f64,
}

impl PricingConfig {
    pub fn quote_options(&self) -> QuoteOptions {
        QuoteOptions {
            missing_price: self.missing_price,
            round_to_cents: self.round_to_cents,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        let defaults = QuoteOptions::default();
        Self {
            round_to_cents: defaults.round_to_cents,
            missing_price: defaults.missing_price,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log: LogConfig,
    pub pricing: PricingConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log = LogConfig {
            filter: lookup("RUST_LOG")
                .unwrap_or_else(|| "petcare=debug,axum=info,tower_http=info".into()),
            json: lookup("LOG_FORMAT").map(|v| v == "json").unwrap_or(false),
        };

        let pricing = PricingConfig {
            round_to_cents: lookup("PRICE_ROUND_TO_CENTS")
                .map(|v| {
                    v.parse::<bool>()
                        .with_context(|| format!("PRICE_ROUND_TO_CENTS must be true or false, got {v:?}"))
                })
                .transpose()?
                .unwrap_or(false),
            missing_price: lookup("PRICE_MISSING_FALLBACK")
                .map(|v| {
                    v.parse::<f64>()
                        .with_context(|| format!("PRICE_MISSING_FALLBACK must be a number, got {v:?}"))
                })
                .transpose()?
                .unwrap_or(0.0),
        };

        let port = lookup("APP_PORT")
            .map(|v| {
                v.parse::<u16>()
                    .with_context(|| format!("APP_PORT must be a port number, got {v:?}"))
            })
            .transpose()?
            .unwrap_or(8080);

        Ok(Self {
            host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            log,
            pricing,
        })
    }
}
