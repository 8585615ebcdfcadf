//! Configuration for the coupon harvester.
//!
//! Pricing constants default to the exchange's standard contract terms and
//! can be overridden from a config file or `HARVEST__`-prefixed environment
//! variables.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Bond pricing constants
    #[serde(default)]
    pub pricing: PricingConfig,
}

/// Contract terms used by the income calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Nominal redemption value per bond
    #[serde(default = "default_face_value")]
    pub face_value: Decimal,
    /// Days past the horizon during which coupons still accrue
    #[serde(default = "default_grace_period_days")]
    pub grace_period_days: u32,
    /// Per-bond daily coupon payout
    #[serde(default = "default_daily_coupon")]
    pub daily_coupon: Decimal,
}

// Default value functions
fn default_face_value() -> Decimal {
    Decimal::new(1000, 0)
}

fn default_grace_period_days() -> u32 {
    30
}

fn default_daily_coupon() -> Decimal {
    Decimal::ONE
}

impl Config {
    /// Load configuration from environment variables and config files.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .prefix("HARVEST"),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.pricing.face_value > Decimal::ZERO,
            "face_value must be positive"
        );

        anyhow::ensure!(
            self.pricing.daily_coupon >= Decimal::ZERO,
            "daily_coupon cannot be negative"
        );

        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            face_value: default_face_value(),
            grace_period_days: default_grace_period_days(),
            daily_coupon: default_daily_coupon(),
        }
    }
}
