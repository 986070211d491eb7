use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub vision: VisionConfig,
    pub billing: BillingConfig,
    pub listen_port: u16,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST").context("DATABASE_HOST is not set")?,
            port: env::var("DATABASE_PORT")
                .context("DATABASE_PORT is not set")?
                .parse()
                .context("DATABASE_PORT is not a port number")?,
            username: env::var("DATABASE_USERNAME").context("DATABASE_USERNAME is not set")?,
            password: env::var("DATABASE_PASSWORD").context("DATABASE_PASSWORD is not set")?,
            database: env::var("DATABASE_NAME").context("DATABASE_NAME is not set")?,
        };
        let vision = VisionConfig {
            endpoint: env::var("VISION_ENDPOINT").context("VISION_ENDPOINT is not set")?,
            api_key: env::var("VISION_API_KEY").context("VISION_API_KEY is not set")?,
            timeout: Duration::from_secs(
                env::var("VISION_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "10".into())
                    .parse()
                    .context("VISION_TIMEOUT_SECONDS is not a number")?,
            ),
        };
        let billing = BillingConfig {
            rate_per_30_minutes: env::var("RATE_PER_30_MINUTES")
                .unwrap_or_else(|_| "0.50".into())
                .parse()
                .context("RATE_PER_30_MINUTES is not a decimal amount")?,
        };
        let listen_port = env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .context("PORT is not a port number")?;
        Ok(Self {
            database,
            vision,
            billing,
            listen_port,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

#[derive(Debug, Clone)]
pub struct VisionConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct BillingConfig {
    pub rate_per_30_minutes: Decimal,
}
