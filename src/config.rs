use std::env;

use anyhow::{Context, bail};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api_key: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let api_key = env::var("API_KEY").context("API_KEY is not set")?;
        if api_key.is_empty() {
            bail!("API_KEY must not be empty");
        }
        Ok(Self {
            host,
            port,
            api_key,
        })
    }
}
