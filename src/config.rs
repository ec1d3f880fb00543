use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub auth_secret: String,

    pub server_port: u16,

    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,

    pub stats_url: String,

    pub media_base_url: String,

    #[serde(default)]
    pub debug: bool,
}

fn default_processing_delay_ms() -> u64 {
    5000
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }
}
