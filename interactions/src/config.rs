use crate::Result;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub discord_token: String,
    #[serde(default = "default_api_base")]
    pub discord_api_base: String,
    #[serde(default = "default_connect_timeout")]
    pub http_connect_timeout_secs: u64,
    #[serde(default = "default_timeout")]
    pub http_timeout_secs: u64,
}

fn default_api_base() -> String {
    "https://discord.com/api/v10".to_owned()
}

fn default_connect_timeout() -> u64 {
    3
}

fn default_timeout() -> u64 {
    10
}

impl Config {
    pub fn load() -> Result<Config> {
        Ok(envy::from_env()?)
    }

    pub fn new(discord_token: impl Into<String>) -> Config {
        Config {
            discord_token: discord_token.into(),
            discord_api_base: default_api_base(),
            http_connect_timeout_secs: default_connect_timeout(),
            http_timeout_secs: default_timeout(),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.http_connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
