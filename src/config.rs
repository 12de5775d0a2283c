use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub http_timeout_secs: u64,
    pub notice_ttl_secs: u64,
    pub panel_rps: u32,
    pub telegram_init_data: Option<String>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            api_base_url: get_env("API_BASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            session_file: env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".hr-panel/session.json")),
            http_timeout_secs: get_env_parse_or("HTTP_TIMEOUT_SECS", 30)?,
            notice_ttl_secs: get_env_parse_or("NOTICE_TTL_SECS", 3)?,
            panel_rps: get_env_parse_or("PANEL_RPS", 20)?,
            telegram_init_data: env::var("TELEGRAM_INIT_DATA")
                .ok()
                .filter(|raw| !raw.trim().is_empty()),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
