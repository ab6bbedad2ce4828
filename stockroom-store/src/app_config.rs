use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub requisition: RequisitionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub url: String,
    #[serde(default = "default_stock")]
    pub default_stock: u32,
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

fn default_stock() -> u32 { 10 }

fn default_timeout() -> u64 { 30 }

#[derive(Debug, Deserialize, Clone)]
pub struct RequisitionConfig {
    #[serde(default = "default_first_document")]
    pub first_document_number: u32,
    pub location_code: String,
    pub location_name: String,
    pub person_id: String,
    pub person_name: String,
}

fn default_first_document() -> u32 { 4 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `STOCKROOM__SERVER__PORT=8080` sets `server.port`
            .add_source(config::Environment::with_prefix("STOCKROOM").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
