//! Configuration module
//!
//! Runtime configuration for the storage layer, loaded from the environment.
//! The CDN credentials themselves belong to the injected remote-service client
//! and are not read here.

use std::env;

use anyhow::{bail, Result};

/// Application configuration for the picture storage layer
#[derive(Clone, Debug)]
pub struct Config {
    /// Storage adapter selected at startup (currently only `"cdn"`)
    pub storage_adapter: String,
    /// Default URL scheme when transform options carry no explicit `secure`
    pub secure_urls: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_adapter: "cdn".to_string(),
            secure_urls: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `STORAGE_ADAPTER` defaults to `"cdn"`, `SECURE_URLS` to `"true"`.
    pub fn from_env() -> Result<Self> {
        let storage_adapter =
            env::var("STORAGE_ADAPTER").unwrap_or_else(|_| "cdn".to_string());
        let secure_urls = parse_bool(
            &env::var("SECURE_URLS").unwrap_or_else(|_| "true".to_string()),
            "SECURE_URLS",
        )?;

        Ok(Config {
            storage_adapter,
            secure_urls,
        })
    }
}

fn parse_bool(value: &str, name: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("Invalid boolean for {}: {}", name, other),
    }
}
