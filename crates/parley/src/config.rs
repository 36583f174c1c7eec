use std::path::PathBuf;

use anyhow::{Context, Result};

/// Embedder-facing configuration loaded from environment variables.
/// Every variable has a default — the engine runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file backing the session state mirror.
    pub storage_path: PathBuf,
    /// Default log filter directive when RUST_LOG is unset.
    pub rust_log: String,
    /// Question countdowns tick this many times per second. Hosts that drive
    /// ticks from their own render loop can ignore it.
    pub tick_hz: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            storage_path: std::env::var("PARLEY_STORAGE_PATH")
                .unwrap_or_else(|_| "parley-state.json".to_string())
                .into(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            tick_hz: std::env::var("PARLEY_TICK_HZ")
                .unwrap_or_else(|_| "1".to_string())
                .parse::<u32>()
                .context("PARLEY_TICK_HZ must be a positive integer")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_env() {
        std::env::remove_var("PARLEY_STORAGE_PATH");
        std::env::remove_var("PARLEY_TICK_HZ");
        let config = Config::from_env().unwrap();
        assert_eq!(config.storage_path, PathBuf::from("parley-state.json"));
        assert_eq!(config.tick_hz, 1);
    }
}
