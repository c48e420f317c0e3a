use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::latency::DEFAULT_RANGE_MS;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub fill_service_url: String,
    pub fill_timeout: Duration,
    pub storage: StorageBackend,
    /// Simulated round-trip range in milliseconds; `None` disables it.
    pub latency_ms: Option<(u64, u64)>,
}

/// Which snapshot backing holds the job requisition collection.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    File { data_dir: String },
    Redis { url: String },
    Memory,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let storage = match std::env::var("STORAGE_BACKEND").as_deref().unwrap_or("file") {
            "file" => StorageBackend::File {
                data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            },
            "redis" => StorageBackend::Redis {
                url: require_env("REDIS_URL")?,
            },
            "memory" => StorageBackend::Memory,
            other => bail!("Unknown STORAGE_BACKEND '{other}' (expected file, redis, or memory)"),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            fill_service_url: require_env("FILL_SERVICE_URL")?,
            fill_timeout: Duration::from_secs(
                std::env::var("FILL_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse::<u64>()
                    .context("FILL_TIMEOUT_SECS must be a number of seconds")?,
            ),
            latency_ms: parse_latency(&std::env::var("SIMULATED_LATENCY_MS").unwrap_or_else(
                |_| format!("{}-{}", DEFAULT_RANGE_MS.start, DEFAULT_RANGE_MS.end),
            ))?,
            storage,
        })
    }
}

fn parse_latency(spec: &str) -> Result<Option<(u64, u64)>> {
    if spec.eq_ignore_ascii_case("off") {
        return Ok(None);
    }
    let (lo, hi) = spec
        .split_once('-')
        .context("SIMULATED_LATENCY_MS must be 'LO-HI' in milliseconds, or 'off'")?;
    let lo = lo
        .trim()
        .parse::<u64>()
        .context("SIMULATED_LATENCY_MS lower bound must be a number")?;
    let hi = hi
        .trim()
        .parse::<u64>()
        .context("SIMULATED_LATENCY_MS upper bound must be a number")?;
    if lo >= hi {
        bail!("SIMULATED_LATENCY_MS range must satisfy LO < HI");
    }
    Ok(Some((lo, hi)))
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_off_disables_the_pause() {
        assert_eq!(parse_latency("off").unwrap(), None);
        assert_eq!(parse_latency("OFF").unwrap(), None);
    }

    #[test]
    fn test_latency_range_parses() {
        assert_eq!(parse_latency("1000-2000").unwrap(), Some((1000, 2000)));
        assert_eq!(parse_latency("50 - 100").unwrap(), Some((50, 100)));
    }

    #[test]
    fn test_latency_rejects_malformed_specs() {
        assert!(parse_latency("1500").is_err());
        assert!(parse_latency("2000-1000").is_err());
        assert!(parse_latency("fast-slow").is_err());
    }
}
