use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{StoriesError, StoriesResult};
use crate::services::DEFAULT_FETCH_CONCURRENCY;
use crate::sources::DEFAULT_BASE_URL;
use crate::storage::memory::{DEFAULT_CAPACITY, DEFAULT_TTL};

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub upstream_url: String,
    pub bind: SocketAddr,
    pub cache_ttl: Duration,
    pub cache_capacity: u64,
    pub fetch_concurrency: usize,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> StoriesResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> StoriesResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let upstream_url =
            lookup("STORIES_UPSTREAM_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&upstream_url)
            .map_err(|e| StoriesError::InvalidUrl(format!("{}: {}", upstream_url, e)))?;

        let bind: SocketAddr = parse_var(&lookup, "STORIES_BIND", DEFAULT_BIND.parse().ok())?;

        let cache_ttl_secs: u64 =
            parse_var(&lookup, "STORIES_CACHE_TTL_SECS", Some(DEFAULT_TTL.as_secs()))?;
        let cache_capacity: u64 =
            parse_var(&lookup, "STORIES_CACHE_CAPACITY", Some(DEFAULT_CAPACITY))?;
        let fetch_concurrency: usize = parse_var(
            &lookup,
            "STORIES_FETCH_CONCURRENCY",
            Some(DEFAULT_FETCH_CONCURRENCY),
        )?;

        for (key, value) in [
            ("STORIES_CACHE_TTL_SECS", cache_ttl_secs),
            ("STORIES_CACHE_CAPACITY", cache_capacity),
            ("STORIES_FETCH_CONCURRENCY", fetch_concurrency as u64),
        ] {
            if value == 0 {
                return Err(StoriesError::Config(format!("{} must be greater than 0", key)));
            }
        }

        Ok(Self {
            upstream_url,
            bind,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            cache_capacity,
            fetch_concurrency,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, default: Option<T>) -> StoriesResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| StoriesError::Config(format!("Invalid {} '{}': {}", key, raw, e))),
        None => default.ok_or_else(|| StoriesError::MissingEnvVar(key.to_string())),
    }
}
