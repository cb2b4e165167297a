// src/config.rs
use once_cell::sync::Lazy;
use std::{env, time::Duration};
use url::Url;

use crate::error::{Result, VerifyError};

pub const ENV_SHEET_URL: &str = "DEGREEVERIFY_SHEET_URL";
pub const ENV_TIMEOUT_SECS: &str = "DEGREEVERIFY_TIMEOUT_SECS";
pub const ENV_OUTPUT: &str = "DEGREEVERIFY_OUTPUT";

/// Published CSV export of the verification sheet.
static DEFAULT_SHEET_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse(
        "https://docs.google.com/spreadsheets/d/e/2PACX-1vREXkkmBCuLVpmXryeWCzuJqczkwhq3CmXpXi9PUg2I3pcKFO6cWJDJywM9MJzdTYoB6veKXjElz-gT/pub?output=csv",
    )
    .expect("default sheet URL should parse")
});

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sheet_url: Url,
    pub timeout: Duration,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_url: DEFAULT_SHEET_URL.clone(),
            timeout: DEFAULT_TIMEOUT,
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Config::default();

        if let Some(raw) = get(ENV_SHEET_URL) {
            let url = Url::parse(raw.trim()).map_err(|e| VerifyError::Config {
                key: ENV_SHEET_URL,
                reason: e.to_string(),
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(VerifyError::Config {
                    key: ENV_SHEET_URL,
                    reason: format!("unsupported scheme {:?}", url.scheme()),
                });
            }
            cfg.sheet_url = url;
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| VerifyError::Config {
                key: ENV_TIMEOUT_SECS,
                reason: format!("{:?} is not a whole number of seconds", raw),
            })?;
            if secs == 0 {
                return Err(VerifyError::Config {
                    key: ENV_TIMEOUT_SECS,
                    reason: "must be greater than zero".into(),
                });
            }
            cfg.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = get(ENV_OUTPUT) {
            cfg.output = match raw.trim().to_lowercase().as_str() {
                "html" => OutputFormat::Html,
                "json" => OutputFormat::Json,
                other => {
                    return Err(VerifyError::Config {
                        key: ENV_OUTPUT,
                        reason: format!("expected html or json, got {:?}", other),
                    })
                }
            };
        }

        Ok(cfg)
    }
}
