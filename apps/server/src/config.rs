use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_PATH: &str = "./db/spendwise.db";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_SWEEP_SECS: u64 = 600;
const DEFAULT_SMTP_PORT: u16 = 587;

/// Relay settings for recovery mail. Absent when `SW_SMTP_HOST` is unset.
#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub recovery_sweep_interval: Duration,
    pub smtp: Option<SmtpConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            db_path: DEFAULT_DB_PATH.to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            recovery_sweep_interval: Duration::from_secs(DEFAULT_SWEEP_SECS),
            smtp: None,
        }
    }
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = env_opt("SW_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid SW_LISTEN_ADDR")?;
        let db_path = env_opt("DATABASE_URL")
            .or_else(|| env_opt("SW_DB_PATH"))
            .unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let cors_allow = env_opt("SW_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_opt("SW_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let sweep_secs: u64 = env_opt("SW_RECOVERY_SWEEP_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_SWEEP_SECS);

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            recovery_sweep_interval: Duration::from_secs(sweep_secs),
            smtp: Self::smtp_from_env()?,
        })
    }

    fn smtp_from_env() -> anyhow::Result<Option<SmtpConfig>> {
        let Some(host) = env_opt("SW_SMTP_HOST") else {
            return Ok(None);
        };
        let port = match env_opt("SW_SMTP_PORT") {
            Some(raw) => raw.parse().context("Invalid SW_SMTP_PORT")?,
            None => DEFAULT_SMTP_PORT,
        };
        let username = env_opt("SW_SMTP_USERNAME");
        let from = env_opt("SW_SMTP_FROM")
            .or_else(|| username.clone())
            .context("SW_SMTP_FROM or SW_SMTP_USERNAME is required when SW_SMTP_HOST is set")?;
        Ok(Some(SmtpConfig {
            host,
            port,
            username,
            password: env_opt("SW_SMTP_PASSWORD"),
            from,
        }))
    }
}
