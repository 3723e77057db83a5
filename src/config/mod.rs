//! Configuration module for the Explorer blog.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the CMS REST API, e.g. `https://explorer.cdn.prismic.io/api/v2`
    pub cms_endpoint: String,
    /// Access token for private CMS repositories
    pub cms_access_token: Option<String>,
    /// Timeout applied to every CMS request
    pub cms_timeout: Duration,
    /// Number of posts per listing page
    pub page_size: u32,
    /// Maximum age of the initial-page snapshot
    pub revalidate_after: Duration,
    /// Shared secret guarding on-demand revalidation
    pub revalidate_secret: Option<String>,
    /// Time zone used when formatting publication dates
    pub timezone: Tz,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let cms_endpoint = env::var("EXPLORER_CMS_ENDPOINT")
            .map_err(|_| AppError::Config("EXPLORER_CMS_ENDPOINT is required".to_string()))?;

        let cms_access_token = env::var("EXPLORER_CMS_ACCESS_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());

        let cms_timeout = Duration::from_secs(parse_var("EXPLORER_CMS_TIMEOUT_SECS", 10)?);

        let page_size: u32 = parse_var("EXPLORER_PAGE_SIZE", 2)?;
        if page_size == 0 {
            return Err(AppError::Config(
                "EXPLORER_PAGE_SIZE must be at least 1".to_string(),
            ));
        }

        let revalidate_after = Duration::from_secs(parse_var("EXPLORER_REVALIDATE_SECS", 60 * 30)?);

        let revalidate_secret = env::var("EXPLORER_REVALIDATE_SECRET")
            .ok()
            .filter(|s| !s.is_empty());

        let timezone = parse_var("EXPLORER_TIMEZONE", Tz::America__Sao_Paulo)?;

        let bind_addr = parse_var("EXPLORER_BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?;

        let log_level = env::var("EXPLORER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = match env::var("EXPLORER_LOG_FORMAT") {
            Ok(format) => match format.trim() {
                "json" => true,
                "text" | "" => false,
                other => {
                    return Err(AppError::Config(format!(
                        "Invalid EXPLORER_LOG_FORMAT {:?}: expected text or json",
                        other
                    )))
                }
            },
            Err(_) => false,
        };

        Ok(Self {
            cms_endpoint,
            cms_access_token,
            cms_timeout,
            page_size,
            revalidate_after,
            revalidate_secret,
            timezone,
            bind_addr,
            log_level,
            log_json,
        })
    }
}

/// Parse an optional environment variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid {} {:?}: {}", name, raw, e))),
        Err(_) => Ok(default),
    }
}
