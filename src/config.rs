use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;

/// Whether shows may be listed with a start time at or before "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PastShowPolicy {
    #[default]
    Allow,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub past_show_policy: PastShowPolicy,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            past_show_policy: match env::var("REJECT_PAST_SHOWS").ok() {
                Some(value) if parse_bool(&value)? => PastShowPolicy::Reject,
                _ => PastShowPolicy::Allow,
            },
            log_format: match env::var("LOG_FORMAT").ok().as_deref() {
                Some("json") => LogFormat::Json,
                Some("pretty") | None => LogFormat::Pretty,
                Some(other) => bail!("LOG_FORMAT must be 'pretty' or 'json', got '{}'", other),
            },
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("REJECT_PAST_SHOWS must be a boolean, got '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool(" YES ").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(!parse_bool("").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
