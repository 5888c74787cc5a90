use anyhow::{Context, Result};

/// Server configuration, read from the environment once at startup and passed
/// down explicitly (no module-level globals).
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub allowed_origins: Vec<String>,
    pub bind_host: String,
    pub bind_port: u16,
    pub debug: bool,
}

/// Connection parameters for the MySQL datastore.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database = DatabaseConfig::from_env()?;

        let allowed_origins = parse_origins(&env_or("ALLOWED_ORIGINS", "http://localhost:8080"));
        let bind_host = env_or("APP_HOST", "0.0.0.0");
        let bind_port = env_or("APP_PORT", "8000")
            .parse::<u16>()
            .context("APP_PORT must be a port number")?;
        let debug = parse_flag(&env_or("DEBUG", "false"));

        Ok(Self {
            database,
            allowed_origins,
            bind_host,
            bind_port,
            debug,
        })
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env_or("MYSQL_HOST", "localhost"),
            port: env_or("MYSQL_PORT", "3306")
                .parse::<u16>()
                .context("MYSQL_PORT must be a port number")?,
            user: env_or("MYSQL_USER", "root"),
            password: env_or("MYSQL_PASSWORD", "example"),
            database: env_or("MYSQL_DATABASE", "textsdb"),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Split a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Only the literal `true` (any casing) enables a flag.
fn parse_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}
