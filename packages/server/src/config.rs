use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    /// Empty means any origin (development)
    pub allowed_origins: Vec<String>,
    pub db_max_connections: u32,
    /// Quota given to SKPDs created without one
    pub default_monthly_quota: i32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let default_monthly_quota: i32 = env::var("DEFAULT_MONTHLY_QUOTA")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .context("DEFAULT_MONTHLY_QUOTA must be a valid number")?;
        anyhow::ensure!(
            default_monthly_quota >= 1,
            "DEFAULT_MONTHLY_QUOTA must be at least 1"
        );

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "publikasi".to_string()),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|value| parse_origins(&value))
                .unwrap_or_default(),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
            default_monthly_quota,
        })
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_trimmed() {
        assert_eq!(
            parse_origins("https://a.go.id, https://b.go.id ,,"),
            vec!["https://a.go.id".to_string(), "https://b.go.id".to_string()]
        );
        assert!(parse_origins("").is_empty());
    }
}
