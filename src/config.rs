// src/config.rs

use std::env;

use dotenvy::dotenv;
use url::Url;

use crate::error::AppError;

/// Questions shown per quiz page.
pub const QUESTIONS_PER_PAGE: usize = 6;
/// Number of quiz pages.
pub const TOTAL_PAGES: usize = 7;
/// Lowest point of the Likert scale ("Rarely").
pub const RESPONSE_MIN: i64 = 1;
/// Highest point of the Likert scale ("Almost Always").
pub const RESPONSE_MAX: i64 = 5;
/// Width given to the lowest-scoring bar in rendered profiles.
pub const BAR_FLOOR_PERCENT: i64 = 20;

pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://courageprofile.com";
pub const DEFAULT_EMAIL_FROM: &str = "Courage Profile <quiz@courageprofile.com>";
pub const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. Without it submissions are kept in memory.
    pub database_url: Option<String>,
    pub rust_log: String,
    pub port: u16,
    /// Origin used for result links and share URLs.
    pub public_base_url: Url,
    /// Enables outbound results emails through Resend.
    pub resend_api_key: Option<String>,
    pub email_from: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL");

        let rust_log = var("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let port = match var("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::Configuration(format!("APP_PORT must be a valid u16, got '{raw}'")))?,
            None => 3000,
        };

        let base = var("PUBLIC_BASE_URL").unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string());
        let public_base_url = Url::parse(base.trim())
            .map_err(|e| AppError::Configuration(format!("PUBLIC_BASE_URL is not a valid URL: {e}")))?;

        let resend_api_key = var("RESEND_API_KEY");

        let email_from = var("EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string());

        let cors_origins = var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(|| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://127.0.0.1:3000".to_string(),
                ]
            });

        Ok(Self {
            database_url,
            rust_log,
            port,
            public_base_url,
            resend_api_key,
            email_from,
            cors_origins,
        })
    }
}
