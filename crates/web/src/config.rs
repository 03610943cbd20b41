use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub google_api_base_url: String,
    pub google_calendar_id: String,
    pub google_api_key: String,
    pub contentful_api_base_url: String,
    pub contentful_space_id: String,
    pub contentful_access_token: String,
    pub discord_webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            google_api_base_url: std::env::var("GOOGLE_API_BASE_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com/calendar/v3".to_string()),
            google_calendar_id: std::env::var("GOOGLE_CALENDAR_ID")
                .context("Cannot load GOOGLE_CALENDAR_ID env variable")?,
            google_api_key: std::env::var("GOOGLE_API_KEY")
                .context("Cannot load GOOGLE_API_KEY env variable")?,
            contentful_api_base_url: std::env::var("CONTENTFUL_API_BASE_URL")
                .unwrap_or_else(|_| "https://cdn.contentful.com".to_string()),
            contentful_space_id: std::env::var("CONTENTFUL_SPACE_ID")
                .context("Cannot load CONTENTFUL_SPACE_ID env variable")?,
            contentful_access_token: std::env::var("CONTENTFUL_ACCESS_TOKEN")
                .context("Cannot load CONTENTFUL_ACCESS_TOKEN env variable")?,
            // Optional: without a webhook the notifier logs and drops.
            discord_webhook_url: std::env::var("DISCORD_WEBHOOK_URL").ok(),
        })
    }
}
