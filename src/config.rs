use anyhow::{Context, Result};

const DEFAULT_BOT_NAME: &str = "SSIbot";
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    /// Name the bot signs its credit notes with.
    pub bot_name: String,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .with_context(|| format!("{key} environment variable is required"))
        };
        let optional = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            base_url: required("REDMINE_BASE_URL")?,
            api_key: required("REDMINE_API_KEY")?,
            bot_name: optional("REDMINE_BOT_NAME", DEFAULT_BOT_NAME),
            user_agent: optional("REDMINE_USER_AGENT", DEFAULT_USER_AGENT),
        })
    }
}
