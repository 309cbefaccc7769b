use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/cambio.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub favorites_path: String,
    /// "light" or "dark"; anything else falls back to light.
    pub theme: String,
    pub from: String,
    pub to: String,
    pub amount: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.frankfurter.app".to_string(),
            favorites_path: "config/favorites.json".to_string(),
            theme: "light".to_string(),
            from: "USD".to_string(),
            to: "INR".to_string(),
            amount: "1".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cambio_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the rate API base URL.
    #[arg(long)]
    base_url: Option<String>,
    /// Override the favorites file path.
    #[arg(long)]
    favorites: Option<String>,
    /// Start with this theme ("light" or "dark").
    #[arg(long)]
    theme: Option<String>,
    /// Initial source currency code.
    #[arg(long)]
    from: Option<String>,
    /// Initial target currency code.
    #[arg(long)]
    to: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("CAMBIO"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(favorites) = args.favorites {
        settings.favorites_path = favorites;
    }
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }
    if let Some(from) = args.from {
        settings.from = from;
    }
    if let Some(to) = args.to {
        settings.to = to;
    }

    Ok(settings)
}
