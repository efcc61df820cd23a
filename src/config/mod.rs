use crate::constants::env_vars;
use crate::error::AppError;
use crate::schedule::models::ExtractContext;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_log_dir_path, resolve_config_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Loaded once at startup and passed by reference to every component.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Team whose practices and games are collected, e.g. "Sharks"
    pub team: String,
    /// Street address of the arena, copied into every calendar event
    pub location: String,
    /// Output path of the iCalendar file
    pub ics_file: String,
    /// HTTP timeout in seconds for page requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Drop events repeating an earlier (title, start) pair
    #[serde(default)]
    pub dedupe: bool,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Optional proxy servers; a missing section means no proxy
    #[serde(default)]
    pub proxies: ProxyConfig,
    /// Practice calendar page
    pub practice: SourceConfig,
    /// Game schedule page
    pub games: SourceConfig,
}

/// Proxy settings for reaching the rink pages.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ProxyConfig {
    #[serde(default)]
    pub enable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https: Option<String>,
}

/// Where one schedule kind lives and how to find its fragments.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub url: String,
    /// CSS selector for the schedule nodes (practice) or table body (games)
    #[serde(alias = "xpath")]
    pub query: String,
}

/// On-disk layout of a config file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Config {
    /// Loads, overrides and validates the configuration.
    ///
    /// # Arguments
    /// * `explicit_path` - Path given on the command line, if any
    ///
    /// # Environment Variables
    /// - `ICE_SCRAPER_CONFIG` - Config file location when no path is given
    /// - `ICE_SCRAPER_TEAM` - Override team
    /// - `ICE_SCRAPER_ICS_FILE` - Override output file
    /// - `ICE_SCRAPER_LOG_FILE` - Override log file path
    /// - `ICE_SCRAPER_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    ///
    /// # Returns
    /// * `Ok(Config)` - Valid configuration
    /// * `Err(AppError)` - Missing file, unreadable file or invalid settings
    pub async fn load(explicit_path: Option<&str>) -> Result<Self, AppError> {
        let config_path = resolve_config_path(explicit_path);

        if !Path::new(&config_path).exists() {
            return Err(AppError::config_error(format!(
                "No configuration file found at {config_path} (run with --init to create one)"
            )));
        }

        let mut config = Self::load_from_path(&config_path).await?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Reads a config file without overrides or validation.
    /// Files ending in `.json` are read as JSON, everything else as TOML.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        Self::parse(&content, ConfigFormat::from_path(path))
    }

    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, AppError> {
        Ok(match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        })
    }

    /// Applies overrides from a key lookup, normally the process environment.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(team) = lookup(env_vars::TEAM) {
            self.team = team;
        }

        if let Some(ics_file) = lookup(env_vars::ICS_FILE) {
            self.ics_file = ics_file;
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.parse::<u64>().ok()) {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Team and address every parser needs.
    pub fn extract_context(&self) -> ExtractContext {
        ExtractContext::new(self.team.clone(), self.location.clone())
    }

    /// A starting point for a new config file.
    pub fn example() -> Self {
        Config {
            team: "Sharks".to_string(),
            location: "123 Arena Way, Gilbert, AZ".to_string(),
            ics_file: "sharks.ics".to_string(),
            http_timeout_seconds: default_http_timeout(),
            dedupe: false,
            log_file_path: None,
            proxies: ProxyConfig::default(),
            practice: SourceConfig {
                url: "https://rink.example.com/practice-schedule".to_string(),
                query: "td[data-content]".to_string(),
            },
            games: SourceConfig {
                url: "https://rink.example.com/game-schedule".to_string(),
                query: "table.schedule > tbody".to_string(),
            },
        }
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }

    /// Saves configuration as TOML, creating the parent directory if needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Displays current configuration settings to stdout.
    pub fn display(&self, config_path: &str) {
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Team:");
        println!("{}", self.team);
        println!("────────────────────────────────────");
        println!("Arena Address:");
        println!("{}", self.location);
        println!("────────────────────────────────────");
        println!("Practice Schedule:");
        println!("{} ({})", self.practice.url, self.practice.query);
        println!("────────────────────────────────────");
        println!("Game Schedule:");
        println!("{} ({})", self.games.url, self.games.query);
        println!("────────────────────────────────────");
        println!("Calendar File:");
        println!("{}", self.ics_file);
        println!("────────────────────────────────────");
        println!("Proxies:");
        if self.proxies.enable {
            println!("http:  {}", self.proxies.http.as_deref().unwrap_or("-"));
            println!("https: {}", self.proxies.https.as_deref().unwrap_or("-"));
        } else {
            println!("disabled");
        }
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Drop Duplicates:");
        println!("{}", if self.dedupe { "yes" } else { "no" });
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{}/{}", get_log_dir_path(), crate::constants::files::LOG_FILE);
            println!("(Default location)");
        }
    }
}
