use crate::config::Config;
use crate::error::AppError;
use crate::schedule::parsers::ScheduleQuery;

/// Validates the configuration settings
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
///
/// # Validation Rules
/// - team, location and ics_file cannot be empty
/// - practice and game URLs must be http(s) URLs
/// - practice and game queries must be valid CSS selectors
/// - enabled proxies need at least one proxy URL
/// - HTTP timeout must be positive
/// - If log file path is provided, it cannot be empty
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    require_non_empty("team", &config.team)?;
    require_non_empty("location", &config.location)?;
    require_non_empty("ics_file", &config.ics_file)?;

    for (name, source) in [("practice", &config.practice), ("games", &config.games)] {
        validate_url(&format!("{name}.url"), &source.url)?;
        ScheduleQuery::parse(&source.query).map_err(|e| {
            AppError::config_error(format!("{name}.query is not usable: {e}"))
        })?;
    }

    if config.proxies.enable {
        let proxies = [
            ("proxies.http", &config.proxies.http),
            ("proxies.https", &config.proxies.https),
        ];
        if proxies.iter().all(|(_, url)| url.is_none()) {
            return Err(AppError::config_error(
                "Proxies are enabled but neither proxies.http nor proxies.https is set",
            ));
        }
        for (name, url) in proxies {
            if let Some(url) = url {
                validate_url(name, url)?;
            }
        }
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "http_timeout_seconds must be greater than zero",
        ));
    }

    if let Some(log_path) = &config.log_file_path
        && log_path.trim().is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}

fn require_non_empty(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }
    Ok(())
}

fn validate_url(name: &str, url: &str) -> Result<(), AppError> {
    require_non_empty(name, url)?;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{name} must start with http:// or https://, got '{url}'"
        )));
    }
    Ok(())
}
