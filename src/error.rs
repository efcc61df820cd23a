use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch schedule page: {0}")]
    SourceFetch(#[from] reqwest::Error),

    // Specific HTTP status code errors
    #[error("Schedule page not found (404): {url}")]
    SourceNotFound { url: String },

    #[error("Schedule server error ({status}): {message} (URL: {url})")]
    SourceServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Schedule request rejected ({status}): {message} (URL: {url})")]
    SourceClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Schedule server rate limit exceeded (429): {message} (URL: {url})")]
    SourceRateLimit { message: String, url: String },

    #[error("Schedule server unavailable ({status}): {message} (URL: {url})")]
    SourceServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Schedule page was empty: {message} (URL: {url})")]
    SourceNoData { message: String, url: String },

    // Network-specific errors
    #[error("Network timeout while fetching: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Scraped text that does not have the expected shape
    #[error("Unexpected {field} format: '{value}'")]
    Format { field: String, value: String },

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Invalid query '{query}': {message}")]
    InvalidQuery { query: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON configuration error: {0}")]
    JsonConfig(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a format error for a scraped field that did not match its pattern
    pub fn format_error(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Format {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an invalid query error
    pub fn invalid_query(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            query: query.into(),
            message: message.into(),
        }
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a not found error
    pub fn source_not_found(url: impl Into<String>) -> Self {
        Self::SourceNotFound { url: url.into() }
    }

    /// Create a server error (5xx status codes)
    pub fn source_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::SourceServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a client error (4xx status codes except 404 and 429)
    pub fn source_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::SourceClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a rate limit error
    pub fn source_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::SourceRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a service unavailable error
    pub fn source_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::SourceServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an empty page error
    pub fn source_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::SourceNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Check if error is retryable (network issues, server errors, rate limits)
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::SourceServerError { .. }
                | AppError::SourceServiceUnavailable { .. }
                | AppError::SourceRateLimit { .. }
        )
    }

    /// Check if error comes from retrieving a schedule page.
    /// These only cost the affected schedule kind, never the whole run.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            AppError::SourceFetch(_)
                | AppError::SourceNotFound { .. }
                | AppError::SourceServerError { .. }
                | AppError::SourceClientError { .. }
                | AppError::SourceRateLimit { .. }
                | AppError::SourceServiceUnavailable { .. }
                | AppError::SourceNoData { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
        )
    }

    /// Check if error is a malformed scraped fragment.
    pub fn is_format_error(&self) -> bool {
        matches!(self, AppError::Format { .. } | AppError::DateTimeParse(_))
    }
}
