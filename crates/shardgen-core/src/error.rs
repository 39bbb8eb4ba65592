//! Error types for the shardgen core library.

/// Result type alias for shardgen operations
pub type ShardgenResult<T> = Result<T, ShardgenError>;

/// Main error type for shardgen operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShardgenError {
    /// Shard configuration cannot be satisfied by the catalog
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Error message describing the configuration issue
        message: String,
    },

    /// Invalid input error
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Error message describing the invalid input
        message: String,
    },

    /// Template parsing or rendering error
    #[error("Template error: {message}")]
    TemplateError {
        /// Error message describing the template failure
        message: String,
    },

    /// File I/O error
    #[error("File I/O error: {message}")]
    FileError {
        /// Error message describing the file operation failure
        message: String,
    },
}

impl ShardgenError {
    /// Create a new configuration error
    #[must_use]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// Create a new invalid input error
    #[must_use]
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new template error
    #[must_use]
    pub fn template<S: Into<String>>(message: S) -> Self {
        Self::TemplateError {
            message: message.into(),
        }
    }

    /// Create a new file error
    #[must_use]
    pub fn file<S: Into<String>>(message: S) -> Self {
        Self::FileError {
            message: message.into(),
        }
    }

    /// Check if this error is due to invalid user input
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::ConfigurationError { .. }
        )
    }

    /// Get the error category for logging/metrics
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::ConfigurationError { .. } => "configuration",
            Self::InvalidInput { .. } => "input",
            Self::TemplateError { .. } => "template",
            Self::FileError { .. } => "file",
        }
    }
}

// Convert from common error types
impl From<std::io::Error> for ShardgenError {
    fn from(err: std::io::Error) -> Self {
        Self::file(err.to_string())
    }
}

impl From<minijinja::Error> for ShardgenError {
    fn from(err: minijinja::Error) -> Self {
        Self::template(err.to_string())
    }
}

impl From<toml::de::Error> for ShardgenError {
    fn from(err: toml::de::Error) -> Self {
        Self::configuration(format!("TOML catalog error: {err}"))
    }
}
