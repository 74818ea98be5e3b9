//! Error types for the command-line application.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything that can stop the CLI before a result is rendered.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read menu from {source_name}: {error}")]
    Input {
        source_name: String,
        error: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CliError::Input {
            source_name: "lunch.txt".to_string(),
            error: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read menu from lunch.txt: not found");

        let err: CliError = ConfigError::InvalidValue("MENU_FORMAT".to_string()).into();
        assert_eq!(err.to_string(), "Invalid value for MENU_FORMAT");
    }
}
