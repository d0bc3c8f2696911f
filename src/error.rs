use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to write {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid --today value '{0}' (expected YYYY-MM-DD)")]
    InvalidToday(String),
}
