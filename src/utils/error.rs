use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("request to judge site failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("judge site answered with status {status}")]
    UpstreamStatus { status: u16 },

    #[error("missing required parameter: {name}")]
    MissingParam { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("roster file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("backend update failed: {message}")]
    StoreError { message: String },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
