use hsl_color::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid hex data: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
