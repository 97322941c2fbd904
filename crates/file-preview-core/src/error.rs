use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown preview category: {0}")]
    UnknownCategory(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to render classification: {0}")]
    Render(#[from] serde_json::Error),
}
