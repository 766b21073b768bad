use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZeroWasteError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown scenario: {id}")]
    UnknownScenario { id: String },

    #[error("At most {max} dominant activities may be selected, got {count}")]
    TooManyActivities { count: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, ZeroWasteError>;
