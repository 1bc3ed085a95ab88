use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Failed to fetch {resource}: {reason}")]
    Fetch { resource: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GameError {
    pub fn fetch(resource: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fetch {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
