use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpamViewError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type SpamViewResult<T> = Result<T, SpamViewError>;
