use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("no usable keywords: every keyword was empty or blank")]
    EmptyKeywords,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
