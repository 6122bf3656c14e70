use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopasError {
    #[error("Content is required")]
    EmptyContent,

    #[error("Snippet not found: {0}")]
    SnippetNotFound(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CopasError>;
