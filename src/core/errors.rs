use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("Page not available: {0}")]
    PageUnavailable(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("PageError: {0}")]
    Custom(String),
}

impl From<reqwest::Error> for PageError {
    fn from(error: reqwest::Error) -> Self {
        PageError::Http(Box::new(error))
    }
}
