use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TalentMatchError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Request(Box<reqwest::Error>),

    #[error("HTTP {status} from {url}: {body}")]
    Status { status: StatusCode, url: String, body: String },

    #[error("Invalid API URL '{0}'")]
    InvalidUrl(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("TalentMatchError: {0}")]
    Custom(String),
}

impl TalentMatchError {
    /// Status code of a non-success response, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TalentMatchError::Status { status, .. } => Some(*status),
            TalentMatchError::Request(e) => e.status(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TalentMatchError {
    fn from(error: std::io::Error) -> Self {
        TalentMatchError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for TalentMatchError {
    fn from(error: reqwest::Error) -> Self {
        TalentMatchError::Request(Box::new(error))
    }
}
