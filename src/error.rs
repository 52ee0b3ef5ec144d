use thiserror::Error;

/// Message shown in the stats area when the endpoint answers with a non-success status.
pub const FETCH_FAILED_MESSAGE: &str = "Unable to fetch the user details";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Username should not be empty")]
    Empty,

    #[error("Invalid Username")]
    Malformed,
}

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Unable to fetch the user details")]
    FetchFailed,

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{message}")]
    Shape { message: String },

    #[error("Lookup aborted: {0}")]
    Aborted(String),
}

impl StatsError {
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
