use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("unsupported {field}: {value:?}")]
    UnsupportedOption { field: &'static str, value: String },

    #[error("a submission is already in progress")]
    AlreadyProcessing,

    #[error("element not found: {0}")]
    MissingElement(&'static str),

    #[error("CSRF token not found on page")]
    MissingCsrfToken,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DashboardError {
    pub fn unsupported(field: &'static str, value: &str) -> Self {
        DashboardError::UnsupportedOption {
            field,
            value: value.to_string(),
        }
    }
}

impl From<gloo_net::Error> for DashboardError {
    fn from(err: gloo_net::Error) -> Self {
        DashboardError::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
