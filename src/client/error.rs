use thiserror::Error;

/// Errors surfaced by the employee API client and the form.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure or undecodable response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("API base URL cannot carry a path: {0}")]
    BaseUrl(String),

    /// The API answered 404 for the targeted employee.
    #[error("employee not found: {0}")]
    NotFound(String),

    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Submission was blocked locally; the per-field errors live on the form.
    #[error("form has {0} invalid field(s)")]
    InvalidForm(usize),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}
