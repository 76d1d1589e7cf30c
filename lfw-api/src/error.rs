//! Client-side API error taxonomy.

/// Errors produced by the API client and source implementations.
///
/// `Unauthorized` is kept separate from the data errors: it means the
/// bearer credential is dead and the host application must clear it and
/// leave the dashboard, whereas the other variants are surfaced inline
/// and recovered locally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401-class rejection; the credential must be invalidated.
    #[error("authentication rejected")]
    Unauthorized,

    /// Network or transport failure before a usable body arrived.
    #[error("request failed: {0}")]
    Transport(String),

    /// The body arrived but did not decode against the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The envelope arrived with `success: false` or without data.
    #[error("{message}")]
    Rejected {
        message: String,
        code: Option<String>,
    },
}

impl ApiError {
    /// User-facing message for inline display in the dashboard.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired.".to_string(),
            ApiError::Transport(_) => "Could not reach the server.".to_string(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Rejected { message, .. } => message.clone(),
        }
    }
}
