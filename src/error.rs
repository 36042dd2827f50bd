use thiserror::Error;

/// The one message shown to users for any failed retrieval. Full detail
/// goes to the log, never to the user.
pub const GENERIC_FAILURE_MESSAGE: &str = "レシピの取得に失敗しました。もう一度お試しください。";

/// Errors that can occur while talking to the suggestion service
#[derive(Error, Debug)]
pub enum SuggestError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status
    #[error("API returned status {0}")]
    Status(u16),

    /// The service answered `success: false`
    #[error("API reported failure: {0}")]
    Api(String),

    /// Well-formed JSON that matches none of the accepted response shapes
    #[error("unrecognized response shape")]
    UnrecognizedShape,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl SuggestError {
    /// The generic localized message for this failure. Every variant maps
    /// to the same string; the taxonomy exists for logs and tests only.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}
