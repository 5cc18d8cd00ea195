use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No chat id was provided and the client has no default configured.
    ///
    /// Raised before any request is made.
    #[error("chat id unknown: none provided and no default configured")]
    MissingChatId,

    /// The request to the Telegram API failed.
    ///
    /// Covers connection failures, timeouts, and non-success HTTP statuses.
    #[error("request to Telegram API failed: {0}")]
    Request(#[from] reqwest::Error),
}
