//! # Telegram Message Client
//! Asynchronous wrapper around the Telegram Bot API `sendMessage` call, providing a small client to push text messages to a chat or channel from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who need to deliver notifications from services, cron jobs, or monitoring scripts without pulling in a full bot framework: configure with [`ClientBuilder`] (default chat, formatting mode, timeout, proxies), then call [`Client::send`] wherever an alert should go out.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`) are available in your application.
//!
//! ## Out of scope
//! Not a bot framework. No update polling or webhooks, no media or keyboards, no rate-limit handling, no retries. It only wraps the outbound `sendMessage` call and inherits the Bot API's availability and limits.
//!
//! ## Errors
//! Calling [`Client::send`] without a resolvable chat id fails with [`Error::MissingChatId`] before any request is made. All network calls surface transport failures, timeouts, and non-2xx statuses as [`Error::Request`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! Note that Telegram may report application-level errors inside a 200 response; that envelope is returned to the caller untouched rather than raised as [`Error::Request`].
//!
//! ## Example
//! ```no_run
//! use telegram_message_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), telegram_message_client::Error> {
//!     let client = Client::builder("YOUR_BOT_TOKEN")
//!         .chat_id("YOUR_CHAT_ID")
//!         .build()?;
//!
//!     let response = client.send("Hello, world!", None).await?;
//!     println!("{response}");
//!
//!     // Override the configured chat for a single message.
//!     client.send("ops alert", Some("-1001234567890")).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod models;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use models::{ParseMode, ProxyConfig};

/// Result type alias for Telegram client operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
