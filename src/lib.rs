//! # ZeroBounce Client
//! Asynchronous wrapper around the ZeroBounce email validation HTTP API, providing simple methods to check remaining account credits and validate individual addresses from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who need to verify email addresses before sending (signup form hygiene, list cleaning, or batch verification pipelines): configure with [`ClientBuilder`], check credits, then validate addresses one at a time and inspect the returned [`ValidationResult`].
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`) are available in your application.
//!
//! ## Out of scope
//! Not a local syntax checker, bulk/batch uploader, or mailbox prober. It only proxies the ZeroBounce service and inherits its availability, scoring, and credit accounting. There is no retry policy; a timed-out validation comes back as a degraded "Unknown" result and retrying is the caller's decision.
//!
//! ## Errors
//! Non-2xx statuses surface as [`Error::RequestFailed`] with the status code and raw body. [`Client::get_credits`] additionally propagates transport and decode failures ([`Error::Http`], [`Error::Json`], [`Error::ResponseParse`]); [`Client::validate`] converts those into a degraded [`ValidationResult`] instead, so one slow or broken lookup never aborts a batch. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use zerobounce_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zerobounce_client::Error> {
//!     let client = Client::new("your-api-key")?;
//!
//!     let credits = client.get_credits().await?;
//!     println!("Credits remaining: {credits}");
//!
//!     let result = client.validate("flossie@example.com", None).await?;
//!     println!(
//!         "{}: {} ({})",
//!         result.email_address.as_deref().unwrap_or("?"),
//!         result.status.as_deref().unwrap_or("?"),
//!         result.sub_status.as_deref().unwrap_or("-"),
//!     );
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod models;

pub use client::{ApiVersion, Client, ClientBuilder};
pub use error::Error;
pub use models::ValidationResult;

/// Result type alias for ZeroBounce operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
