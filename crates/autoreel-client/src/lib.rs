//! Typed HTTP client for the AutoReel REST API (`/api/v1`).
//!
//! One best-effort GET per call: no retry, no caching. Non-2xx responses
//! surface as [`ClientError::Status`] carrying the HTTP status.

pub mod analytics;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod logs;
pub mod profiles;
pub mod reels;

pub use client::AutoreelClient;
pub use error::ClientError;
