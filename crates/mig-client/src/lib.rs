//! Destination REST API client
//!
//! Bearer-authenticated `reqwest` client for the destination application,
//! with page-header pagination and bounded retry for transient failures.

pub(crate) mod client;
pub(crate) mod models;
pub(crate) mod retry;

#[cfg(test)]
mod tests;

pub use client::{Client, ClientError, ClientResult, ClientSettings};
pub use models::{CreatedUser, DestinationCourse, DestinationRole, DestinationUser, NewUser};
pub use retry::{IsRetryable, RetryPolicy, with_retry};
