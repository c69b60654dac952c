//! `stocksync-http` — the resilient request primitive.
//!
//! Every outbound call in the pipeline goes through [`RobustClient`]:
//! one logical request with bounded retry and exponential backoff on
//! rate-limiting, driven by an explicit state machine.

pub mod client;
pub mod retry;

pub use client::{HttpClientError, HttpMethod, RequestSpec, RobustClient};
pub use retry::{AttemptOutcome, RetryPolicy, RetryState};
