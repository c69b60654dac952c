//! Retrying HTTP client over `reqwest`.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};

use crate::retry::{AttemptOutcome, RetryPolicy, RetryState};

/// The pipeline only ever issues GET and POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Declarative description of one logical request.
///
/// Kept separate from `reqwest`'s builder so the request can be rebuilt
/// for every retry attempt.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    method: HttpMethod,
    url: String,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl RequestSpec {
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// JSON body, sent with `Content-Type: application/json`.
    pub fn json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Failure of the whole retry loop (not of a single attempt).
///
/// Note that non-success HTTP statuses are *not* errors here: any non-429
/// response is handed back to the caller as `Ok`, and the caller decides
/// what its status means.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// The attempt budget ran out without obtaining any response.
    #[error("retry budget exhausted after {attempts} attempt(s): {last_error}")]
    Exhausted { attempts: u32, last_error: String },

    /// The request could not be constructed (bad URL or header).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// HTTP client with bounded retry and exponential backoff.
///
/// Policy: HTTP 200 returns immediately; HTTP 429 sleeps
/// `factor * 2^attempt` and retries; any other status is terminal for the
/// call and returned as-is; transport failures are retried on the same
/// schedule. Only rate-limiting and transport failures consume retries.
#[derive(Debug, Clone)]
pub struct RobustClient {
    client: reqwest::Client,
    policy: RetryPolicy,
}

impl RobustClient {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            policy,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Issue one logical request, retrying per the policy.
    pub async fn request(&self, spec: &RequestSpec) -> Result<reqwest::Response, HttpClientError> {
        let mut state = RetryState::start();
        let mut last_error = String::new();

        // Responses return directly from the attempt; only RateLimited
        // and Transport outcomes are fed into the state machine, so the
        // loop only ever sees Attempting, Backoff, and Exhausted.
        while let RetryState::Attempting { attempt } = state {
            match self.attempt(spec).await {
                Ok(response) => {
                    let status = response.status();
                    if status == StatusCode::OK {
                        debug!(
                            method = spec.method.as_str(),
                            url = %spec.url,
                            attempt,
                            "request succeeded"
                        );
                        return Ok(response);
                    }
                    if status != StatusCode::TOO_MANY_REQUESTS {
                        // Terminal-per-call: only rate-limiting is retried.
                        warn!(
                            method = spec.method.as_str(),
                            url = %spec.url,
                            status = status.as_u16(),
                            attempt,
                            "non-success response, not retrying"
                        );
                        return Ok(response);
                    }
                    warn!(
                        method = spec.method.as_str(),
                        url = %spec.url,
                        attempt,
                        "rate limited, backing off"
                    );
                    last_error = format!("rate limited (status {status})");
                    state = state.on_outcome(AttemptOutcome::RateLimited, &self.policy);
                }
                Err(error) if error.is_builder() => {
                    return Err(HttpClientError::InvalidRequest(error.to_string()));
                }
                Err(error) => {
                    warn!(
                        method = spec.method.as_str(),
                        url = %spec.url,
                        attempt,
                        error = %error,
                        "transport failure, will retry"
                    );
                    last_error = error.to_string();
                    state = state.on_outcome(AttemptOutcome::Transport, &self.policy);
                }
            }

            if let RetryState::Backoff { attempt, delay } = state {
                debug!(
                    url = %spec.url,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "sleeping before retry"
                );
                tokio::time::sleep(delay).await;
                state = state.resume();
            }
        }

        let attempts = match state {
            RetryState::Exhausted { attempts } => attempts,
            _ => self.policy.max_attempts,
        };
        warn!(url = %spec.url, attempts, "retry budget exhausted");
        Err(HttpClientError::Exhausted {
            attempts,
            last_error,
        })
    }

    async fn attempt(&self, spec: &RequestSpec) -> Result<reqwest::Response, reqwest::Error> {
        let mut builder = match spec.method {
            HttpMethod::Get => self.client.get(&spec.url),
            HttpMethod::Post => self.client.post(&spec.url),
        };
        if !spec.query.is_empty() {
            builder = builder.query(&spec.query);
        }
        for (name, value) in &spec.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &spec.body {
            builder = builder.json(body);
        }
        builder.send().await
    }
}
