use crate::sbom_upload::policies::{RetryOn, RetryPolicy};
use crate::shared::error::UploadError;
use crate::shared::Result;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::RETRY_AFTER;
use reqwest::StatusCode;
use std::error::Error as _;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Blocking HTTP client that retries according to a [`RetryPolicy`]
///
/// One instance is built per run and shared by every request; cloning is
/// cheap and reuses the same connection pool.
#[derive(Debug, Clone)]
pub struct RetryingHttpClient {
    client: Client,
    policy: RetryPolicy,
}

impl RetryingHttpClient {
    /// Creates a client with the given retry policy and optional per-request timeout
    ///
    /// `None` disables reqwest's default blocking timeout, so a slow upload
    /// is never cut off mid-transfer.
    pub fn new(policy: RetryPolicy, timeout: Option<Duration>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sbom-uploader/{}", version);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, policy })
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Executes a request, retrying while `retry_on` deems the outcome retryable
    ///
    /// `build` is called once per attempt because request bodies such as
    /// multipart forms cannot be replayed.
    ///
    /// # Returns
    /// The first non-retryable response, or the last response once the retry
    /// budget is spent. Status evaluation is left to the caller.
    ///
    /// # Errors
    /// Returns [`UploadError::RequestFailed`] when every attempt ended in a
    /// transport error, or the builder error when the request is malformed.
    pub fn execute<F>(&self, retry_on: RetryOn, build: F) -> Result<Response>
    where
        F: Fn(&Client) -> Result<RequestBuilder>,
    {
        let mut retries = 0;

        loop {
            let request = build(&self.client)?.build()?;
            let method = request.method().to_string();
            let url = request.url().to_string();
            let attempt = retries + 1;

            debug!(%method, %url, attempt, "Sending request");

            let wait = match self.client.execute(request) {
                Ok(response) => {
                    let status = response.status();
                    if !retry_on.is_retryable_status(status.as_u16())
                        || !self.policy.allows_retry(retries)
                    {
                        debug!(%method, %url, status = status.as_u16(), "Received response");
                        return Ok(response);
                    }

                    let wait = self.policy.backoff(retries, retry_after(&response));
                    warn!(
                        %method,
                        %url,
                        status = status.as_u16(),
                        attempt,
                        wait_ms = wait.as_millis() as u64,
                        "Retryable response, retrying"
                    );
                    wait
                }
                Err(e) if is_permanent(&e) => return Err(e.into()),
                Err(e) => {
                    let details = error_chain(&e);
                    if !self.policy.allows_retry(retries) {
                        return Err(UploadError::RequestFailed {
                            method,
                            url,
                            attempts: attempt,
                            details,
                        }
                        .into());
                    }

                    let wait = self.policy.backoff(retries, None);
                    warn!(
                        %method,
                        %url,
                        attempt,
                        error = %details,
                        wait_ms = wait.as_millis() as u64,
                        "Request failed, retrying"
                    );
                    wait
                }
            };

            thread::sleep(wait);
            retries += 1;
        }
    }
}

/// Transport errors that no amount of retrying will fix
fn is_permanent(error: &reqwest::Error) -> bool {
    error.is_builder() || error.is_redirect()
}

/// `Retry-After` in whole seconds, honoured for 429 and 503 only
fn retry_after(response: &Response) -> Option<Duration> {
    match response.status() {
        StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE => response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs),
        _ => None,
    }
}

fn error_chain(error: &reqwest::Error) -> String {
    let mut details = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        details.push_str(": ");
        details.push_str(&cause.to_string());
        source = cause.source();
    }
    details
}
