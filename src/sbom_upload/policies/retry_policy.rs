use std::time::Duration;

/// Which outcomes of an HTTP attempt are worth another try
///
/// Transport failures (connection refused, reset, timeout) are always
/// retryable. The variants differ only in the set of status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryOn {
    /// 408, 429 and every 5xx
    TransientFailures,
    /// Transient failures plus 404.
    ///
    /// A freshly created parent project is not always visible to the BOM
    /// endpoint right away, which then answers 404 until it is. Only 404 is
    /// added: every other 4xx (405, 409, 410, 413, 415, ...) is final.
    TransientFailuresOrNotFound,
}

impl RetryOn {
    pub fn is_retryable_status(self, status: u16) -> bool {
        let transient = matches!(status, 408 | 429 | 500..=599);
        match self {
            RetryOn::TransientFailures => transient,
            RetryOn::TransientFailuresOrNotFound => transient || status == 404,
        }
    }
}

/// Bounded exponential backoff
///
/// The first attempt is followed by at most `max_retries` retries. The wait
/// before retry `n` (counting from zero) is `wait_min * 2^n`, capped at
/// `wait_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    wait_min: Duration,
    wait_max: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_RETRIES: u32 = 20;
    pub const DEFAULT_WAIT_MIN: Duration = Duration::from_secs(1);
    pub const DEFAULT_WAIT_MAX: Duration = Duration::from_secs(30);

    pub fn new(max_retries: u32, wait_min: Duration, wait_max: Duration) -> Self {
        Self {
            max_retries,
            wait_min,
            wait_max: wait_max.max(wait_min),
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Total number of requests issued when every attempt fails
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Whether another attempt may follow the given (0-based) retry count
    pub fn allows_retry(&self, retries_done: u32) -> bool {
        retries_done < self.max_retries
    }

    /// Wait before retry number `retry` (0-based).
    ///
    /// A server-provided `Retry-After` takes precedence over the computed
    /// value; both are capped at `wait_max`.
    pub fn backoff(&self, retry: u32, retry_after: Option<Duration>) -> Duration {
        if let Some(retry_after) = retry_after {
            return retry_after.min(self.wait_max);
        }

        2u32.checked_pow(retry)
            .and_then(|factor| self.wait_min.checked_mul(factor))
            .map_or(self.wait_max, |wait| wait.min(self.wait_max))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_RETRIES,
            Self::DEFAULT_WAIT_MIN,
            Self::DEFAULT_WAIT_MAX,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_statuses() {
        let retry_on = RetryOn::TransientFailures;
        for status in [408, 429, 500, 501, 502, 503, 504, 599] {
            assert!(retry_on.is_retryable_status(status), "{status}");
        }
        for status in [200, 201, 202, 301, 400, 401, 403, 404, 409, 422] {
            assert!(!retry_on.is_retryable_status(status), "{status}");
        }
    }

    #[test]
    fn test_not_found_is_retryable_for_upload() {
        let retry_on = RetryOn::TransientFailuresOrNotFound;
        assert!(retry_on.is_retryable_status(404));
        assert!(retry_on.is_retryable_status(503));
        assert!(!retry_on.is_retryable_status(200));
        assert!(!retry_on.is_retryable_status(202));
        assert!(!retry_on.is_retryable_status(400));
        assert!(!retry_on.is_retryable_status(403));
    }

    #[test]
    fn test_other_client_errors_are_final_for_upload() {
        let retry_on = RetryOn::TransientFailuresOrNotFound;
        for status in [405, 409, 410, 413, 415, 422] {
            assert!(!retry_on.is_retryable_status(status), "{} is final", status);
        }
    }

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries(), 20);
        assert_eq!(policy.max_attempts(), 21);
        assert!(policy.allows_retry(19));
        assert!(!policy.allows_retry(20));
    }

    #[test]
    fn test_backoff_doubles_until_cap() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(0, None), Duration::from_secs(1));
        assert_eq!(policy.backoff(1, None), Duration::from_secs(2));
        assert_eq!(policy.backoff(2, None), Duration::from_secs(4));
        assert_eq!(policy.backoff(4, None), Duration::from_secs(16));
        assert_eq!(policy.backoff(5, None), Duration::from_secs(30));
        assert_eq!(policy.backoff(19, None), Duration::from_secs(30));
    }

    #[test]
    fn test_backoff_does_not_overflow() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(40, None), Duration::from_secs(30));
        assert_eq!(policy.backoff(u32::MAX, None), Duration::from_secs(30));
    }

    #[test]
    fn test_retry_after_overrides_backoff() {
        let policy = RetryPolicy::default();
        assert_eq!(
            policy.backoff(0, Some(Duration::from_secs(7))),
            Duration::from_secs(7)
        );
        assert_eq!(
            policy.backoff(0, Some(Duration::from_secs(600))),
            Duration::from_secs(30)
        );
    }

    #[test]
    fn test_wait_max_never_below_wait_min() {
        let policy = RetryPolicy::new(3, Duration::from_secs(5), Duration::from_secs(1));
        assert_eq!(policy.backoff(0, None), Duration::from_secs(5));
    }

    #[test]
    fn test_zero_retries() {
        let policy = RetryPolicy::default().with_max_retries(0);
        assert_eq!(policy.max_attempts(), 1);
        assert!(!policy.allows_retry(0));
    }
}
