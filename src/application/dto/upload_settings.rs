use crate::sbom_upload::policies::RetryPolicy;
use crate::shared::error::UploadError;
use crate::shared::Result;
use std::path::PathBuf;
use std::time::Duration;

/// UploadSettings - raw, unvalidated settings from one configuration layer
///
/// Each source (flags with their environment fallback, the config file)
/// produces one of these; layers are combined with [`UploadSettings::or`]
/// and the result is validated into an [`UploadRequest`](super::UploadRequest).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSettings {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub parent: Option<String>,
    pub latest: Option<bool>,
    pub tags: Option<String>,
    pub sbom: Option<PathBuf>,
    pub max_retries: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl UploadSettings {
    /// Keeps every value already set and fills the gaps from `fallback`
    pub fn or(self, fallback: UploadSettings) -> Self {
        Self {
            url: self.url.or(fallback.url),
            api_key: self.api_key.or(fallback.api_key),
            name: self.name.or(fallback.name),
            version: self.version.or(fallback.version),
            parent: self.parent.or(fallback.parent),
            latest: self.latest.or(fallback.latest),
            tags: self.tags.or(fallback.tags),
            sbom: self.sbom.or(fallback.sbom),
            max_retries: self.max_retries.or(fallback.max_retries),
            timeout_secs: self.timeout_secs.or(fallback.timeout_secs),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        let policy = RetryPolicy::default();
        match self.max_retries {
            Some(max_retries) => policy.with_max_retries(max_retries),
            None => policy,
        }
    }

    /// Per-request deadline; `None` leaves requests unbounded
    ///
    /// Only the attempt count bounds a run unless a timeout is configured.
    pub fn request_timeout(&self) -> Result<Option<Duration>> {
        match self.timeout_secs {
            None => Ok(None),
            Some(0) => Err(UploadError::InvalidConfig {
                message: "timeout must be at least 1 second".to_string(),
            }
            .into()),
            Some(secs) => Ok(Some(Duration::from_secs(secs))),
        }
    }
}
