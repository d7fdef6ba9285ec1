use super::UploadSettings;
use crate::sbom_upload::domain::SbomSource;
use crate::shared::error::UploadError;
use crate::shared::Result;

/// UploadRequest - validated input of one upload run
///
/// Constructed once from the resolved settings and never mutated. Holding an
/// `UploadRequest` means the required settings are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Dependency-Track base URL without trailing slash
    pub server_url: String,
    pub api_key: String,
    pub project_name: String,
    /// Aggregating parent project, if one should be ensured
    pub parent_name: Option<String>,
    pub project_version: String,
    pub mark_as_latest: bool,
    /// Comma-separated project tags, forwarded verbatim
    pub tags: Option<String>,
    pub sbom_source: SbomSource,
}

impl UploadRequest {
    /// Validates settings into a request
    ///
    /// Required settings are checked in the order url, api-key, name,
    /// version; the first missing one is reported. A required value made
    /// only of whitespace counts as missing. `parent` and `tags` are kept
    /// whenever they are non-empty. `latest` defaults to true.
    pub fn from_settings(settings: &UploadSettings) -> Result<Self> {
        let server_url = required(&settings.url, "url", "SBOM_UPLOADER_URL")?
            .trim()
            .trim_end_matches('/')
            .to_string();
        let api_key = required(&settings.api_key, "api-key", "SBOM_UPLOADER_API_KEY")?;
        let project_name = required(&settings.name, "name", "SBOM_UPLOADER_NAME")?;
        let project_version = required(&settings.version, "version", "SBOM_UPLOADER_VERSION")?;

        Ok(Self {
            server_url,
            api_key,
            project_name,
            parent_name: optional(&settings.parent),
            project_version,
            mark_as_latest: settings.latest.unwrap_or(true),
            tags: optional(&settings.tags),
            sbom_source: SbomSource::from_path(settings.sbom.clone()),
        })
    }
}

fn required(
    value: &Option<String>,
    setting: &'static str,
    env_var: &'static str,
) -> Result<String> {
    value
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| UploadError::MissingSetting { setting, env_var }.into())
}

fn optional(value: &Option<String>) -> Option<String> {
    value.clone().filter(|value| !value.is_empty())
}
