use super::RetryingHttpClient;
use crate::ports::outbound::{BomReceipt, BomRepository, ProjectCreation, ProjectRepository};
use crate::sbom_upload::domain::{Project, UploadForm};
use crate::sbom_upload::policies::RetryOn;
use crate::shared::error::UploadError;
use crate::shared::Result;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Response;
use reqwest::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

/// Header carrying the Dependency-Track API key
const API_KEY_HEADER: &str = "X-Api-Key";

/// Body of an accepted BOM upload
#[derive(Debug, Deserialize)]
struct BomUploadResponse {
    token: Option<Uuid>,
}

/// DependencyTrackClient adapter for the Dependency-Track REST API
///
/// Implements both the ProjectRepository and BomRepository ports on top of a
/// shared [`RetryingHttpClient`].
///
/// # Endpoints
/// - `GET  /api/v1/project/lookup?name=<name>`
/// - `PUT  /api/v1/project`
/// - `POST /api/v1/bom` (multipart)
#[derive(Debug, Clone)]
pub struct DependencyTrackClient {
    http: RetryingHttpClient,
    base_url: String,
    api_key: String,
}

impl DependencyTrackClient {
    pub fn new(http: RetryingHttpClient, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path)
    }

    fn into_status_and_body(response: Response) -> (u16, String) {
        let status = response.status().as_u16();
        // The body is diagnostic only; an unreadable body must not mask the status
        let body = response.text().unwrap_or_default();
        (status, body)
    }
}

impl ProjectRepository for DependencyTrackClient {
    fn find_by_name(&self, name: &str) -> Result<Option<Project>> {
        let url = format!(
            "{}?name={}",
            self.endpoint("project/lookup"),
            urlencoding::encode(name)
        );

        let response = self.http.execute(RetryOn::TransientFailures, |client| {
            Ok(client.get(&url).header(API_KEY_HEADER, &self.api_key))
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let (status, body) = Self::into_status_and_body(response);
        if !(200..300).contains(&status) {
            return Err(UploadError::ParentLookupFailed {
                name: name.to_string(),
                status,
                body,
            }
            .into());
        }

        let project: Project =
            serde_json::from_str(&body).map_err(|e| UploadError::ParentLookupDecodeError {
                name: name.to_string(),
                details: e.to_string(),
            })?;

        Ok(Some(project).filter(Project::is_named))
    }

    fn create(&self, project: &Project) -> Result<ProjectCreation> {
        let url = self.endpoint("project");

        let response = self.http.execute(RetryOn::TransientFailures, |client| {
            Ok(client
                .put(&url)
                .header(API_KEY_HEADER, &self.api_key)
                .json(project))
        })?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(ProjectCreation::Created),
            StatusCode::CONFLICT => Ok(ProjectCreation::AlreadyExists),
            _ => {
                let (status, body) = Self::into_status_and_body(response);
                Err(UploadError::ParentCreateFailed {
                    name: project.name.clone(),
                    status,
                    body,
                }
                .into())
            }
        }
    }
}

impl BomRepository for DependencyTrackClient {
    fn upload(&self, form: &UploadForm) -> Result<BomReceipt> {
        let url = self.endpoint("bom");

        let response = self
            .http
            .execute(RetryOn::TransientFailuresOrNotFound, |client| {
                let bom = Part::bytes(form.bom().to_vec())
                    .file_name(UploadForm::BOM_FILE_NAME)
                    .mime_str("application/octet-stream")?;

                let multipart = form.fields().into_iter().fold(
                    Form::new().part(UploadForm::BOM_PART, bom),
                    |multipart, (name, value)| multipart.text(name, value),
                );

                Ok(client
                    .post(&url)
                    .header(API_KEY_HEADER, &self.api_key)
                    .multipart(multipart))
            })?;

        let (status, body) = Self::into_status_and_body(response);
        if status != StatusCode::OK.as_u16() && status != StatusCode::ACCEPTED.as_u16() {
            return Err(UploadError::UploadRejected { status, body }.into());
        }

        let token = serde_json::from_str::<BomUploadResponse>(&body)
            .ok()
            .and_then(|response| response.token);

        Ok(BomReceipt { status, token })
    }
}
