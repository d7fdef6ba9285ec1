/// Contents of the multipart submission to the BOM endpoint
///
/// The form is a plain value; adapters translate it into a concrete
/// multipart body. Optional fields are only emitted when they carry a value,
/// and the SBOM bytes are passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    project_name: String,
    project_version: String,
    parent_name: Option<String>,
    is_latest: bool,
    project_tags: Option<String>,
    bom: Vec<u8>,
}

impl UploadForm {
    /// Name of the file part carrying the SBOM
    pub const BOM_PART: &'static str = "bom";
    /// File name announced for the SBOM part
    pub const BOM_FILE_NAME: &'static str = "sbom.json";

    pub fn new(project_name: &str, project_version: &str, bom: Vec<u8>) -> Self {
        Self {
            project_name: project_name.to_string(),
            project_version: project_version.to_string(),
            parent_name: None,
            is_latest: false,
            project_tags: None,
            bom,
        }
    }

    pub fn with_parent(mut self, parent_name: Option<&str>) -> Self {
        self.parent_name = parent_name
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        self
    }

    pub fn with_latest(mut self, is_latest: bool) -> Self {
        self.is_latest = is_latest;
        self
    }

    pub fn with_tags(mut self, tags: Option<&str>) -> Self {
        self.project_tags = tags.filter(|tags| !tags.is_empty()).map(str::to_string);
        self
    }

    pub fn bom(&self) -> &[u8] {
        &self.bom
    }

    /// Text fields in submission order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("projectName", self.project_name.clone())];
        if let Some(parent) = &self.parent_name {
            fields.push(("parentName", parent.clone()));
        }
        fields.push(("projectVersion", self.project_version.clone()));
        // The server creates the child project when it does not exist yet
        fields.push(("autoCreate", "true".to_string()));
        if self.is_latest {
            fields.push(("isLatest", "true".to_string()));
        }
        if let Some(tags) = &self.project_tags {
            fields.push(("projectTags", tags.clone()));
        }
        fields
    }
}
