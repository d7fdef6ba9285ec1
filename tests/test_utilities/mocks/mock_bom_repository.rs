use sbom_uploader::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock BomRepository for testing that captures submitted forms
#[derive(Clone)]
pub struct MockBomRepository {
    pub rejection: Option<(u16, String)>,
    pub forms: Arc<Mutex<Vec<Vec<(&'static str, String)>>>>,
    pub payloads: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockBomRepository {
    pub fn new() -> Self {
        Self {
            rejection: None,
            forms: Arc::new(Mutex::new(Vec::new())),
            payloads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_rejection(status: u16, body: &str) -> Self {
        Self {
            rejection: Some((status, body.to_string())),
            ..Self::new()
        }
    }

    pub fn forms(&self) -> Vec<Vec<(&'static str, String)>> {
        self.forms.lock().unwrap().clone()
    }

    pub fn payloads(&self) -> Vec<Vec<u8>> {
        self.payloads.lock().unwrap().clone()
    }
}

impl Default for MockBomRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BomRepository for MockBomRepository {
    fn upload(&self, form: &UploadForm) -> Result<BomReceipt> {
        self.forms.lock().unwrap().push(form.fields());
        self.payloads.lock().unwrap().push(form.bom().to_vec());

        if let Some((status, body)) = &self.rejection {
            return Err(UploadError::UploadRejected {
                status: *status,
                body: body.clone(),
            }
            .into());
        }

        Ok(BomReceipt {
            status: 200,
            token: None,
        })
    }
}
