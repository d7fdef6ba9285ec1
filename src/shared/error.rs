use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The SBOM was accepted by the server, or help was printed
    Success = 0,
    /// Validation, I/O, transport or upload failure
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for the upload workflow.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Every variant belongs to one of four kinds: configuration, I/O,
/// transport, or protocol (an unexpected HTTP response).
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Missing required input: {setting} (via --{setting} or {env_var})\n\n💡 Hint: Pass the flag, export the environment variable, or set it in the config file")]
    MissingSetting {
        setting: &'static str,
        env_var: &'static str,
    },

    #[error("No SBOM content provided (empty stdin)\n\n💡 Hint: Pipe an SBOM into the command or pass --sbom <path>")]
    EmptyStdin,

    #[error("Failed to read SBOM: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    SbomReadError { path: PathBuf, details: String },

    #[error("HTTP request failed: {method} {url} giving up after {attempts} attempt(s)\nDetails: {details}\n\n💡 Hint: Check that the Dependency-Track URL is reachable")]
    RequestFailed {
        method: String,
        url: String,
        attempts: u32,
        details: String,
    },

    #[error("Parent project lookup failed for '{name}' ({status}): {body}")]
    ParentLookupFailed {
        name: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode parent project lookup response for '{name}'\nDetails: {details}")]
    ParentLookupDecodeError { name: String, details: String },

    #[error("Parent project creation failed for '{name}' ({status}): {body}\n\n💡 Hint: The API key needs the PORTFOLIO_MANAGEMENT permission to create projects")]
    ParentCreateFailed {
        name: String,
        status: u16,
        body: String,
    },

    #[error("Upload failed ({status}): {body}")]
    UploadRejected { status: u16, body: String },

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },
}
