use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use sbom_uploader::application::dto::UploadSettings;
use sbom_uploader::shared::error::ExitCode;
use std::path::PathBuf;
use std::process;

/// Upload an SBOM to Dependency-Track
///
/// Every setting can also be provided through its environment variable.
/// Flags win over environment variables, which win over the config file.
#[derive(Parser, Debug)]
#[command(name = "sbom-uploader")]
#[command(about = "Uploads SBOM to Dependency-Track", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Dependency-Track server base URL
    #[arg(long, env = "SBOM_UPLOADER_URL")]
    pub url: Option<String>,

    /// API key sent in the X-Api-Key header
    #[arg(long, env = "SBOM_UPLOADER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Project name
    #[arg(long, env = "SBOM_UPLOADER_NAME")]
    pub name: Option<String>,

    /// Project version
    #[arg(long, env = "SBOM_UPLOADER_VERSION")]
    pub version: Option<String>,

    /// Parent project name; created as an aggregating project when absent
    #[arg(long, env = "SBOM_UPLOADER_PARENT")]
    pub parent: Option<String>,

    /// Mark this version as the latest one [default: true]
    #[arg(
        long,
        env = "SBOM_UPLOADER_LATEST",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set,
        value_name = "BOOL"
    )]
    pub latest: Option<bool>,

    /// Comma-separated project tags
    #[arg(long, env = "SBOM_UPLOADER_TAGS")]
    pub tags: Option<String>,

    /// Path to the SBOM file (reads stdin when omitted)
    #[arg(long, env = "SBOM_UPLOADER_SBOM", value_name = "PATH")]
    pub sbom: Option<PathBuf>,

    /// Number of retries after the first attempt [default: 20]
    #[arg(long, env = "SBOM_UPLOADER_MAX_RETRIES", value_name = "N")]
    pub max_retries: Option<u32>,

    /// Per-request timeout in seconds [default: none]
    #[arg(
        long = "timeout",
        env = "SBOM_UPLOADER_TIMEOUT",
        value_name = "SECONDS"
    )]
    pub timeout_secs: Option<u64>,

    /// Path to config file (auto-discovers sbom-uploader.config.yml if not specified)
    #[arg(short, long, env = "SBOM_UPLOADER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print diagnostic logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parses the command line, exiting on `--help` or a usage error
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(e) => {
                let code = exit_code_for(&e);
                let _ = e.print();
                process::exit(code.as_i32());
            }
        }
    }

    /// Settings carried by flags and their environment fallbacks
    pub fn to_settings(&self) -> UploadSettings {
        UploadSettings {
            url: self.url.clone(),
            api_key: self.api_key.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            parent: self.parent.clone(),
            latest: self.latest,
            tags: self.tags.clone(),
            sbom: self.sbom.clone(),
            max_retries: self.max_retries,
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Help output is a success; everything else clap rejects is a usage error
fn exit_code_for(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}
