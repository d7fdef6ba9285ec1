mod cli;

use cli::Args;
use sbom_uploader::adapters::outbound::console::StderrProgressReporter;
use sbom_uploader::adapters::outbound::filesystem::FileSystemSbomReader;
use sbom_uploader::adapters::outbound::network::{DependencyTrackClient, RetryingHttpClient};
use sbom_uploader::application::dto::{UploadRequest, UploadSettings};
use sbom_uploader::application::use_cases::UploadSbomUseCase;
use sbom_uploader::config;
use sbom_uploader::shared::error::ExitCode;
use sbom_uploader::shared::Result;
use std::process;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostic logs go to stderr; RUST_LOG overrides the verbosity flag
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,sbom_uploader=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(args: Args) -> Result<()> {
    let settings = resolve_settings(&args)?;

    // Validate before anything touches stdin or the network
    let request = UploadRequest::from_settings(&settings)?;
    debug!(
        url = %request.server_url,
        project = %request.project_name,
        version = %request.project_version,
        parent = ?request.parent_name,
        sbom = %request.sbom_source,
        "Resolved upload request"
    );

    // Create adapters (Dependency Injection)
    let http = RetryingHttpClient::new(settings.retry_policy(), settings.request_timeout()?)?;
    let client = DependencyTrackClient::new(http, &request.server_url, &request.api_key);
    let sbom_reader = FileSystemSbomReader::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = UploadSbomUseCase::new(sbom_reader, client.clone(), client, progress_reporter);
    use_case.execute(&request)?;

    println!("✅ SBOM upload successful.");
    Ok(())
}

/// Merges flags (with their environment fallbacks) over the config file
fn resolve_settings(args: &Args) -> Result<UploadSettings> {
    let file_settings = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => {
            let cwd = std::env::current_dir()?;
            let discovered = config::discover_config(&cwd)?;
            if discovered.is_some() {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    cwd.join(config::CONFIG_FILENAME).display()
                );
            }
            discovered
        }
    };

    let settings = args.to_settings();
    Ok(match file_settings {
        Some(file) => settings.or(file.into()),
        None => settings,
    })
}
