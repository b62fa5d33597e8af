use std::io;

use clap::Parser;
use creator_cli::backend::gemini::GeminiBackend;
use creator_cli::config::{BackendConfig, CliArgs};
use creator_cli::pipeline;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    let config = BackendConfig::from_env();
    debug!(
        model = %config.model,
        api_key = config.gemini_api_key.is_some(),
        project = config.google_cloud_project.as_deref().unwrap_or("-"),
        location = %config.google_cloud_location,
        "backend configuration"
    );

    let backend = GeminiBackend::new(config);
    let mut stdout = io::stdout();
    pipeline::run_and_report(&backend, &args.instruction_file, &args.output_file, &mut stdout)
        .await;
}
