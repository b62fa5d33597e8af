use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_MODEL: &str = "gemini-2.5-pro-preview-03-25";
pub const DEFAULT_LOCATION: &str = "us-central1";

#[derive(Debug, Parser)]
#[command(
    name = "creator",
    version,
    about = "Generates a Python script using a hosted Gemini model based on instructions \
             from a TXT file and saves it to an output file."
)]
pub struct CliArgs {
    /// Path to the TXT file containing instructions.
    pub instruction_file: PathBuf,

    /// Path to the output Python file where the generated script will be saved.
    pub output_file: PathBuf,
}

/// Ambient settings for the remote model, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Gemini API key. When set, the public Gemini API is used instead of Vertex AI.
    pub gemini_api_key: Option<String>,
    /// Google Cloud project ID (Vertex AI).
    pub google_cloud_project: Option<String>,
    /// Google Cloud location/region (Vertex AI).
    pub google_cloud_location: String,
    /// Pre-fetched OAuth access token for Vertex AI.
    pub access_token: Option<String>,
    pub model: String,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            gemini_api_key: get("GEMINI_API_KEY"),
            google_cloud_project: get("GOOGLE_CLOUD_PROJECT"),
            google_cloud_location: get("GOOGLE_CLOUD_LOCATION")
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            access_token: get("GOOGLE_OAUTH_ACCESS_TOKEN"),
            model: get("CREATOR_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}
