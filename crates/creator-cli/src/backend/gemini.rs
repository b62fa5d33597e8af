use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use creator_core::error::single_line;
use creator_core::GenerationConfig;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::{debug, info};

use super::ScriptBackend;
use crate::config::BackendConfig;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini backend, talking to the `generateContent` REST endpoint.
///
/// Supports two authentication methods:
/// - Gemini API key (`GEMINI_API_KEY`), public endpoint
/// - Vertex AI (`GOOGLE_CLOUD_PROJECT` + `GOOGLE_CLOUD_LOCATION`) with an OAuth
///   token from `GOOGLE_OAUTH_ACCESS_TOKEN` or Application Default Credentials
///   via `gcloud`
pub struct GeminiBackend {
    client: Client,
    config: BackendConfig,
    /// Overrides the service root, e.g. for a local test server.
    base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Endpoint {
    ApiKey { key: String },
    VertexAi { project: String, location: String },
}

impl GeminiBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    fn endpoint(&self) -> Result<Endpoint> {
        if let Some(ref key) = self.config.gemini_api_key {
            return Ok(Endpoint::ApiKey { key: key.clone() });
        }
        match self.config.google_cloud_project {
            Some(ref project) => Ok(Endpoint::VertexAi {
                project: project.clone(),
                location: self.config.google_cloud_location.clone(),
            }),
            None => bail!(
                "no Gemini credentials configured; set GEMINI_API_KEY or \
                 GOOGLE_CLOUD_PROJECT (with GOOGLE_CLOUD_LOCATION for Vertex AI)"
            ),
        }
    }

    fn url_for(&self, endpoint: &Endpoint) -> String {
        let model = &self.config.model;
        match endpoint {
            Endpoint::ApiKey { .. } => {
                let base = self.base_url.as_deref().unwrap_or(GEMINI_API_BASE);
                format!("{base}/models/{model}:generateContent")
            }
            Endpoint::VertexAi { project, location } => {
                let base = match self.base_url {
                    Some(ref base) => base.clone(),
                    None => format!("https://{location}-aiplatform.googleapis.com/v1"),
                };
                format!(
                    "{base}/projects/{project}/locations/{location}/publishers/google/models/{model}:generateContent"
                )
            }
        }
    }

    async fn with_auth(
        &self,
        builder: RequestBuilder,
        endpoint: &Endpoint,
    ) -> Result<RequestBuilder> {
        match endpoint {
            Endpoint::ApiKey { key } => Ok(builder.header("x-goog-api-key", key.as_str())),
            Endpoint::VertexAi { .. } => {
                let token = match self.config.access_token {
                    Some(ref token) => token.clone(),
                    None => application_default_token().await?,
                };
                Ok(builder.bearer_auth(token))
            }
        }
    }
}

/// Fetch an access token from Application Default Credentials.
async fn application_default_token() -> Result<String> {
    let output = Command::new("gcloud")
        .args(["auth", "application-default", "print-access-token"])
        .output()
        .await
        .context(
            "no access token available. Set GOOGLE_OAUTH_ACCESS_TOKEN or install the \
             Google Cloud CLI and run: gcloud auth application-default login",
        )?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "gcloud could not provide an access token (run: gcloud auth application-default login): {}",
            single_line(&stderr)
        );
    }
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        bail!("gcloud returned an empty access token");
    }
    debug!("gcloud: access token acquired");
    Ok(token)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str, config: &'a GenerationConfig) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: config,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if any.
    fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.to_string());
    format!("HTTP {status}: {}", single_line(&detail))
}

#[async_trait]
impl ScriptBackend for GeminiBackend {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model_hint(&self) -> Option<&str> {
        Some(self.config.model.as_str())
    }

    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<Option<String>> {
        let endpoint = self.endpoint()?;
        let url = self.url_for(&endpoint);
        info!(model = %self.config.model, "sending generateContent request");

        let builder = self
            .client
            .post(&url)
            .json(&GenerateContentRequest::new(prompt, config));
        let resp = self
            .with_auth(builder, &endpoint)
            .await?
            .send()
            .await
            .context("request to Gemini failed")?;

        let status = resp.status();
        let body = resp.text().await.context("read response body")?;
        if !status.is_success() {
            bail!(error_message(status, &body));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).context("malformed generateContent response")?;
        debug!(candidates = parsed.candidates.len(), "response decoded");
        Ok(parsed.into_first_text())
    }
}
