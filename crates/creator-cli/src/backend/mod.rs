pub mod gemini;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;
use creator_core::GenerationConfig;

/// Trait for remote text-generation backends.
///
/// A backend only moves a prompt to the model and the answer back. It does
/// NOT assemble prompts (handled by creator-prompts) or clean up the answer
/// (handled by the generator).
#[async_trait]
pub trait ScriptBackend: Send + Sync {
    /// Human-readable backend name for logging.
    fn name(&self) -> &str;

    /// Optional model hint for logging.
    fn model_hint(&self) -> Option<&str> {
        None
    }

    /// Send one prompt and wait for the answer.
    ///
    /// `Ok(None)` means the service responded but produced no text.
    async fn generate(&self, prompt: &str, config: &GenerationConfig) -> Result<Option<String>>;
}
