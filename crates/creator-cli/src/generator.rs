use creator_core::{strip_code_fences, GenerationConfig, GenerationError};
use creator_prompts::assemble_prompt;
use tracing::{info, warn};

use crate::backend::ScriptBackend;

/// Turn instruction text into a cleaned-up script.
///
/// Every backend failure collapses into [`GenerationError::Remote`]; an answer
/// without text becomes [`GenerationError::NoContent`]. No retries.
pub async fn generate_script(
    backend: &dyn ScriptBackend,
    instructions: &str,
) -> Result<String, GenerationError> {
    let prompt = assemble_prompt(instructions);
    let config = GenerationConfig::default();
    info!(
        backend = backend.name(),
        model = backend.model_hint().unwrap_or("-"),
        prompt_len = prompt.len(),
        "generating script"
    );

    match backend.generate(&prompt, &config).await {
        Ok(Some(text)) => {
            let script = strip_code_fences(&text);
            info!(raw_len = text.len(), script_len = script.len(), "script generated");
            Ok(script)
        }
        Ok(None) => {
            warn!("model returned no content");
            Err(GenerationError::NoContent)
        }
        Err(e) => {
            warn!("generation failed: {e:#}");
            Err(GenerationError::remote(format!("{e:#}")))
        }
    }
}
