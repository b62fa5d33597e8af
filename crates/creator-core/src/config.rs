use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every generation request.
///
/// Field names serialize to the `generationConfig` object expected by the
/// `generateContent` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl GenerationConfig {
    pub const MAX_OUTPUT_TOKENS: u32 = 2048;
    pub const TEMPERATURE: f32 = 0.4;
    pub const TOP_P: f32 = 1.0;
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: Self::MAX_OUTPUT_TOKENS,
            temperature: Self::TEMPERATURE,
            top_p: Self::TOP_P,
        }
    }
}
