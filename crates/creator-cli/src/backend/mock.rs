use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use creator_core::GenerationConfig;

use super::ScriptBackend;

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Empty,
    Fail(String),
}

/// A mock backend for testing that returns a preconfigured answer and
/// records every prompt it was asked to generate from.
pub struct MockBackend {
    reply: MockReply,
    prompts: Mutex<Vec<String>>,
}

impl MockBackend {
    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that answers with the given text.
    pub fn success(text: &str) -> Self {
        Self::with_reply(MockReply::Text(text.to_string()))
    }

    /// Create a mock whose answer carries no content.
    pub fn empty() -> Self {
        Self::with_reply(MockReply::Empty)
    }

    /// Create a mock whose call fails with the given message.
    pub fn failure(message: &str) -> Self {
        Self::with_reply(MockReply::Fail(message.to_string()))
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }
}

#[async_trait]
impl ScriptBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str, _config: &GenerationConfig) -> Result<Option<String>> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        match &self.reply {
            MockReply::Text(text) => Ok(Some(text.clone())),
            MockReply::Empty => Ok(None),
            MockReply::Fail(message) => Err(anyhow!("{message}")),
        }
    }
}
