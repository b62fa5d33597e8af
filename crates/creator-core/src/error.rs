use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Prefix shared by every failure rendered through the console channel.
pub const SENTINEL_PREFIX: &str = "# Error";

/// Failure of the remote generation step.
///
/// The `Display` output is the sentinel text printed in place of a script,
/// so callers that only see strings can still detect a failed generation by
/// checking for [`SENTINEL_PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Network, auth, quota or decoding failure. All kinds collapse here.
    #[error("# Error generating script: {0}")]
    Remote(String),

    /// The service answered but returned no candidate text.
    #[error("# Error: Could not generate script. No content in response.")]
    NoContent,
}

impl GenerationError {
    /// Remote failure whose description is flattened to one console line.
    pub fn remote(description: impl std::fmt::Display) -> Self {
        GenerationError::Remote(single_line(&description.to_string()))
    }

    /// Sentinel text as it appears on the console.
    pub fn sentinel(&self) -> String {
        self.to_string()
    }
}

/// Collapse every run of whitespace, line breaks included, into one space.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Error)]
pub enum CreatorError {
    #[error("Error: Instruction file not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Error: Instruction file is empty.")]
    EmptyInput(PathBuf),

    #[error("Error reading instruction file: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing generated script to file '{}': {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl CreatorError {
    /// True for failures of the remote step, as opposed to local file errors.
    pub fn is_generation(&self) -> bool {
        matches!(self, CreatorError::Generation(_))
    }
}
