pub mod config;
pub mod error;
pub mod script;

pub use config::GenerationConfig;
pub use error::{CreatorError, GenerationError};
pub use script::strip_code_fences;
