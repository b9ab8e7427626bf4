pub mod directory;
pub mod gemini;

pub use directory::CandidateDirectory;
pub use gemini::{GeminiClient, GeminiError, PromptMode};
