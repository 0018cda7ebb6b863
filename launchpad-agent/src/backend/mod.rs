//! LLM Backend abstraction layer.
//!
//! - Gemini `generateContent` API
//! - OpenAI-compatible chat completions
//!
//! The hosted backends share request plumbing and HTTP status mapping.
//! - Mock backend for tests and offline runs

pub mod gemini;
mod http;
pub mod mock;
pub mod openai;
pub mod traits;

pub use gemini::GeminiBackend;
pub use mock::MockBackend;
pub use openai::OpenAiBackend;
pub use traits::{CompletionRequest, CompletionResponse, FinishReason, LlmBackend, LlmError, Usage};
