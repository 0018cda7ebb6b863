//! Launchpad Agent - generated copy for token pages
//!
//! Two operations are delegated to an LLM:
//! - writing a short promotional pitch for a new token
//! - summarizing chat comments into a one-sentence market sentiment
//!
//! Both are optional enrichments. Every call is bounded by a timeout and
//! degrades to a fixed fallback string, so callers never see an error.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          GenerationSlot (x2)            │
//! │  (latest-wins, cancellable requests)    │
//! └────────────────┬────────────────────────┘
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │          CopywriterService              │
//! │  (prompts, timeout, fallback, log)      │
//! └────────────────┬────────────────────────┘
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │            LlmBackend                   │
//! │  (Gemini / OpenAI-compatible / Mock)    │
//! └─────────────────────────────────────────┘
//! ```

pub mod audit;
pub mod backend;
pub mod prompt;
pub mod service;
pub mod slot;
pub mod types;

// Re-export main types for convenience
pub use audit::{GenerationLog, GenerationRecord};
pub use backend::traits::{CompletionRequest, CompletionResponse, LlmBackend, LlmError};
pub use service::{CopywriterService, ServiceConfig};
pub use slot::{GenerationHandle, GenerationSlot};
pub use types::*;
