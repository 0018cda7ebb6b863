//! CopywriterService - the entry point for generated copy.
//!
//! Wraps one backend with prompt building, a bounded wait and fixed
//! fallbacks. Nothing here returns an error: every failure is logged and
//! replaced with the fallback text for the requested kind.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::audit::GenerationLog;
use crate::backend::traits::{CompletionRequest, LlmBackend, LlmError};
use crate::prompt;
use crate::types::{FallbackReason, GenerationKind, Generated};

/// Configuration for the CopywriterService.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Longest wait for the backend before falling back (ms)
    pub timeout_ms: u64,
    /// Maximum tokens to request
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Whether to keep a generation log
    pub log_enabled: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 15_000,
            max_tokens: None,
            temperature: None,
            log_enabled: true,
        }
    }
}

/// Generates pitches and sentiment summaries.
pub struct CopywriterService {
    /// Configuration
    config: ServiceConfig,
    /// Text-generation backend
    backend: Arc<dyn LlmBackend>,
    /// Generation log
    log: Arc<GenerationLog>,
}

impl CopywriterService {
    /// Create a new service over `backend`.
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self {
            config: ServiceConfig::default(),
            backend,
            log: Arc::new(GenerationLog::new()),
        }
    }

    /// Create with configuration.
    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Configuration in use.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Backend model id.
    pub fn model(&self) -> &str {
        self.backend.id()
    }

    /// Generation log.
    pub fn log(&self) -> Arc<GenerationLog> {
        Arc::clone(&self.log)
    }

    /// Write a short promotional pitch for a token.
    pub async fn generate_pitch(&self, name: &str, ticker: &str) -> Generated {
        let (name, ticker) = (name.trim(), ticker.trim());
        if name.is_empty() || ticker.is_empty() {
            return self
                .finish(Generated::fallback(GenerationKind::Pitch, FallbackReason::EmptyInput, 0))
                .await;
        }
        self.generate(GenerationKind::Pitch, prompt::pitch_request(name, ticker))
            .await
    }

    /// Summarize comment texts into one sentence of market sentiment.
    pub async fn summarize_sentiment(&self, comments: &[String]) -> Generated {
        let comments: Vec<String> = comments
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect();
        if comments.is_empty() {
            return self
                .finish(Generated::fallback(GenerationKind::Sentiment, FallbackReason::EmptyInput, 0))
                .await;
        }
        self.generate(GenerationKind::Sentiment, prompt::sentiment_request(&comments))
            .await
    }

    async fn generate(&self, kind: GenerationKind, mut request: CompletionRequest) -> Generated {
        if let Some(max) = self.config.max_tokens {
            request = request.with_max_tokens(max);
        }
        if let Some(temp) = self.config.temperature {
            request = request.with_temperature(temp);
        }

        let start = Instant::now();
        let timeout = Duration::from_millis(self.config.timeout_ms);
        let outcome = match tokio::time::timeout(timeout, self.backend.complete(request)).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(self.config.timeout_ms)),
        };
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let generated = match outcome {
            Ok(response) => {
                let text = response.content.trim();
                if text.is_empty() {
                    debug!(kind = ?kind, "Backend returned empty text");
                    Generated::fallback(kind, FallbackReason::EmptyResponse, elapsed_ms)
                } else {
                    debug!(
                        kind = ?kind,
                        model = %self.backend.id(),
                        elapsed_ms,
                        tokens = response.usage.total(),
                        "Generation complete"
                    );
                    Generated::from_backend(kind, text, self.backend.id(), elapsed_ms)
                }
            }
            Err(LlmError::Timeout(ms)) => {
                warn!(kind = ?kind, timeout_ms = ms, "Generation timed out");
                Generated::fallback(kind, FallbackReason::Timeout, elapsed_ms)
            }
            Err(e) => {
                warn!(kind = ?kind, error = %e, "Generation failed");
                Generated::fallback(kind, FallbackReason::BackendError(e.to_string()), elapsed_ms)
            }
        };

        self.finish(generated).await
    }

    async fn finish(&self, generated: Generated) -> Generated {
        if self.config.log_enabled {
            self.log.record(&generated).await;
        }
        generated
    }
}
