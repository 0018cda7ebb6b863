//! Record of generations served, newest first.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use tokio::sync::RwLock;

use crate::types::{GenerationKind, GenerationOrigin, Generated};

/// Maximum entries kept before pruning.
const MAX_LOG_ENTRIES: usize = 1_000;

/// One served generation.
#[derive(Debug, Clone)]
pub struct GenerationRecord {
    pub record_id: String,
    pub kind: GenerationKind,
    pub origin: GenerationOrigin,
    pub elapsed_ms: u64,
    pub generated_at: DateTime<Utc>,
}

impl GenerationRecord {
    fn from_generated(generated: &Generated) -> Self {
        Self {
            record_id: uuid::Uuid::new_v4().to_string(),
            kind: generated.kind,
            origin: generated.origin.clone(),
            elapsed_ms: generated.elapsed_ms,
            generated_at: generated.generated_at,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, GenerationOrigin::Fallback { .. })
    }
}

/// Bounded in-memory generation log.
pub struct GenerationLog {
    entries: RwLock<VecDeque<GenerationRecord>>,
    max_entries: usize,
}

impl Default for GenerationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationLog {
    pub fn new() -> Self {
        Self::with_max_entries(MAX_LOG_ENTRIES)
    }

    /// Create with custom max entries.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            max_entries: max_entries.max(1),
        }
    }

    /// Record a served generation.
    pub async fn record(&self, generated: &Generated) {
        let mut entries = self.entries.write().await;
        entries.push_front(GenerationRecord::from_generated(generated));

        while entries.len() > self.max_entries {
            entries.pop_back();
        }
    }

    /// Most recent `limit` records.
    pub async fn recent(&self, limit: usize) -> Vec<GenerationRecord> {
        self.entries.read().await.iter().take(limit).cloned().collect()
    }

    /// Number of fallbacks of `kind` still in the log.
    pub async fn fallback_count(&self, kind: GenerationKind) -> usize {
        self.entries
            .read()
            .await
            .iter()
            .filter(|r| r.kind == kind && r.is_fallback())
            .count()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
