//! Latest-wins holder for in-flight generations.
//!
//! A slot owns at most one running generation. Starting a new one aborts
//! the previous task and bumps the slot's sequence number; a task only
//! publishes its result while its sequence number is still current, so a
//! superseded request can never overwrite a newer one.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

use crate::types::{GenerationKind, Generated};

#[derive(Default)]
struct SlotState {
    seq: u64,
    pending: Option<AbortHandle>,
    interim: Option<String>,
    current: Option<Generated>,
}

/// Handle to one started generation.
pub struct GenerationHandle {
    seq: u64,
    join: JoinHandle<bool>,
}

impl GenerationHandle {
    /// Sequence number within the slot.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Wait for the task. Returns whether its result was published.
    pub async fn wait(self) -> bool {
        self.join.await.unwrap_or(false)
    }
}

/// Display slot for one kind of generated text.
pub struct GenerationSlot {
    kind: GenerationKind,
    state: Arc<RwLock<SlotState>>,
}

impl GenerationSlot {
    pub fn new(kind: GenerationKind) -> Self {
        Self {
            kind,
            state: Arc::new(RwLock::new(SlotState::default())),
        }
    }

    pub fn kind(&self) -> GenerationKind {
        self.kind
    }

    /// Start `generation`, superseding whatever is in flight.
    ///
    /// `interim` is shown by [`display`](Self::display) until the result lands.
    pub async fn start<F>(&self, interim: Option<String>, generation: F) -> GenerationHandle
    where
        F: Future<Output = Generated> + Send + 'static,
    {
        let mut state = self.state.write().await;
        state.seq += 1;
        let seq = state.seq;

        if let Some(previous) = state.pending.take() {
            previous.abort();
            debug!(kind = ?self.kind, superseded_by = seq, "Generation superseded");
        }
        state.interim = interim;

        let shared = Arc::clone(&self.state);
        let kind = self.kind;
        let join = tokio::spawn(async move {
            let generated = generation.await;

            let mut state = shared.write().await;
            if state.seq != seq {
                debug!(kind = ?kind, seq, "Dropping stale generation");
                return false;
            }
            state.current = Some(generated);
            state.interim = None;
            state.pending = None;
            true
        });

        state.pending = Some(join.abort_handle());
        GenerationHandle { seq, join }
    }

    /// Cancel the in-flight generation, keeping the last published text.
    ///
    /// Returns whether anything was in flight.
    pub async fn cancel(&self) -> bool {
        let mut state = self.state.write().await;
        state.seq += 1;
        state.interim = None;
        match state.pending.take() {
            Some(handle) => {
                handle.abort();
                debug!(kind = ?self.kind, "Generation cancelled");
                true
            }
            None => false,
        }
    }

    /// Forget the published text and cancel anything in flight.
    pub async fn clear(&self) {
        self.cancel().await;
        self.state.write().await.current = None;
    }

    /// Whether a generation is running.
    pub async fn is_pending(&self) -> bool {
        self.state.read().await.pending.is_some()
    }

    /// Last published generation.
    pub async fn current(&self) -> Option<Generated> {
        self.state.read().await.current.clone()
    }

    /// Text to show: interim text while pending, otherwise the last result.
    pub async fn display(&self) -> Option<String> {
        let state = self.state.read().await;
        match (&state.pending, &state.interim) {
            (Some(_), Some(interim)) => Some(interim.clone()),
            _ => state.current.as_ref().map(|g| g.text.clone()),
        }
    }
}
