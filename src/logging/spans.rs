//! Spans for a run and for each processed item

use instant::Instant;
use tracing::{span, Level, Span};
use uuid::Uuid;

use crate::pipeline::Decision;

/// Root span covering one pass over the input
pub struct RunSpan {
    span: Span,
    start_time: Instant,
}

impl RunSpan {
    pub fn new(run_id: Uuid, strategy: &str) -> Self {
        let span = span!(Level::INFO, "cover_run", run_id = %run_id, strategy = strategy);
        Self {
            span,
            start_time: Instant::now(),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn finish(self, items: usize) {
        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(parent: &self.span, items, elapsed_ms, "Run completed");
    }
}

/// Span for a single identifier, from fetch to recorded decision
pub struct ItemSpan {
    span: Span,
    start_time: Instant,
}

impl ItemSpan {
    pub fn new(index: usize, identifier: &str) -> Self {
        let span = span!(Level::DEBUG, "cover_item", index, identifier);
        Self {
            span,
            start_time: Instant::now(),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn record_failure(&self, error: &dyn std::error::Error) {
        tracing::warn!(parent: &self.span, error = %error, "Could not obtain a usable image");
    }

    pub fn finish(self, decision: Decision, score: Option<f64>) {
        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(
            parent: &self.span,
            decision = ?decision,
            score = score,
            elapsed_ms,
            "Item recorded"
        );
    }
}
